mod operation_kind_tests;
