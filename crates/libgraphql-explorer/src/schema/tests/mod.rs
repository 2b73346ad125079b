mod schema_tests;
