mod selection_policy_tests;
