mod profile_validation_tests;
