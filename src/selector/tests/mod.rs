mod calculator_tests;
