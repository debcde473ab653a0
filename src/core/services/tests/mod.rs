mod scenario_tests;
mod storage_failure_tests;
