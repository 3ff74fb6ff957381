mod config_test;
mod employee_test;
mod forecast_test;
mod health_test;
mod middleware_test;
mod performance_test;
mod schedule_test;
mod shift_test;
mod test_utils;
