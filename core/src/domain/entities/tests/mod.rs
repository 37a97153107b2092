mod pizza_tests;
mod user_tests;
