mod health_tests;
mod languages_tests;
mod matches_tests;
mod messages_tests;
mod profiles_tests;
mod users_tests;
