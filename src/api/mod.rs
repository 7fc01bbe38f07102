pub mod courses;
pub mod dashboard;
pub mod messages;
pub mod payments;
pub mod selections;
pub mod stripe_client;
pub mod users;
