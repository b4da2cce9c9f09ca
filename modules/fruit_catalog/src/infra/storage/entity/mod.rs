pub mod fruits;
pub mod reviews;
pub mod users;
