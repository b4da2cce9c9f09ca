pub mod error;
pub mod fruits;
pub mod repo;
pub mod reviews;
pub mod users;
