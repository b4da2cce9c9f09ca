pub mod model;

pub use model::{Fruit, FruitUpdate, NewFruit, NewReview, Review, User};
