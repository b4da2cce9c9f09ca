use crate::contract::model::{Fruit, Review, User};
use crate::infra::storage::entity;

/// Convert a database entity to a contract model
pub fn user_to_contract(entity: entity::users::Model) -> User {
    User {
        id: entity.id,
        email: entity.email,
        last_login: entity.last_login,
    }
}

pub fn fruit_to_contract(entity: entity::fruits::Model) -> Fruit {
    Fruit {
        id: entity.id,
        name: entity.name,
        kind: entity.kind,
        character: entity.character,
        abilities: entity.abilities,
        owner_user_id: entity.owner_user_id,
    }
}

pub fn review_to_contract(entity: entity::reviews::Model) -> Review {
    Review {
        id: entity.id,
        fruit_id: entity.fruit_id,
        rating: entity.rating,
        comment: entity.comment,
    }
}
