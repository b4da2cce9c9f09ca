use chrono::Utc;
use uuid::Uuid;

use fruit_catalog::contract::model::*;
use fruit_catalog::domain::error::DomainError;
// Note: These internal module imports are only for testing
// External consumers should only use the `contract` module

#[test]
fn test_contract_models() {
    let owner_id = Uuid::new_v4();

    let user = User {
        id: owner_id,
        email: "luffy@grandline.io".to_string(),
        last_login: Utc::now(),
    };

    assert_eq!(user.email, "luffy@grandline.io");

    let fruit = Fruit {
        id: Uuid::new_v4(),
        name: "Gomu Gomu no Mi".to_string(),
        kind: KIND_PARAMECIA.to_string(),
        character: "Monkey D. Luffy".to_string(),
        abilities: "Rubber body".to_string(),
        owner_user_id: owner_id,
    };

    assert_eq!(fruit.kind, "Paramecia");
    assert_eq!(fruit.owner_user_id, user.id);

    let new_fruit = NewFruit {
        name: "Mera Mera no Mi".to_string(),
        kind: KIND_LOGIA.to_string(),
        character: "Portgas D. Ace".to_string(),
        abilities: "Fire".to_string(),
        owner_email: "ace@grandline.io".to_string(),
    };

    assert_eq!(new_fruit.kind, "Logia");
    assert_eq!(new_fruit.owner_email, "ace@grandline.io");

    let review = Review {
        id: Uuid::new_v4(),
        fruit_id: fruit.id,
        rating: 5,
        comment: None,
    };

    assert_eq!(review.fruit_id, fruit.id);
    assert_eq!(review.comment, None);
}

#[test]
fn test_kind_constants() {
    assert_eq!(KIND_PARAMECIA, "Paramecia");
    assert_eq!(KIND_LOGIA, "Logia");
    assert_eq!(KIND_ZOAN, "Zoan");
}

#[test]
fn test_domain_errors() {
    let error = DomainError::user_not_found("nobody@grandline.io");

    match error {
        DomainError::UserNotFound { email } => {
            assert_eq!(email, "nobody@grandline.io");
        }
        _ => panic!("Expected UserNotFound error"),
    }

    let id = Uuid::new_v4();
    let error = DomainError::fruit_not_found(id);

    match error {
        DomainError::FruitNotFound { id: error_id } => {
            assert_eq!(error_id, id);
        }
        _ => panic!("Expected FruitNotFound error"),
    }

    let error = DomainError::email_already_exists("luffy@grandline.io");

    match error {
        DomainError::EmailAlreadyExists { email } => {
            assert_eq!(email, "luffy@grandline.io");
        }
        _ => panic!("Expected EmailAlreadyExists error"),
    }

    let error = DomainError::fruit_name_exists("Gomu Gomu no Mi");

    match error {
        DomainError::FruitNameExists { name } => {
            assert_eq!(name, "Gomu Gomu no Mi");
        }
        _ => panic!("Expected FruitNameExists error"),
    }

    let user_id = Uuid::new_v4();
    let fruit_id = Uuid::new_v4();
    let error = DomainError::not_owner(user_id, fruit_id);

    match error {
        DomainError::NotOwner {
            user_id: error_user,
            fruit_id: error_fruit,
        } => {
            assert_eq!(error_user, user_id);
            assert_eq!(error_fruit, fruit_id);
        }
        _ => panic!("Expected NotOwner error"),
    }

    let error = DomainError::invalid_email("not-an-email");

    match error {
        DomainError::InvalidEmail { email } => {
            assert_eq!(email, "not-an-email");
        }
        _ => panic!("Expected InvalidEmail error"),
    }

    let error = DomainError::database("DB error");

    match error {
        DomainError::Database { message } => {
            assert_eq!(message, "DB error");
        }
        _ => panic!("Expected Database error"),
    }
}

#[test]
fn test_domain_error_display() {
    let error = DomainError::email_already_exists("luffy@grandline.io");
    assert_eq!(error.to_string(), "User with this email already exists");

    let error = DomainError::fruit_name_exists("Gomu Gomu no Mi");
    assert_eq!(error.to_string(), "Devil Fruit already exists");

    let error = DomainError::not_owner(Uuid::new_v4(), Uuid::new_v4());
    assert_eq!(error.to_string(), "User not authorised to edit fruit");
}

#[test]
fn test_fruit_dto_wire_format() {
    use fruit_catalog::api::rest::dto::FruitDto;

    let dto = FruitDto {
        id: Uuid::new_v4(),
        name: "Moku Moku no Mi".to_string(),
        kind: "Logia".to_string(),
        character: "Smoker".to_string(),
        abilities: "Smoke".to_string(),
        owner_user_id: Uuid::new_v4(),
    };

    let value = serde_json::to_value(&dto).expect("Should serialize");

    // The legacy wire field is `type`, not `kind`
    assert_eq!(value["type"], "Logia");
    assert!(value.get("kind").is_none());
    assert_eq!(value["ownerUserId"], dto.owner_user_id.to_string());

    let roundtrip: FruitDto =
        serde_json::from_value(value).expect("Should deserialize");
    assert_eq!(roundtrip.id, dto.id);
    assert_eq!(roundtrip.kind, dto.kind);
}

#[test]
fn test_create_fruit_req_wire_format() {
    use fruit_catalog::api::rest::dto::CreateFruitReq;

    let json = r#"{
        "name": "Hana Hana no Mi",
        "type": "Paramecia",
        "character": "Nico Robin",
        "abilities": "Sprout limbs",
        "user": "robin@grandline.io"
    }"#;

    let req: CreateFruitReq = serde_json::from_str(json).expect("Should deserialize");
    assert_eq!(req.name, "Hana Hana no Mi");
    assert_eq!(req.kind, "Paramecia");
    assert_eq!(req.user, "robin@grandline.io");

    let new_fruit = NewFruit::from(req);
    assert_eq!(new_fruit.owner_email, "robin@grandline.io");
    assert_eq!(new_fruit.kind, "Paramecia");
}

#[test]
fn test_update_fruit_req_wire_format() {
    use fruit_catalog::api::rest::dto::UpdateFruitReq;

    let json = r#"{
        "name": "Hana Hana no Mi",
        "type": "Paramecia",
        "character": "Nico Robin",
        "abilities": "Sprout limbs anywhere",
        "user": "robin@grandline.io",
        "loggedInUser": "robin@grandline.io"
    }"#;

    let req: UpdateFruitReq = serde_json::from_str(json).expect("Should deserialize");
    assert_eq!(req.logged_in_user, "robin@grandline.io");

    let update = FruitUpdate::from(req);
    assert_eq!(update.abilities, "Sprout limbs anywhere");
    assert_eq!(update.owner_email, "robin@grandline.io");
}

#[test]
fn test_review_dto_wire_format() {
    use fruit_catalog::api::rest::dto::ReviewDto;

    let dto = ReviewDto {
        id: Uuid::new_v4(),
        fruit_id: Uuid::new_v4(),
        rating: 4,
        comment: None,
    };

    let value = serde_json::to_value(&dto).expect("Should serialize");
    assert_eq!(value["fruitId"], dto.fruit_id.to_string());
    // Absent comments are omitted entirely, matching the legacy responses
    assert!(value.get("comment").is_none());

    let with_comment = ReviewDto {
        comment: Some("Tastes terrible, swims never again".to_string()),
        ..dto
    };
    let value = serde_json::to_value(&with_comment).expect("Should serialize");
    assert_eq!(value["comment"], "Tastes terrible, swims never again");
}

#[test]
fn test_create_review_req_optional_fruit_id() {
    use fruit_catalog::api::rest::dto::CreateReviewReq;

    // fruitId omitted: the path parameter is used
    let json = r#"{"rating": 5, "comment": "Stretchy"}"#;
    let req: CreateReviewReq = serde_json::from_str(json).expect("Should deserialize");
    assert_eq!(req.fruit_id, None);
    assert_eq!(req.rating, 5);

    let path_id = Uuid::new_v4();
    let new_review = req.into_new_review(path_id);
    assert_eq!(new_review.fruit_id, path_id);
    assert_eq!(new_review.comment.as_deref(), Some("Stretchy"));

    // fruitId present
    let id = Uuid::new_v4();
    let json = format!(r#"{{"fruitId": "{}", "rating": 3}}"#, id);
    let req: CreateReviewReq = serde_json::from_str(&json).expect("Should deserialize");
    assert_eq!(req.fruit_id, Some(id));
    assert_eq!(req.comment, None);
}

#[test]
fn test_user_dto_wire_format() {
    use fruit_catalog::api::rest::dto::UserDto;

    let user = User {
        id: Uuid::new_v4(),
        email: "nami@grandline.io".to_string(),
        last_login: Utc::now(),
    };

    let dto = UserDto::from(user.clone());
    let value = serde_json::to_value(&dto).expect("Should serialize");

    assert_eq!(value["email"], "nami@grandline.io");
    assert!(value.get("lastLogin").is_some());
    assert!(value.get("last_login").is_none());
}

#[test]
fn test_fruit_catalog_config() {
    use fruit_catalog::FruitCatalogConfig;

    let config = FruitCatalogConfig::default();
    assert_eq!(config.session_cookie_name, "user_session");

    let json_config = r#"{"session_cookie_name": "fruit_sid"}"#;
    let config: FruitCatalogConfig =
        serde_json::from_str(json_config).expect("Should deserialize");
    assert_eq!(config.session_cookie_name, "fruit_sid");

    // Missing fields fall back to defaults
    let config: FruitCatalogConfig = serde_json::from_str("{}").expect("Should deserialize");
    assert_eq!(config.session_cookie_name, "user_session");
}
