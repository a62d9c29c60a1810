//! Entity fixtures for mock-backed route tests.

use backend::entities::users::UserRole;
use backend::entities::{cart_items, menu_items, reviews, users};
use time::OffsetDateTime;

pub fn user(id: i64, email: &str, role: UserRole) -> users::Model {
    let now = OffsetDateTime::now_utc();
    users::Model {
        id,
        email: email.to_string(),
        name: None,
        role,
        created_at: now,
        updated_at: now,
    }
}

pub fn menu_item(id: i64, name: &str, category: &str, price: f64) -> menu_items::Model {
    menu_items::Model {
        id,
        name: name.to_string(),
        recipe: format!("{name} recipe"),
        image: format!("https://img.bistro.test/{id}.jpg"),
        category: category.to_string(),
        price,
        created_at: OffsetDateTime::now_utc(),
    }
}

pub fn cart_item(id: i64, menu_item_id: i64, email: &str, price: f64) -> cart_items::Model {
    cart_items::Model {
        id,
        menu_item_id,
        email: email.to_string(),
        name: format!("dish-{menu_item_id}"),
        image: format!("https://img.bistro.test/{menu_item_id}.jpg"),
        price,
        created_at: OffsetDateTime::now_utc(),
    }
}

pub fn review(id: i64, name: &str, rating: f64) -> reviews::Model {
    reviews::Model {
        id,
        name: name.to_string(),
        details: format!("{name} says it was great"),
        rating,
        created_at: OffsetDateTime::now_utc(),
    }
}
