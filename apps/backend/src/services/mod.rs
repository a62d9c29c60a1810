pub mod carts;
pub mod menu;
pub mod payments;
pub mod reviews;
pub mod users;
