pub mod admin_user;
pub mod current_user;
