pub mod cart_items;
pub mod menu_items;
pub mod payments;
pub mod reviews;
pub mod users;

pub use cart_items::Entity as CartItems;
pub use cart_items::Model as CartItem;
pub use menu_items::Entity as MenuItems;
pub use menu_items::Model as MenuItem;
pub use payments::Entity as Payments;
pub use payments::Model as Payment;
pub use reviews::Entity as Reviews;
pub use reviews::Model as Review;
pub use users::Entity as Users;
pub use users::Model as User;
pub use users::UserRole;
