pub mod snippet;
pub mod user;

pub use snippet::Entity as Snippet;
pub use user::Entity as User;
