//! Repository layer for database operations.
//!
//! Repositories are stateless structs whose methods take any SeaORM
//! connection (pool or transaction), keeping entities as plain data models
//! while giving the actions one place to build queries.

pub mod snippet;
pub mod user;

pub use snippet::{SnippetFilter, SnippetPage, SnippetRepository};
pub use user::UserRepository;
