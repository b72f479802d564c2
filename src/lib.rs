//! snipshare - data-access actions for a code snippet sharing feed
//!
//! This library backs the server-rendered snippet pages: creating and editing
//! snippets, paging and searching the public feed, and fetching a single
//! snippet. Writes signal the hosting framework to drop cached renderings of
//! the affected routes.
//!
//! # Modules
//!
//! * [`actions`] - The snippet actions called by UI handlers
//! * [`config`] - Application configuration management
//! * [`entities`] - SeaORM entity models
//! * [`repositories`] - Query construction over the entities
//! * [`revalidate`] - Cache invalidation hooks
//! * [`storage`] - Database connection and schema setup

/// Snippet actions with their read/write error policies
pub mod actions;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Error type surfaced by write actions
pub mod error;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Request and response types for the actions
pub mod models;

/// Repository layer for database operations
pub mod repositories;

/// Route invalidation signals issued after writes
pub mod revalidate;

/// Database connection and schema management
pub mod storage;

pub use actions::SnippetActions;
pub use entities::{snippet, user};
pub use error::ActionError;
pub use models::{AuthorSummary, ListSnippetsParams, SnippetItem, SnippetListResult, SnippetWriteData};
pub use revalidate::{NoopRevalidator, RecordingRevalidator, Revalidator};
