//! Request and response shapes exchanged with the UI handlers.
//!
//! Entities in [`crate::entities`] mirror the tables; the types here are what
//! the actions accept and return. Everything serializes camelCase so handlers
//! can hand results straight to the renderer.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, Value};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{snippet, user};

/// Writable snippet columns.
///
/// `None` leaves a column untouched: on insert the store applies its own rules
/// (and rejects missing required columns), on update the column keeps its value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnippetWriteData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub code: Option<String>,
    pub is_public: Option<bool>,
    pub author_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

fn set_or_skip<V: Into<Value>>(value: Option<V>) -> ActiveValue<V> {
    match value {
        Some(v) => ActiveValue::Set(v),
        None => ActiveValue::NotSet,
    }
}

impl SnippetWriteData {
    /// Build the row for a fresh insert: a new UUID, and `created_at` stamped
    /// with the current time unless the caller supplied one.
    pub fn into_insert_model(self) -> snippet::ActiveModel {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        let mut model = self.into_update_model(Uuid::new_v4().to_string());
        if let ActiveValue::Unchanged(id) = model.id {
            model.id = ActiveValue::Set(id);
        }
        model.created_at = ActiveValue::Set(created_at);
        model
    }

    /// Build a partial update targeting the row with `id`.
    pub fn into_update_model(self, id: String) -> snippet::ActiveModel {
        snippet::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: set_or_skip(self.title),
            description: set_or_skip(self.description),
            language: set_or_skip(self.language),
            code: set_or_skip(self.code),
            is_public: set_or_skip(self.is_public),
            created_at: set_or_skip(self.created_at),
            author_id: set_or_skip(self.author_id),
            // Filled from title and description on save
            title_folded: ActiveValue::NotSet,
            description_folded: ActiveValue::NotSet,
        }
    }
}

/// The only author field exposed alongside a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub name: String,
}

/// A snippet row with its author's display name attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub language: String,
    pub code: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub author_id: String,
    pub author: AuthorSummary,
}

impl SnippetItem {
    pub fn from_parts(snippet: snippet::Model, author: user::Model) -> Self {
        Self {
            id: snippet.id,
            title: snippet.title,
            description: snippet.description,
            language: snippet.language,
            code: snippet.code,
            is_public: snippet.is_public,
            created_at: snippet.created_at,
            author_id: snippet.author_id,
            author: AuthorSummary { name: author.name },
        }
    }
}

/// Arguments for the public feed listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSnippetsParams {
    /// 1-indexed page number
    pub page: u64,
    /// Case-insensitive substring matched against title or description
    pub search_text: String,
    /// Exact language tag; `None` or empty means any language
    pub language: Option<String>,
    /// Page size; falls back to the configured feed page size
    pub limit: Option<u64>,
}

impl ListSnippetsParams {
    pub fn new(page: u64, search_text: impl Into<String>) -> Self {
        Self {
            page,
            search_text: search_text.into(),
            ..Self::default()
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// One page of the public feed plus the number of pages available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetListResult {
    pub data: Vec<SnippetItem>,
    pub total_pages: u64,
}

impl SnippetListResult {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// `ceil(count / limit)`; a zero limit yields zero pages.
pub fn total_pages(count: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    count.div_ceil(limit)
}
