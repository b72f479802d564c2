//! Snippet actions invoked by the server-rendered UI handlers.
//!
//! Two error policies apply. Writes fail loudly: the store error is logged and
//! returned as an [`ActionError`] carrying only its text. Reads fail quietly:
//! the error is logged under [`READ_FAILURE_TARGET`] and an empty value is
//! returned, which callers cannot tell apart from "no data".

use anyhow::Result;
use log::{debug, error, info};
use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::constants::{DEFAULT_PAGE_SIZE, READ_FAILURE_TARGET, WRITE_FAILURE_TARGET};
use crate::error::ActionError;
use crate::models::{total_pages, ListSnippetsParams, SnippetItem, SnippetListResult, SnippetWriteData};
use crate::repositories::{SnippetFilter, SnippetRepository};
use crate::revalidate::{paths_after_create, paths_after_edit, NoopRevalidator, Revalidator};

/// Stateless facade over the snippets table.
///
/// Holds only a handle to the shared connection pool and the invalidation
/// hook, so one instance can serve any number of concurrent requests.
pub struct SnippetActions<R = NoopRevalidator> {
    conn: DatabaseConnection,
    revalidator: R,
    default_limit: u64,
}

impl<R: Revalidator> SnippetActions<R> {
    pub fn new(conn: DatabaseConnection, revalidator: R) -> Self {
        Self {
            conn,
            revalidator,
            default_limit: DEFAULT_PAGE_SIZE,
        }
    }

    /// Like [`SnippetActions::new`], taking the feed page size from `config`.
    pub fn with_config(conn: DatabaseConnection, revalidator: R, config: &Config) -> Self {
        Self {
            conn,
            revalidator,
            default_limit: config.feed.page_size,
        }
    }

    pub fn revalidator(&self) -> &R {
        &self.revalidator
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Insert a snippet, then invalidate the feed.
    ///
    /// # Errors
    /// Returns [`ActionError::Persistence`] when the insert fails, including
    /// when a required column is missing from `input`.
    pub async fn create_snippet(&self, input: SnippetWriteData) -> Result<(), ActionError> {
        match SnippetRepository::create(&self.conn, input.into_insert_model()).await {
            Ok(snippet) => {
                info!("Created snippet {}", snippet.id);
                self.revalidate(paths_after_create());
                Ok(())
            }
            Err(e) => {
                error!(target: WRITE_FAILURE_TARGET, "createSnippet failed: {:#}", e);
                Err(ActionError::persistence(e))
            }
        }
    }

    /// Update snippet `id` with the columns set in `input`, then invalidate
    /// the feed and the snippet's detail and edit views.
    ///
    /// # Errors
    /// Returns [`ActionError::Persistence`] when no snippet has this id or the
    /// update fails.
    pub async fn edit_snippet(&self, id: &str, input: SnippetWriteData) -> Result<(), ActionError> {
        match SnippetRepository::update(&self.conn, input.into_update_model(id.to_string())).await {
            Ok(snippet) => {
                info!("Updated snippet {}", snippet.id);
                self.revalidate(paths_after_edit(id));
                Ok(())
            }
            Err(e) => {
                error!(target: WRITE_FAILURE_TARGET, "editSnippet failed for {}: {:#}", id, e);
                Err(ActionError::persistence(e))
            }
        }
    }

    /// One page of public snippets matching the search, newest first.
    ///
    /// Never fails: any error is logged and yields an empty result with zero pages.
    pub async fn list_snippets(&self, params: ListSnippetsParams) -> SnippetListResult {
        match self.try_list_snippets(&params).await {
            Ok(result) => result,
            Err(e) => {
                error!(
                    target: READ_FAILURE_TARGET,
                    "listSnippets failed (page {}, search {:?}, language {:?}): {:#}",
                    params.page,
                    params.search_text,
                    params.language,
                    e
                );
                SnippetListResult::empty()
            }
        }
    }

    async fn try_list_snippets(&self, params: &ListSnippetsParams) -> Result<SnippetListResult> {
        let limit = params.limit.unwrap_or(self.default_limit);
        if params.page == 0 {
            anyhow::bail!("page is 1-indexed, got 0");
        }
        if limit == 0 {
            anyhow::bail!("limit must be greater than zero");
        }

        let skip = (params.page - 1)
            .checked_mul(limit)
            .ok_or_else(|| anyhow::anyhow!("page {} with limit {} is out of range", params.page, limit))?;

        let filter = SnippetFilter::new(&params.search_text, params.language.as_deref());
        let page = SnippetRepository::search(&self.conn, &filter, skip, limit).await?;

        debug!(
            "Listed {} of {} snippets (page {}, limit {})",
            page.rows.len(),
            page.total,
            params.page,
            limit
        );

        Ok(SnippetListResult {
            data: page.rows,
            total_pages: total_pages(page.total, limit),
        })
    }

    /// Fetch one snippet with its author's name, public or not.
    ///
    /// Returns `None` both when the id is unknown and when the lookup fails;
    /// failures are logged.
    pub async fn get_snippet_by_id(&self, id: &str) -> Option<SnippetItem> {
        match SnippetRepository::get_with_author(&self.conn, id).await {
            Ok(snippet) => snippet,
            Err(e) => {
                error!(target: READ_FAILURE_TARGET, "getSnippetById failed for {}: {:#}", id, e);
                None
            }
        }
    }

    fn revalidate(&self, paths: Vec<String>) {
        for path in paths {
            debug!("Revalidating {}", path);
            self.revalidator.revalidate_path(&path);
        }
    }
}
