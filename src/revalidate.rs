//! Cache invalidation hooks.
//!
//! After a successful write the actions ask the hosting framework to drop any
//! cached rendering of the affected routes. The call is fire-and-forget: it is
//! issued synchronously and nothing waits for the cache to actually refresh.

use std::sync::{Arc, Mutex};

use crate::constants::{FEED_PATH, SNIPPET_PATH_PREFIX};

/// Receives route paths whose cached output is stale.
pub trait Revalidator: Send + Sync {
    fn revalidate_path(&self, path: &str);
}

impl<T: Revalidator + ?Sized> Revalidator for Arc<T> {
    fn revalidate_path(&self, path: &str) {
        (**self).revalidate_path(path);
    }
}

/// Discards every signal. Used when nothing sits in front of the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRevalidator;

impl Revalidator for NoopRevalidator {
    fn revalidate_path(&self, _path: &str) {}
}

/// Keeps every invalidated path in issue order.
///
/// Clones share the same history, so a host can hand one clone to the actions
/// and drain the other to bust its own cache.
#[derive(Debug, Clone, Default)]
pub struct RecordingRevalidator {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingRevalidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All paths recorded so far, oldest first
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().map(|paths| paths.clone()).unwrap_or_default()
    }

    /// Remove and return all recorded paths
    pub fn take(&self) -> Vec<String> {
        self.paths
            .lock()
            .map(|mut paths| std::mem::take(&mut *paths))
            .unwrap_or_default()
    }
}

impl Revalidator for RecordingRevalidator {
    fn revalidate_path(&self, path: &str) {
        if let Ok(mut paths) = self.paths.lock() {
            paths.push(path.to_string());
        }
    }
}

/// Paths to invalidate after a snippet is created.
pub fn paths_after_create() -> Vec<String> {
    vec![FEED_PATH.to_string()]
}

/// Paths to invalidate after snippet `id` is edited: the feed, its detail
/// view and its edit view.
pub fn paths_after_edit(id: &str) -> Vec<String> {
    vec![
        FEED_PATH.to_string(),
        format!("{SNIPPET_PATH_PREFIX}/{id}"),
        format!("{SNIPPET_PATH_PREFIX}/{id}/edit"),
    ]
}
