use std::sync::Arc;

use snipshare::revalidate::{paths_after_create, paths_after_edit};
use snipshare::{RecordingRevalidator, Revalidator};

#[test]
fn test_create_invalidates_feed_only() {
    assert_eq!(paths_after_create(), vec!["/feed".to_string()]);
}

#[test]
fn test_edit_invalidates_feed_detail_and_edit_views() {
    assert_eq!(
        paths_after_edit("abc"),
        vec![
            "/feed".to_string(),
            "/snippet/abc".to_string(),
            "/snippet/abc/edit".to_string()
        ]
    );
}

#[test]
fn test_recording_revalidator_shares_history_between_clones() {
    let recorder = RecordingRevalidator::new();
    let handle: Arc<dyn Revalidator> = Arc::new(recorder.clone());

    handle.revalidate_path("/feed");
    handle.revalidate_path("/snippet/1");

    assert_eq!(recorder.paths(), vec!["/feed".to_string(), "/snippet/1".to_string()]);
    assert_eq!(recorder.take().len(), 2);
    assert!(recorder.paths().is_empty());
}
