//! Property-based tests for bookmark store operations.
//!
//! These tests verify that adding bookmarks through the app-side store keeps
//! the persisted collection consistent with the sequence of operations, for
//! arbitrary valid URLs and titles.

use markd::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use markd::storage::SharedContainerStore;
use proptest::prelude::*;

/// Strategy for generating valid URL strings.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

/// Strategy for generating non-empty display titles.
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{1,30}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // *For any* valid URL and title, adding a bookmark makes it the newest
    // entry of the view, and a fresh instance reading the same container
    // sees the identical record.
    #[test]
    fn add_then_reload_returns_the_bookmark(
        url in arb_url(),
        title in arb_title(),
    ) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = SharedContainerStore::with_dir(dir.path().join("container"));
        let mut bookmarks = BookmarkStore::new(&store);

        let added = bookmarks
            .add(&url, Some(&title), &[])
            .expect("add should succeed for valid inputs");

        let view = bookmarks.list();
        prop_assert_eq!(&view[0].id, &added.id);
        prop_assert_eq!(&view[0].url, &url);
        prop_assert_eq!(&view[0].title, &title);

        let mut second = BookmarkStore::new(&store);
        let reloaded = second.load();
        prop_assert_eq!(reloaded.len(), 1);
        prop_assert_eq!(&reloaded[0], &added);
    }

    // *For any* batch of adds, the view length matches, display order is the
    // reverse of insertion order, and deleting one id removes exactly that
    // record.
    #[test]
    fn add_batch_then_delete_one(
        urls in proptest::collection::vec(arb_url(), 2..8),
        delete_index in 0usize..8,
    ) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = SharedContainerStore::with_dir(dir.path().join("container"));
        let mut bookmarks = BookmarkStore::new(&store);

        let mut added_ids = Vec::new();
        for url in &urls {
            let added = bookmarks.add(url, None, &[]).expect("add should succeed");
            added_ids.push(added.id);
        }

        let view = bookmarks.list();
        prop_assert_eq!(view.len(), urls.len());
        // Newest first: the last add leads the view.
        prop_assert_eq!(&view[0].id, added_ids.last().unwrap());

        let victim = &added_ids[delete_index % added_ids.len()];
        bookmarks.delete(victim).expect("delete should succeed");

        let after = bookmarks.list();
        prop_assert_eq!(after.len(), urls.len() - 1);
        prop_assert!(after.iter().all(|b| &b.id != victim));

        // Everything else survived.
        for id in added_ids.iter().filter(|id| id != &victim) {
            prop_assert!(after.iter().any(|b| &b.id == id));
        }
    }
}
