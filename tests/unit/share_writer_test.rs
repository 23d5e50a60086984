//! Unit tests for the extension-side share writer: append-only behavior in
//! both wire schemas, and the never-drop-existing-entries guarantee.

use markd::codec::bookmark_codec;
use markd::managers::share_writer::{ShareWriter, WireSchema};
use markd::storage::{SharedContainerStore, SharedStore};

fn setup() -> (tempfile::TempDir, SharedContainerStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = SharedContainerStore::with_dir(dir.path().join("container"));
    (dir, store)
}

#[test]
fn test_current_writer_appends_structured_record_to_empty_store() {
    let (_dir, store) = setup();
    let writer = ShareWriter::with_schema(&store, WireSchema::Current);

    assert!(writer.handle_shared_url("https://www.example.com/page"));

    let raw = store.get("bookmarks").unwrap().unwrap();
    let decoded = bookmark_codec::decode(Some(&raw));
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].url, "https://www.example.com/page");
    assert_eq!(decoded[0].title, "example.com");
    assert!(decoded[0].tags.is_empty());
}

#[test]
fn test_current_writer_preserves_existing_records() {
    let (_dir, store) = setup();
    let writer = ShareWriter::with_schema(&store, WireSchema::Current);

    writer.handle_shared_url("https://first.com");
    writer.handle_shared_url("https://second.com");

    let raw = store.get("bookmarks").unwrap().unwrap();
    let decoded = bookmark_codec::decode(Some(&raw));
    let urls: Vec<&str> = decoded.iter().map(|b| b.url.as_str()).collect();
    // Append order: new entries at the end.
    assert_eq!(urls, ["https://first.com", "https://second.com"]);
}

#[test]
fn test_current_writer_migrates_legacy_entries_it_finds() {
    let (_dir, store) = setup();
    store.set("bookmarks", r#"["https://old.com"]"#).unwrap();

    let writer = ShareWriter::with_schema(&store, WireSchema::Current);
    writer.handle_shared_url("https://new.com");

    let raw = store.get("bookmarks").unwrap().unwrap();
    // Everything is current-schema now.
    let stored: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert!(stored.iter().all(|v| v.is_object()));

    let decoded = bookmark_codec::decode(Some(&raw));
    let urls: Vec<&str> = decoded.iter().map(|b| b.url.as_str()).collect();
    assert_eq!(urls, ["https://old.com", "https://new.com"]);
}

#[test]
fn test_legacy_writer_appends_bare_string() {
    let (_dir, store) = setup();
    let writer = ShareWriter::with_schema(&store, WireSchema::Legacy);

    writer.handle_shared_url("https://a.com");
    writer.handle_shared_url("https://b.com");

    let raw = store.get("bookmarks").unwrap().unwrap();
    let stored: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, ["https://a.com", "https://b.com"]);
}

#[test]
fn test_legacy_writer_never_drops_structured_records() {
    let (_dir, store) = setup();
    store
        .set(
            "bookmarks",
            r#"[{"id":"x","title":"kept.com","url":"https://kept.com","tags":["work"],"createdAt":5}]"#,
        )
        .unwrap();

    let writer = ShareWriter::with_schema(&store, WireSchema::Legacy);
    writer.handle_shared_url("https://appended.com");

    let raw = store.get("bookmarks").unwrap().unwrap();
    let stored: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), 2);

    // The record it could not have decoded is preserved verbatim.
    assert_eq!(stored[0]["id"], "x");
    assert_eq!(stored[0]["tags"][0], "work");
    assert_eq!(stored[1], serde_json::Value::String("https://appended.com".to_string()));
}

#[test]
fn test_writer_treats_unreachable_container_as_empty() {
    let (_dir, store) = setup();
    // Container never created: the read fails with the transient code, and
    // the writer must still complete and save.
    let writer = ShareWriter::with_schema(&store, WireSchema::Current);
    assert!(writer.handle_shared_url("https://example.com"));

    let raw = store.get("bookmarks").unwrap().unwrap();
    assert_eq!(bookmark_codec::decode(Some(&raw)).len(), 1);
}

#[test]
fn test_writer_replaces_corrupt_value_instead_of_failing() {
    let (_dir, store) = setup();
    store.set("bookmarks", "{ not an array").unwrap();

    let writer = ShareWriter::with_schema(&store, WireSchema::Current);
    assert!(writer.handle_shared_url("https://example.com"));

    let raw = store.get("bookmarks").unwrap().unwrap();
    let decoded = bookmark_codec::decode(Some(&raw));
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].url, "https://example.com");
}

#[test]
fn test_writer_does_not_dedup_urls() {
    let (_dir, store) = setup();
    let writer = ShareWriter::with_schema(&store, WireSchema::Current);

    writer.handle_shared_url("https://same.com");
    writer.handle_shared_url("https://same.com");

    let raw = store.get("bookmarks").unwrap().unwrap();
    assert_eq!(bookmark_codec::decode(Some(&raw)).len(), 2);
}

#[test]
fn test_default_schema_matches_build_configuration() {
    let (_dir, store) = setup();
    let writer = ShareWriter::new(&store);

    #[cfg(feature = "legacy-wire")]
    assert_eq!(writer.schema(), WireSchema::Legacy);
    #[cfg(not(feature = "legacy-wire"))]
    assert_eq!(writer.schema(), WireSchema::Current);
}
