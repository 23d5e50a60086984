//! Property-based tests for the bookmark wire codec.
//!
//! The two load-bearing guarantees: current-schema documents round-trip
//! losslessly, and legacy documents migrate with nothing lost and nothing
//! invented beyond the fresh ids/titles/timestamps.

use markd::codec::bookmark_codec;
use markd::types::bookmark::Bookmark;
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

/// Strategy for generating current-schema bookmarks with arbitrary ids,
/// titles, tag sets, and timestamps.
fn arb_bookmark() -> impl Strategy<Value = Bookmark> {
    (
        "[a-z0-9-]{8,36}",
        "[a-zA-Z][a-zA-Z0-9 .]{0,30}",
        arb_url(),
        proptest::collection::vec("[a-z]{2,10}", 0..4),
        0i64..4_000_000_000_000,
    )
        .prop_map(|(id, title, url, tags, created_at)| Bookmark {
            id,
            title,
            url,
            tags,
            created_at,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // *For any* current-schema collection, decode(encode(c)) == c,
    // field for field.
    #[test]
    fn current_schema_round_trips_exactly(
        collection in proptest::collection::vec(arb_bookmark(), 1..16),
    ) {
        let encoded = bookmark_codec::encode(&collection)
            .expect("encode should succeed for valid bookmarks");
        let decoded = bookmark_codec::decode(Some(&encoded));
        prop_assert_eq!(decoded, collection);
    }

    // *For any* legacy array of URL strings, migration preserves length and
    // urls in order, generates pairwise-distinct ids, and starts every
    // record with an empty tag set.
    #[test]
    fn legacy_migration_preserves_every_url(
        urls in proptest::collection::vec(arb_url(), 1..16),
    ) {
        let raw = serde_json::to_string(&urls).unwrap();
        let migrated = bookmark_codec::decode(Some(&raw));

        prop_assert_eq!(migrated.len(), urls.len());
        for (bookmark, url) in migrated.iter().zip(&urls) {
            prop_assert_eq!(&bookmark.url, url);
            prop_assert!(bookmark.tags.is_empty());
        }

        let mut ids: Vec<&str> = migrated.iter().map(|b| b.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), migrated.len(), "ids must be pairwise distinct");
    }

    // Decode must never panic, whatever bytes ended up under the key.
    #[test]
    fn decode_never_panics_on_arbitrary_input(raw in ".*") {
        let _ = bookmark_codec::decode(Some(&raw));
    }

    // Migrating twice is not lossy either: the migrated document re-encodes
    // as current-schema and decodes back to itself.
    #[test]
    fn migrated_documents_are_stable_under_reencoding(
        urls in proptest::collection::vec(arb_url(), 1..8),
    ) {
        let raw = serde_json::to_string(&urls).unwrap();
        let migrated = bookmark_codec::decode(Some(&raw));

        let reencoded = bookmark_codec::encode(&migrated).unwrap();
        prop_assert_eq!(bookmark_codec::decode(Some(&reencoded)), migrated);
    }
}
