//! Markd — bookmarking core with a share-extension sync protocol.
//!
//! Entry point: runs an interactive console demo of every component against a
//! throwaway container directory.

use std::fs;
use std::path::PathBuf;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Markd v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║        Shared-storage bookmarking core walkthrough         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let demo_dir = std::env::temp_dir().join(format!("markd-demo-{}", std::process::id()));

    demo_shared_store(&demo_dir);
    demo_codec();
    demo_share_sync(&demo_dir);
    demo_folders(&demo_dir);
    demo_subscription(&demo_dir);
    demo_notifications(&demo_dir);
    demo_purchases(&demo_dir);
    demo_app_core(&demo_dir);

    let _ = fs::remove_dir_all(&demo_dir);

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_shared_store(dir: &PathBuf) {
    use markd::storage::{SharedContainerStore, SharedStore};
    section("Shared Record Store");

    let container = dir.join("store-demo");

    // Two independent handles, as the two processes would hold.
    let producer_handle = SharedContainerStore::with_dir(container.clone());
    let consumer_handle = SharedContainerStore::with_dir(container);

    let before = consumer_handle.get("bookmarks");
    println!("  Read before container exists: {:?}", before.err().map(|e| e.to_string()));

    producer_handle.set("bookmarks", "[\"https://example.com\"]").unwrap();
    let after = consumer_handle.get("bookmarks").unwrap();
    println!("  Producer wrote, consumer read: {:?}", after);
    println!("  ✓ SharedContainerStore OK");
    println!();
}

fn demo_codec() {
    use markd::codec::bookmark_codec;
    section("Bookmark Codec");

    let legacy = r#"["https://www.rust-lang.org/learn","https://crates.io"]"#;
    let migrated = bookmark_codec::decode(Some(legacy));
    println!("  Migrated {} legacy entries:", migrated.len());
    for b in &migrated {
        println!("    {} <- {}", b.title, b.url);
    }

    let encoded = bookmark_codec::encode(&migrated).unwrap();
    let round_tripped = bookmark_codec::decode(Some(&encoded));
    assert_eq!(round_tripped, migrated);
    println!("  Current-schema round-trip: OK");

    assert!(bookmark_codec::decode(Some("not json")).is_empty());
    assert!(bookmark_codec::decode(None).is_empty());
    println!("  Malformed input degrades to empty: OK");
    println!("  ✓ BookmarkCodec OK");
    println!();
}

fn demo_share_sync(dir: &PathBuf) {
    use markd::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
    use markd::managers::share_writer::{ShareWriter, WireSchema};
    use markd::storage::SharedContainerStore;
    section("Producer / Consumer Sync");

    let container = dir.join("sync-demo");
    let extension_handle = SharedContainerStore::with_dir(container.clone());
    let app_handle = SharedContainerStore::with_dir(container);

    // The old extension build appends bare URL strings...
    let legacy_writer = ShareWriter::with_schema(&extension_handle, WireSchema::Legacy);
    legacy_writer.handle_shared_url("https://www.example.com/article");
    println!("  Legacy writer appended a bare URL");

    // ...the current build appends structured records.
    let writer = ShareWriter::with_schema(&extension_handle, WireSchema::Current);
    writer.handle_shared_url("https://docs.rs/serde");
    println!("  Current writer appended a structured record");

    // The app decodes both, migrating the legacy entry on the fly.
    let mut bookmarks = BookmarkStore::new(&app_handle);
    let view = bookmarks.load();
    println!("  Consumer view (newest first):");
    for b in &view {
        println!("    {} ({})", b.url, b.title);
    }

    let added = bookmarks.add("https://blog.rust-lang.org/", None, &[]).unwrap();
    println!("  Added from the app: {}", added.url);

    bookmarks.delete(&added.id).unwrap();
    println!("  Deleted by id, {} remaining", bookmarks.list().len());

    bookmarks.toggle_tag(&view[0].id, "reading").unwrap();
    println!("  Tagged '{}' with 'reading' -> {} tagged", view[0].title, bookmarks.count_by_tag("reading"));
    println!("  ✓ ShareWriter + BookmarkStore OK");
    println!();
}

fn demo_folders(dir: &PathBuf) {
    use markd::managers::folder_store::{FolderStore, FolderStoreTrait, COLOR_PALETTE};
    use markd::storage::SharedContainerStore;
    section("Folder Store");

    let store = SharedContainerStore::with_dir(dir.join("sync-demo"));
    let mut folders = FolderStore::new(&store);

    let seeded = folders.load();
    println!("  Seeded defaults: {:?}", seeded.iter().map(|f| f.name.as_str()).collect::<Vec<_>>());

    let rust = folders.create("  Rust  ", COLOR_PALETTE[9]).unwrap();
    println!("  Created '{}' ({})", rust.name, rust.color);

    let renamed = folders.rename(&rust.id, "Rust Reading", "#45B7D1").unwrap();
    println!("  Renamed to '{}'", renamed.name);

    folders.delete(&rust.id).unwrap();
    println!("  Deleted, {} folders remain (bookmark tags untouched)", folders.list().len());
    println!("  ✓ FolderStore OK");
    println!();
}

fn demo_subscription(dir: &PathBuf) {
    use markd::services::subscription_service::{SubscriptionService, SubscriptionServiceTrait};
    section("Subscription / Trial Gate");

    let state_path = dir.join("subscription.json").to_string_lossy().to_string();
    let mut subscription = SubscriptionService::new(Some(state_path));
    subscription.load().unwrap();

    println!("  Onboarding completed: {}", subscription.is_onboarding_completed());
    subscription.mark_onboarding_completed().unwrap();
    subscription.start_trial().unwrap();
    println!("  Trial started: {} day(s) remaining", subscription.trial_remaining_days());
    println!("  Trial active: {}", subscription.is_trial_active());

    subscription.activate_subscription().unwrap();
    println!("  Subscribed: {}", subscription.is_subscribed());

    subscription.reset().unwrap();
    println!("  Reset: subscribed = {}", subscription.is_subscribed());
    println!("  ✓ SubscriptionService OK");
    println!();
}

fn demo_notifications(dir: &PathBuf) {
    use markd::config::DEFAULT_REMINDER_HOUR;
    use markd::services::notification_scheduler::{NotificationBackend, NotificationScheduler};
    use markd::storage::SharedContainerStore;
    use markd::types::errors::NotificationError;
    use markd::types::notification::DailyNotification;
    section("Notification Scheduler");

    struct ConsoleBackend {
        granted: bool,
    }

    impl NotificationBackend for ConsoleBackend {
        fn request_permission(&mut self) -> bool {
            self.granted
        }
        fn schedule_daily(&mut self, n: DailyNotification) -> Result<(), NotificationError> {
            println!("    [backend] daily trigger at {} for {}", n.first_trigger_at, n.body);
            Ok(())
        }
        fn cancel_all(&mut self) {
            println!("    [backend] cancelled all notifications");
        }
    }

    let store = SharedContainerStore::with_dir(dir.join("sync-demo"));

    let mut scheduler = NotificationScheduler::new(&store, ConsoleBackend { granted: true });
    let scheduled = scheduler.schedule_daily_random_bookmark(DEFAULT_REMINDER_HOUR).unwrap();
    println!("  Scheduled: {:?}", scheduled.map(|n| n.body));
    scheduler.cancel_all();

    let mut denied = NotificationScheduler::new(&store, ConsoleBackend { granted: false });
    let skipped = denied.schedule_daily_random_bookmark(DEFAULT_REMINDER_HOUR).unwrap();
    println!("  With permission denied: {:?} (no-op)", skipped);
    println!("  ✓ NotificationScheduler OK");
    println!();
}

fn demo_purchases(dir: &PathBuf) {
    use markd::config::{SUBSCRIPTION_PRICE, SUBSCRIPTION_PRODUCT_ID};
    use markd::services::purchase_service::{PurchaseBackend, PurchaseService};
    use markd::services::subscription_service::{SubscriptionService, SubscriptionServiceTrait};
    use markd::types::errors::PurchaseError;
    use markd::types::purchase::{Product, Purchase};
    section("Purchase Service");

    struct FakeStore;

    impl PurchaseBackend for FakeStore {
        fn fetch_products(&mut self, ids: &[&str]) -> Result<Vec<Product>, PurchaseError> {
            Ok(ids
                .iter()
                .map(|id| Product {
                    id: id.to_string(),
                    price: SUBSCRIPTION_PRICE.to_string(),
                    duration: "year".to_string(),
                })
                .collect())
        }
        fn request_purchase(&mut self, id: &str) -> Result<Purchase, PurchaseError> {
            Ok(Purchase {
                product_id: id.to_string(),
                transaction_id: "txn-0001".to_string(),
                purchased_at: 0,
            })
        }
        fn restore_purchases(&mut self) -> Result<Vec<Purchase>, PurchaseError> {
            Ok(Vec::new())
        }
    }

    let state_path = dir.join("subscription.json").to_string_lossy().to_string();
    let mut subscription = SubscriptionService::new(Some(state_path));
    subscription.load().unwrap();

    let mut purchases = PurchaseService::new(FakeStore);
    purchases.open().unwrap();
    println!("  Products: {:?}", purchases.available_products().iter().map(|p| p.id.as_str()).collect::<Vec<_>>());

    let purchase = purchases
        .purchase_subscription(SUBSCRIPTION_PRODUCT_ID, &mut subscription)
        .unwrap();
    println!("  Purchased {} -> subscribed = {}", purchase.product_id, subscription.is_subscribed());

    purchases.close();
    println!("  Closed: is_open = {}", purchases.is_open());
    println!("  ✓ PurchaseService OK");
    println!();
}

fn demo_app_core(dir: &PathBuf) {
    use markd::app::App;
    use markd::managers::bookmark_store::BookmarkStoreTrait;
    use markd::managers::folder_store::FolderStoreTrait;
    use markd::services::subscription_service::SubscriptionServiceTrait;
    section("App Core (wiring)");

    let mut app = App::with_paths(
        dir.join("sync-demo"),
        dir.join("subscription.json").to_string_lossy().to_string(),
    );
    app.startup();
    println!("  Startup: subscription state hydrated (subscribed = {})", app.subscription.is_subscribed());

    let mut bookmarks = app.bookmarks();
    println!("  Bookmarks on hand: {}", bookmarks.load().len());

    let mut folders = app.folders();
    println!("  Folders on hand: {}", folders.load().len());

    let shared = app.share_writer().handle_shared_url("https://this.week.in/rust");
    println!("  Share action landed: {}", shared);
    println!("  Reload sees it: {} bookmarks", bookmarks.load().len());
    println!("  ✓ App Core OK");
}
