//! Edge case and boundary condition tests
//!
//! These tests verify the store handles unusual inputs, missing entities,
//! and storage failures without corrupting state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use takeitfree_core::{
    AppError, AppResult, AppStore, ItemDraft, KeyValueStore, MemoryStore, MomentDraft, MomentRole,
    ProfileDraft, ReportDraft, ReportReason, StorageKeys, MAX_CAPTION_LEN, MAX_DETAILS_LEN,
};

fn profile(username: &str, display_name: &str) -> ProfileDraft {
    ProfileDraft {
        username: username.to_string(),
        display_name: display_name.to_string(),
        ..Default::default()
    }
}

fn signed_in() -> AppStore<MemoryStore> {
    let mut store = AppStore::open(MemoryStore::new()).unwrap();
    store.setup_profile(profile("maya_gives", "Maya Chen")).unwrap();
    store
}

// ============================================================================
// Unauthenticated Operations
// ============================================================================

/// Every mutation that needs an acting user fails the same way without one.
#[test]
fn test_mutations_require_profile() {
    let mut store = AppStore::open(MemoryStore::new()).unwrap();

    assert!(matches!(
        store.appreciate_item("item_1").unwrap_err(),
        AppError::Unauthenticated
    ));
    assert!(matches!(
        store.add_comment("item_1", "hi").unwrap_err(),
        AppError::Unauthenticated
    ));
    assert!(matches!(
        store.request_item("item_1", "please").unwrap_err(),
        AppError::Unauthenticated
    ));
    assert!(matches!(
        store.appreciate_moment("moment_1").unwrap_err(),
        AppError::Unauthenticated
    ));
    assert!(matches!(
        store
            .add_report(ReportDraft {
                reported_user_id: "seed_1".to_string(),
                reported_username: "maya_gives".to_string(),
                reason: ReportReason::Spam,
                details: String::new(),
            })
            .unwrap_err(),
        AppError::Unauthenticated
    ));
}

// ============================================================================
// Unknown Entities
// ============================================================================

#[test]
fn test_unknown_ids_are_typed_errors() {
    let mut store = signed_in();

    assert!(matches!(
        store.add_comment("ghost", "hello").unwrap_err(),
        AppError::ItemNotFound(_)
    ));
    assert!(matches!(
        store.request_item("ghost", "please").unwrap_err(),
        AppError::ItemNotFound(_)
    ));
    assert!(matches!(
        store.approve_request("ghost", "r1").unwrap_err(),
        AppError::ItemNotFound(_)
    ));
    assert!(matches!(
        store.approve_request("item_1", "ghost").unwrap_err(),
        AppError::RequestNotFound(_)
    ));
    assert!(matches!(
        store.decline_request("item_1", "ghost").unwrap_err(),
        AppError::RequestNotFound(_)
    ));
    assert!(matches!(
        store.complete_exchange("ghost").unwrap_err(),
        AppError::ItemNotFound(_)
    ));
    assert!(matches!(
        store.appreciate_moment("ghost").unwrap_err(),
        AppError::MomentNotFound(_)
    ));
    assert!(store.item("ghost").is_none());
}

/// A failed lookup must not have touched anything.
#[test]
fn test_failed_operation_leaves_state_unchanged() {
    let mut store = signed_in();
    let before: Vec<_> = store.items().to_vec();

    let _ = store.add_comment("ghost", "hello");
    let _ = store.approve_request("item_1", "ghost");

    assert_eq!(store.items(), before.as_slice());
}

// ============================================================================
// Boundary Values
// ============================================================================

#[test]
fn test_caption_length_boundary() {
    let mut store = signed_in();

    let at_limit = "x".repeat(MAX_CAPTION_LEN);
    store
        .add_moment(MomentDraft {
            item_id: "item_1".to_string(),
            item_title: "Vintage Fiction Collection".to_string(),
            caption: at_limit,
            image_uri: None,
            role: MomentRole::Giver,
        })
        .unwrap();

    let over_limit = "x".repeat(MAX_CAPTION_LEN + 1);
    let err = store
        .add_moment(MomentDraft {
            item_id: "item_1".to_string(),
            item_title: "Vintage Fiction Collection".to_string(),
            caption: over_limit,
            image_uri: None,
            role: MomentRole::Giver,
        })
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "caption", .. }));
}

#[test]
fn test_details_length_boundary() {
    let mut store = signed_in();

    store
        .add_report(ReportDraft {
            reported_user_id: "seed_2".to_string(),
            reported_username: "alex_shares".to_string(),
            reason: ReportReason::Harassment,
            details: "x".repeat(MAX_DETAILS_LEN),
        })
        .unwrap();

    let err = store
        .add_report(ReportDraft {
            reported_user_id: "seed_2".to_string(),
            reported_username: "alex_shares".to_string(),
            reason: ReportReason::Harassment,
            details: "x".repeat(MAX_DETAILS_LEN + 1),
        })
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "details", .. }));
}

#[test]
fn test_username_length_boundary() {
    let mut store = AppStore::open(MemoryStore::new()).unwrap();

    assert!(store.setup_profile(profile("ab", "Ann Lee")).is_err());
    let user = store.setup_profile(profile("abc", "Ann Lee")).unwrap();
    assert_eq!(user.username, "abc");
}

#[test]
fn test_unicode_comment_survives() {
    let mut store = signed_in();
    let text = "Merci beaucoup! \u{1F600}\u{1F381}";

    let comment = store.add_comment("item_1", text).unwrap();
    assert_eq!(comment.text, text);
    assert_eq!(store.item("item_1").unwrap().comments.last().unwrap().text, text);
}

// ============================================================================
// Snapshot Handling
// ============================================================================

/// An explicitly empty catalog is respected, not reseeded.
#[test]
fn test_empty_snapshot_is_not_reseeded() {
    let storage = MemoryStore::new();
    let keys = StorageKeys::default();
    storage.set(&keys.items, "[]").unwrap();
    storage.set(&keys.moments, "[]").unwrap();

    let store = AppStore::open(storage).unwrap();
    assert!(store.items().is_empty());
    assert!(store.moments().is_empty());
}

/// A corrupt snapshot fails construction instead of silently reseeding.
#[test]
fn test_corrupt_snapshot_fails_load() {
    let storage = MemoryStore::new();
    storage.set(&StorageKeys::default().items, "not json").unwrap();

    let err = AppStore::open(storage).unwrap_err();
    assert!(matches!(err, AppError::Serialization(_)));
}

// ============================================================================
// Storage Failures
// ============================================================================

/// Key-value store whose writes can be switched off mid-test.
#[derive(Clone, Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_writes: Arc<AtomicBool>,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Storage("disk full".to_string()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Storage("disk full".to_string()));
        }
        self.inner.remove(key)
    }
}

/// A mutation whose persistence write fails must report the error and
/// leave both memory and durable state exactly as they were.
#[test]
fn test_failed_write_does_not_commit() {
    let storage = FlakyStore::default();
    let probe = storage.clone();
    let keys = StorageKeys::default();

    let mut store = AppStore::open(storage).unwrap();
    store.setup_profile(profile("maya_gives", "Maya Chen")).unwrap();

    let durable_before = probe.get(&keys.items).unwrap().unwrap();
    let memory_before: Vec<_> = store.items().to_vec();

    probe.fail_writes.store(true, Ordering::SeqCst);
    let err = store.appreciate_item("item_1").unwrap_err();
    assert!(matches!(err, AppError::Storage(_)));

    // In-memory catalog did not change...
    assert_eq!(store.items(), memory_before.as_slice());
    // ...and neither did the durable snapshot.
    probe.fail_writes.store(false, Ordering::SeqCst);
    assert_eq!(probe.get(&keys.items).unwrap().unwrap(), durable_before);
}

/// After the medium recovers, the same mutation goes through cleanly.
#[test]
fn test_store_recovers_after_write_failure() {
    let storage = FlakyStore::default();
    let probe = storage.clone();

    let mut store = AppStore::open(storage).unwrap();
    store.setup_profile(profile("maya_gives", "Maya Chen")).unwrap();

    probe.fail_writes.store(true, Ordering::SeqCst);
    assert!(store.request_item("item_1", "please").is_err());

    probe.fail_writes.store(false, Ordering::SeqCst);
    store.request_item("item_1", "please").unwrap();
    assert_eq!(store.item("item_1").unwrap().requests.len(), 1);
}

// ============================================================================
// Catalog Growth
// ============================================================================

/// The catalog handles a burst of listings without losing order.
#[test]
fn test_many_items_keep_most_recent_first() {
    let mut store = signed_in();

    let mut ids = Vec::new();
    for n in 0..50 {
        let item = store
            .add_item(ItemDraft {
                title: format!("Box of things #{n}"),
                description: "Assorted".to_string(),
                story: String::new(),
                category: takeitfree_core::Category::Other,
                condition: "Mixed".to_string(),
                pickup_info: "Porch".to_string(),
                images: vec![],
                location: "Downtown".to_string(),
            })
            .unwrap();
        ids.push(item.id);
    }

    ids.reverse();
    let listed: Vec<_> = store.items().iter().take(50).map(|i| i.id.clone()).collect();
    assert_eq!(listed, ids);
}
