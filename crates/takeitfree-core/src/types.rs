//! Core types for the TakeItFree store
//!
//! One submodule per sub-model:
//! - `profile` - the current user's identity record
//! - `item` - shareable items with their comments and requests
//! - `moment` - post-exchange testimonial posts
//! - `report` - abuse reports
//!
//! This module also carries the identifier/timestamp helpers and the
//! appreciation-toggle primitive shared by items and moments.

use ulid::Ulid;

mod item;
mod moment;
mod profile;
mod report;

pub use item::{
    Category, Comment, ItemDraft, ItemRequest, ItemStatus, RequestStatus, ShareItem,
    MAX_ITEM_IMAGES,
};
pub use moment::{Moment, MomentDraft, MomentRole, MAX_CAPTION_LEN};
pub use profile::{AuthMethod, ProfileDraft, ProfileUpdate, UserProfile};
pub use report::{ReportDraft, ReportReason, ReportStatus, UserReport, MAX_DETAILS_LEN};

/// Generate a new opaque entity id.
///
/// ULIDs are time-ordered and sort lexicographically. Id fields stay plain
/// strings so that seeded fixture ids (`item_1`, `c1`, ...) coexist with
/// generated ones.
pub fn new_id() -> String {
    Ulid::new().to_string()
}

/// Current time as Unix seconds.
pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Toggle `user_id`'s appreciation of a record.
///
/// The counter and the tracked set are only ever updated together, here.
/// Seeded fixtures carry community counts larger than the tracked set, so
/// the counter moves relative to its current value instead of being
/// recomputed. Returns `true` if the user now appreciates the record.
pub(crate) fn toggle_appreciation(
    appreciations: &mut u32,
    appreciated_by: &mut Vec<String>,
    user_id: &str,
) -> bool {
    if let Some(pos) = appreciated_by.iter().position(|id| id == user_id) {
        appreciated_by.remove(pos);
        *appreciations = appreciations.saturating_sub(1);
        false
    } else {
        appreciated_by.push(user_id.to_string());
        *appreciations += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut count = 0u32;
        let mut by = Vec::new();

        assert!(toggle_appreciation(&mut count, &mut by, "u1"));
        assert_eq!(count, 1);
        assert_eq!(by, vec!["u1".to_string()]);

        assert!(!toggle_appreciation(&mut count, &mut by, "u1"));
        assert_eq!(count, 0);
        assert!(by.is_empty());
    }

    #[test]
    fn test_toggle_preserves_seed_offset() {
        // Fixture-style record: counter ahead of the tracked set.
        let mut count = 24u32;
        let mut by = vec!["seed_2".to_string(), "seed_3".to_string()];

        toggle_appreciation(&mut count, &mut by, "u1");
        assert_eq!(count, 25);
        toggle_appreciation(&mut count, &mut by, "u1");
        assert_eq!(count, 24);
        assert_eq!(by.len(), 2);
    }

    #[test]
    fn test_toggle_never_goes_negative() {
        let mut count = 0u32;
        let mut by = vec!["u1".to_string()];

        toggle_appreciation(&mut count, &mut by, "u1");
        assert_eq!(count, 0);
        assert!(by.is_empty());
    }
}
