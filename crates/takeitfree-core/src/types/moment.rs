//! Moments - short testimonial posts created after an exchange.

use serde::{Deserialize, Serialize};

/// Longest caption a moment may carry, in characters.
pub const MAX_CAPTION_LEN: usize = 280;

/// Which side of the exchange the author was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MomentRole {
    Giver,
    Receiver,
}

/// A testimonial post. Append-only; no edit or delete operation exists.
///
/// The referenced item id/title are snapshots used for display only - a
/// moment outlives any state the referenced item later reaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    pub id: String,
    /// Author identity, snapshotted at creation
    pub user_id: String,
    pub username: String,
    pub user_avatar: Option<String>,
    pub item_id: String,
    pub item_title: String,
    pub caption: String,
    pub image_uri: Option<String>,
    pub role: MomentRole,
    /// Community counter; only moved by [`Moment::toggle_appreciation`]
    pub appreciations: u32,
    pub appreciated_by: Vec<String>,
    pub created_at: i64,
}

impl Moment {
    /// Toggle `user_id`'s appreciation of this moment.
    ///
    /// Returns `true` if the user now appreciates it.
    pub fn toggle_appreciation(&mut self, user_id: &str) -> bool {
        crate::types::toggle_appreciation(&mut self.appreciations, &mut self.appreciated_by, user_id)
    }
}

/// Caller-supplied fields for a new moment. Author identity is snapshotted
/// from the current profile by the store.
#[derive(Debug, Clone)]
pub struct MomentDraft {
    pub item_id: String,
    pub item_title: String,
    pub caption: String,
    pub image_uri: Option<String>,
    pub role: MomentRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MomentRole::Giver).unwrap(), "\"giver\"");
        assert_eq!(serde_json::to_string(&MomentRole::Receiver).unwrap(), "\"receiver\"");
    }

    #[test]
    fn test_toggle_appreciation() {
        let mut moment = Moment {
            id: "m1".to_string(),
            user_id: "u1".to_string(),
            username: "maya_gives".to_string(),
            user_avatar: None,
            item_id: "i1".to_string(),
            item_title: "Lamp".to_string(),
            caption: "Found a new home!".to_string(),
            image_uri: None,
            role: MomentRole::Giver,
            appreciations: 0,
            appreciated_by: vec![],
            created_at: 0,
        };

        moment.toggle_appreciation("u2");
        assert_eq!(moment.appreciations, 1);
        moment.toggle_appreciation("u2");
        assert_eq!(moment.appreciations, 0);
    }
}
