//! Share items - listings of physical things offered for free.
//!
//! An item owns its comments and its request list; neither exists outside
//! the parent item. The request list encodes the approval workflow: at
//! most one request per item is ever approved, and approving one declines
//! every other pending request on the same item.

use serde::{Deserialize, Serialize};

/// Most images an item listing may carry.
pub const MAX_ITEM_IMAGES: usize = 5;

/// The fixed category set for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Books,
    Clothes,
    Electronics,
    Furniture,
    Toys,
    Kitchen,
    Sports,
    Other,
}

impl Category {
    /// All categories, in the order the UI presents them.
    pub const ALL: [Category; 8] = [
        Category::Books,
        Category::Clothes,
        Category::Electronics,
        Category::Furniture,
        Category::Toys,
        Category::Kitchen,
        Category::Sports,
        Category::Other,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Books => "Books",
            Category::Clothes => "Clothes",
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::Toys => "Toys",
            Category::Kitchen => "Kitchen",
            Category::Sports => "Sports",
            Category::Other => "Other",
        };
        write!(f, "{label}")
    }
}

/// Lifecycle status of an item.
///
/// `available` until a request is approved, then `claimed`, then
/// `completed` once the exchange happens. No transition goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Available,
    Claimed,
    Completed,
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStatus::Available => write!(f, "available"),
            ItemStatus::Claimed => write!(f, "claimed"),
            ItemStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Lifecycle status of a request. `approved` and `declined` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Declined,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Approved => write!(f, "approved"),
            RequestStatus::Declined => write!(f, "declined"),
        }
    }
}

/// A listing of one physical item offered for free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareItem {
    pub id: String,
    /// Owner identity, snapshotted at creation
    pub user_id: String,
    pub username: String,
    pub user_avatar: Option<String>,
    pub title: String,
    pub description: String,
    /// Optional narrative about the item's history
    pub story: String,
    pub category: Category,
    /// Free-text condition label
    pub condition: String,
    pub pickup_info: String,
    /// Ordered opaque image URIs, at most [`MAX_ITEM_IMAGES`]
    pub images: Vec<String>,
    pub location: String,
    /// Community counter; only moved by [`ShareItem::toggle_appreciation`]
    pub appreciations: u32,
    pub appreciated_by: Vec<String>,
    /// Only moved by [`ShareItem::push_comment`]
    pub comment_count: u32,
    /// Insertion order is display order
    pub comments: Vec<Comment>,
    /// Insertion order preserved
    pub requests: Vec<ItemRequest>,
    pub status: ItemStatus,
    pub created_at: i64,
}

impl ShareItem {
    /// Toggle `user_id`'s appreciation of this item.
    ///
    /// Returns `true` if the user now appreciates it.
    pub fn toggle_appreciation(&mut self, user_id: &str) -> bool {
        crate::types::toggle_appreciation(&mut self.appreciations, &mut self.appreciated_by, user_id)
    }

    /// Append a comment, keeping the counter in step with the collection.
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
        self.comment_count += 1;
    }

    /// Find a request on this item by id.
    pub fn request(&self, request_id: &str) -> Option<&ItemRequest> {
        self.requests.iter().find(|r| r.id == request_id)
    }
}

/// A comment on an item. Immutable once created; append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    /// Author identity, snapshotted at creation
    pub user_id: String,
    pub username: String,
    pub text: String,
    pub created_at: i64,
}

/// A user's expressed interest in claiming an item.
///
/// Requester and owner identities are snapshots taken when the request was
/// made; later profile edits do not flow back into them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRequest {
    pub id: String,
    pub item_id: String,
    pub item_title: String,
    pub requester_id: String,
    pub requester_name: String,
    pub requester_avatar: Option<String>,
    pub owner_id: String,
    pub owner_name: String,
    /// Why the requester wants the item, required non-empty
    pub reason: String,
    pub status: RequestStatus,
    pub created_at: i64,
}

/// Caller-supplied fields for a new listing.
#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub story: String,
    pub category: Category,
    pub condition: String,
    pub pickup_info: String,
    pub images: Vec<String>,
    pub location: String,
}
