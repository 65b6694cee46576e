//! AppStore - the central on-device state store.
//!
//! AppStore coordinates the four sub-models over one write-through
//! persistence layer:
//! - Profile manager (the single current identity)
//! - Item catalog with nested comments and requests
//! - Request workflow (pending -> approved/declined, single winner)
//! - Moment and report ledgers
//!
//! Every mutation serializes the affected collection and writes it to the
//! durable store *before* the new state becomes observable in memory; a
//! failed write therefore leaves the store exactly as it was.
//!
//! # Example
//!
//! ```ignore
//! use takeitfree_core::{AppStore, MemoryStore, ProfileDraft};
//!
//! let mut store = AppStore::open(MemoryStore::new())?;
//! store.setup_profile(ProfileDraft {
//!     username: "maya_gives".into(),
//!     display_name: "Maya Chen".into(),
//!     ..Default::default()
//! })?;
//! let request = store.request_item("item_1", "I need this for my class")?;
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::seed;
use crate::storage::{KeyValueStore, StorageKeys, DEFAULT_PREFIX};
use crate::types::{
    new_id, now, Category, Comment, ItemDraft, ItemRequest, ItemStatus, Moment, MomentDraft,
    ProfileDraft, ProfileUpdate, ReportDraft, ReportStatus, RequestStatus, ShareItem, UserProfile,
    UserReport, MAX_CAPTION_LEN, MAX_DETAILS_LEN, MAX_ITEM_IMAGES,
};

const MIN_USERNAME_LEN: usize = 3;
const MIN_DISPLAY_NAME_LEN: usize = 2;

/// Store construction options.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Namespace for the durable storage keys.
    pub key_prefix: String,
    /// Reject a second request from the same user on one item.
    pub reject_duplicate_requests: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_PREFIX.to_string(),
            reject_duplicate_requests: true,
        }
    }
}

/// The central store. Construct one per process and hand references to
/// consumers; a constructed store has already loaded (or seeded) all of
/// its collections.
#[derive(Debug)]
pub struct AppStore<S: KeyValueStore> {
    storage: S,
    keys: StorageKeys,
    config: StoreConfig,
    current_user: Option<UserProfile>,
    items: Vec<ShareItem>,
    moments: Vec<Moment>,
    reports: Vec<UserReport>,
}

fn encode<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string(value).map_err(|e| AppError::Serialization(e.to_string()))
}

fn decode<T: DeserializeOwned>(json: &str) -> AppResult<T> {
    serde_json::from_str(json).map_err(|e| AppError::Serialization(e.to_string()))
}

fn require_text(field: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn normalize_username(raw: &str) -> AppResult<String> {
    let username = raw.trim().to_lowercase();
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(AppError::validation(
            "username",
            format!("must be at least {MIN_USERNAME_LEN} characters"),
        ));
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(AppError::validation(
            "username",
            "may only contain letters, digits, and underscores",
        ));
    }
    Ok(username)
}

fn validate_display_name(raw: &str) -> AppResult<String> {
    let display_name = raw.trim().to_string();
    if display_name.chars().count() < MIN_DISPLAY_NAME_LEN {
        return Err(AppError::validation(
            "display_name",
            format!("must be at least {MIN_DISPLAY_NAME_LEN} characters"),
        ));
    }
    Ok(display_name)
}

impl<S: KeyValueStore> AppStore<S> {
    /// Open the store with default configuration.
    pub fn open(storage: S) -> AppResult<Self> {
        Self::with_config(storage, StoreConfig::default())
    }

    /// Open the store, loading all four collections from durable storage
    /// before returning.
    ///
    /// An absent item snapshot is seeded with the fixture catalog and an
    /// absent moment snapshot with the fixture ledger, both persisted
    /// immediately. Profile and reports default to none/empty. A corrupt
    /// snapshot fails construction rather than silently reseeding.
    pub fn with_config(storage: S, config: StoreConfig) -> AppResult<Self> {
        let keys = StorageKeys::with_prefix(&config.key_prefix);

        let current_user = match storage.get(&keys.user)? {
            Some(json) => Some(decode(&json)?),
            None => None,
        };

        let items: Vec<ShareItem> = match storage.get(&keys.items)? {
            Some(json) => decode(&json)?,
            None => {
                info!("No stored catalog, seeding fixture items");
                let seeded = seed::seed_items(now());
                storage.set(&keys.items, &encode(&seeded)?)?;
                seeded
            }
        };

        let moments: Vec<Moment> = match storage.get(&keys.moments)? {
            Some(json) => decode(&json)?,
            None => {
                info!("No stored ledger, seeding fixture moments");
                let seeded = seed::seed_moments(now());
                storage.set(&keys.moments, &encode(&seeded)?)?;
                seeded
            }
        };

        let reports: Vec<UserReport> = match storage.get(&keys.reports)? {
            Some(json) => decode(&json)?,
            None => Vec::new(),
        };

        info!(
            items = items.len(),
            moments = moments.len(),
            reports = reports.len(),
            has_profile = current_user.is_some(),
            "Store loaded"
        );

        Ok(Self {
            storage,
            keys,
            config,
            current_user,
            items,
            moments,
            reports,
        })
    }

    // ═══════════════════════════════════════════════════════════════════
    // Read views
    // ═══════════════════════════════════════════════════════════════════

    /// The active profile, if one exists.
    pub fn current_user(&self) -> Option<&UserProfile> {
        self.current_user.as_ref()
    }

    /// The full catalog, most recent first.
    pub fn items(&self) -> &[ShareItem] {
        &self.items
    }

    /// The moment ledger, most recent first.
    pub fn moments(&self) -> &[Moment] {
        &self.moments
    }

    /// The report ledger, most recent first.
    pub fn reports(&self) -> &[UserReport] {
        &self.reports
    }

    /// The fixed category set for listing pickers.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    // ═══════════════════════════════════════════════════════════════════
    // Write-through commit helpers
    // ═══════════════════════════════════════════════════════════════════

    fn require_user(&self) -> AppResult<&UserProfile> {
        self.current_user.as_ref().ok_or(AppError::Unauthenticated)
    }

    fn commit_user(&mut self, user: UserProfile) -> AppResult<UserProfile> {
        self.storage.set(&self.keys.user, &encode(&user)?)?;
        self.current_user = Some(user.clone());
        Ok(user)
    }

    fn commit_items(&mut self, items: Vec<ShareItem>) -> AppResult<()> {
        self.storage.set(&self.keys.items, &encode(&items)?)?;
        self.items = items;
        Ok(())
    }

    fn commit_moments(&mut self, moments: Vec<Moment>) -> AppResult<()> {
        self.storage.set(&self.keys.moments, &encode(&moments)?)?;
        self.moments = moments;
        Ok(())
    }

    fn commit_reports(&mut self, reports: Vec<UserReport>) -> AppResult<()> {
        self.storage.set(&self.keys.reports, &encode(&reports)?)?;
        self.reports = reports;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Profile Manager
    // ═══════════════════════════════════════════════════════════════════

    /// Create the device profile and make it current.
    ///
    /// Username is normalized to lowercase and must be at least 3
    /// alphanumeric/underscore characters; the display name at least 2
    /// characters after trimming. Verification flags are clamped to false
    /// when the matching contact field is empty.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for malformed input and
    /// `AppError::Storage` when the snapshot cannot be written.
    pub fn setup_profile(&mut self, draft: ProfileDraft) -> AppResult<UserProfile> {
        let username = normalize_username(&draft.username)?;
        let display_name = validate_display_name(&draft.display_name)?;

        let user = UserProfile {
            id: new_id(),
            username,
            display_name,
            bio: draft.bio,
            avatar: draft.avatar,
            joined_date: now(),
            email_verified: !draft.email.is_empty() && draft.email_verified,
            phone_verified: !draft.phone.is_empty() && draft.phone_verified,
            email: draft.email,
            phone: draft.phone,
            auth_method: draft.auth_method,
        };

        info!(user_id = %user.id, username = %user.username, "Profile created");
        self.commit_user(user)
    }

    /// Alias of [`AppStore::setup_profile`], kept for the signup flow.
    pub fn sign_up(&mut self, draft: ProfileDraft) -> AppResult<UserProfile> {
        self.setup_profile(draft)
    }

    /// Merge a partial update into the current profile.
    ///
    /// Changing the email or phone resets its own verified flag until the
    /// contact is re-verified; a verified flag can never be true while the
    /// matching contact field is empty. Id and join date never change.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> AppResult<UserProfile> {
        let mut user = self.require_user()?.clone();

        if let Some(display_name) = update.display_name {
            user.display_name = validate_display_name(&display_name)?;
        }
        if let Some(bio) = update.bio {
            user.bio = bio;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = avatar;
        }
        if let Some(email) = update.email {
            if email != user.email {
                user.email_verified = false;
            }
            user.email = email;
        }
        if let Some(phone) = update.phone {
            if phone != user.phone {
                user.phone_verified = false;
            }
            user.phone = phone;
        }
        if let Some(verified) = update.email_verified {
            user.email_verified = verified;
        }
        if let Some(verified) = update.phone_verified {
            user.phone_verified = verified;
        }

        // A verified flag requires a contact value to be verified against.
        if user.email.is_empty() {
            user.email_verified = false;
        }
        if user.phone.is_empty() {
            user.phone_verified = false;
        }

        debug!(user_id = %user.id, "Profile updated");
        self.commit_user(user)
    }

    /// Clear the current profile from memory and durable storage.
    ///
    /// Items, moments, and reports are untouched.
    pub fn logout(&mut self) -> AppResult<()> {
        self.storage.remove(&self.keys.user)?;
        self.current_user = None;
        info!("Logged out");
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Item Catalog
    // ═══════════════════════════════════════════════════════════════════

    /// Create a listing owned by the current profile.
    ///
    /// The owner's identity is snapshotted into the item; the listing is
    /// prepended so the catalog stays most-recent-first.
    pub fn add_item(&mut self, draft: ItemDraft) -> AppResult<ShareItem> {
        let user = self.require_user()?.clone();

        require_text("title", &draft.title)?;
        require_text("description", &draft.description)?;
        require_text("condition", &draft.condition)?;
        require_text("pickup_info", &draft.pickup_info)?;
        require_text("location", &draft.location)?;
        if draft.images.len() > MAX_ITEM_IMAGES {
            return Err(AppError::validation(
                "images",
                format!("at most {MAX_ITEM_IMAGES} images"),
            ));
        }

        let item = ShareItem {
            id: new_id(),
            user_id: user.id,
            username: user.username,
            user_avatar: user.avatar,
            title: draft.title,
            description: draft.description,
            story: draft.story,
            category: draft.category,
            condition: draft.condition,
            pickup_info: draft.pickup_info,
            images: draft.images,
            location: draft.location,
            appreciations: 0,
            appreciated_by: Vec::new(),
            comment_count: 0,
            comments: Vec::new(),
            requests: Vec::new(),
            status: ItemStatus::Available,
            created_at: now(),
        };

        info!(item_id = %item.id, title = %item.title, "Item listed");
        let mut items = self.items.clone();
        items.insert(0, item.clone());
        self.commit_items(items)?;
        Ok(item)
    }

    /// Toggle the current user's appreciation of an item.
    ///
    /// Returns the updated item.
    pub fn appreciate_item(&mut self, item_id: &str) -> AppResult<ShareItem> {
        let user_id = self.require_user()?.id.clone();

        let mut items = self.items.clone();
        let item = items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| AppError::ItemNotFound(item_id.to_string()))?;

        let appreciated = item.toggle_appreciation(&user_id);
        debug!(item_id, appreciated, "Item appreciation toggled");

        let snapshot = item.clone();
        self.commit_items(items)?;
        Ok(snapshot)
    }

    /// Append a comment by the current user to an item.
    pub fn add_comment(&mut self, item_id: &str, text: &str) -> AppResult<Comment> {
        let user = self.require_user()?.clone();
        let text = text.trim();
        require_text("text", text)?;

        let comment = Comment {
            id: new_id(),
            user_id: user.id,
            username: user.username,
            text: text.to_string(),
            created_at: now(),
        };

        let mut items = self.items.clone();
        let item = items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| AppError::ItemNotFound(item_id.to_string()))?;
        item.push_comment(comment.clone());

        debug!(item_id, comment_id = %comment.id, "Comment added");
        self.commit_items(items)?;
        Ok(comment)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Request Workflow
    // ═══════════════════════════════════════════════════════════════════

    /// File a pending request by the current user on an item.
    ///
    /// Requester and owner identities are snapshotted at this instant.
    /// With the duplicate guard enabled (default), a user who already has
    /// a request on the item gets `AppError::DuplicateRequest` regardless
    /// of that earlier request's status.
    pub fn request_item(&mut self, item_id: &str, reason: &str) -> AppResult<ItemRequest> {
        let user = self.require_user()?.clone();
        let reason = reason.trim();
        require_text("reason", reason)?;

        let mut items = self.items.clone();
        let item = items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| AppError::ItemNotFound(item_id.to_string()))?;

        if self.config.reject_duplicate_requests
            && item.requests.iter().any(|r| r.requester_id == user.id)
        {
            return Err(AppError::DuplicateRequest(item_id.to_string()));
        }

        let request = ItemRequest {
            id: new_id(),
            item_id: item.id.clone(),
            item_title: item.title.clone(),
            requester_id: user.id,
            requester_name: user.display_name,
            requester_avatar: user.avatar,
            owner_id: item.user_id.clone(),
            owner_name: item.username.clone(),
            reason: reason.to_string(),
            status: RequestStatus::Pending,
            created_at: now(),
        };
        item.requests.push(request.clone());

        info!(item_id, request_id = %request.id, "Item requested");
        self.commit_items(items)?;
        Ok(request)
    }

    /// Approve one pending request, foreclosing all others.
    ///
    /// Atomically: the target request becomes `approved`, every other
    /// `pending` request on the item becomes `declined`, and the item
    /// becomes `claimed`. Already-declined requests are untouched. At most
    /// one request per item is ever approved; approving on an item that
    /// already has a winner is an `AppError::InvalidStatus`.
    pub fn approve_request(&mut self, item_id: &str, request_id: &str) -> AppResult<()> {
        let mut items = self.items.clone();
        let item = items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| AppError::ItemNotFound(item_id.to_string()))?;

        let target_status = item
            .request(request_id)
            .map(|r| r.status)
            .ok_or_else(|| AppError::RequestNotFound(request_id.to_string()))?;
        if target_status != RequestStatus::Pending {
            return Err(AppError::InvalidStatus(format!(
                "request {request_id} is {target_status}, expected pending"
            )));
        }
        if item.requests.iter().any(|r| r.status == RequestStatus::Approved) {
            return Err(AppError::InvalidStatus(format!(
                "item {item_id} already has an approved request"
            )));
        }

        for request in &mut item.requests {
            if request.id == request_id {
                request.status = RequestStatus::Approved;
            } else if request.status == RequestStatus::Pending {
                request.status = RequestStatus::Declined;
            }
        }
        item.status = ItemStatus::Claimed;

        info!(item_id, request_id, "Request approved, item claimed");
        self.commit_items(items)
    }

    /// Decline one pending request.
    ///
    /// Only the target request changes; the item's status and its other
    /// requests are untouched.
    pub fn decline_request(&mut self, item_id: &str, request_id: &str) -> AppResult<()> {
        let mut items = self.items.clone();
        let item = items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| AppError::ItemNotFound(item_id.to_string()))?;

        let request = item
            .requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or_else(|| AppError::RequestNotFound(request_id.to_string()))?;
        if request.status != RequestStatus::Pending {
            return Err(AppError::InvalidStatus(format!(
                "request {request_id} is {}, expected pending",
                request.status
            )));
        }
        request.status = RequestStatus::Declined;

        info!(item_id, request_id, "Request declined");
        self.commit_items(items)
    }

    /// Mark a claimed item's exchange as completed.
    ///
    /// Only `claimed` items can complete; an item that was never claimed
    /// has no exchange to finish.
    pub fn complete_exchange(&mut self, item_id: &str) -> AppResult<()> {
        let mut items = self.items.clone();
        let item = items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| AppError::ItemNotFound(item_id.to_string()))?;

        if item.status != ItemStatus::Claimed {
            return Err(AppError::InvalidStatus(format!(
                "item {item_id} is {}, expected claimed",
                item.status
            )));
        }
        item.status = ItemStatus::Completed;

        info!(item_id, "Exchange completed");
        self.commit_items(items)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Catalog queries
    // ═══════════════════════════════════════════════════════════════════

    /// Look up one item by id.
    pub fn item(&self, id: &str) -> Option<&ShareItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// All items owned by `user_id`, catalog order preserved.
    pub fn user_items(&self, user_id: &str) -> Vec<ShareItem> {
        self.items
            .iter()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect()
    }

    /// All requests on items owned by the current user, flattened in
    /// catalog order with per-item insertion order preserved. Empty when
    /// no profile is active.
    pub fn incoming_requests(&self) -> Vec<ItemRequest> {
        let Some(user) = self.current_user.as_ref() else {
            return Vec::new();
        };
        self.items
            .iter()
            .filter(|item| item.user_id == user.id)
            .flat_map(|item| item.requests.iter().cloned())
            .collect()
    }

    /// All requests filed by the current user across the catalog, same
    /// ordering rule as [`AppStore::incoming_requests`]. Empty when no
    /// profile is active.
    pub fn outgoing_requests(&self) -> Vec<ItemRequest> {
        let Some(user) = self.current_user.as_ref() else {
            return Vec::new();
        };
        self.items
            .iter()
            .flat_map(|item| item.requests.iter())
            .filter(|r| r.requester_id == user.id)
            .cloned()
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Moment & Report Ledgers
    // ═══════════════════════════════════════════════════════════════════

    /// Share a moment authored by the current user.
    ///
    /// Prepended so the ledger stays most-recent-first.
    pub fn add_moment(&mut self, draft: MomentDraft) -> AppResult<Moment> {
        let user = self.require_user()?.clone();
        require_text("caption", &draft.caption)?;
        if draft.caption.chars().count() > MAX_CAPTION_LEN {
            return Err(AppError::validation(
                "caption",
                format!("at most {MAX_CAPTION_LEN} characters"),
            ));
        }

        let moment = Moment {
            id: new_id(),
            user_id: user.id,
            username: user.username,
            user_avatar: user.avatar,
            item_id: draft.item_id,
            item_title: draft.item_title,
            caption: draft.caption,
            image_uri: draft.image_uri,
            role: draft.role,
            appreciations: 0,
            appreciated_by: Vec::new(),
            created_at: now(),
        };

        info!(moment_id = %moment.id, "Moment shared");
        let mut moments = self.moments.clone();
        moments.insert(0, moment.clone());
        self.commit_moments(moments)?;
        Ok(moment)
    }

    /// Toggle the current user's appreciation of a moment.
    ///
    /// Returns the updated moment.
    pub fn appreciate_moment(&mut self, moment_id: &str) -> AppResult<Moment> {
        let user_id = self.require_user()?.id.clone();

        let mut moments = self.moments.clone();
        let moment = moments
            .iter_mut()
            .find(|m| m.id == moment_id)
            .ok_or_else(|| AppError::MomentNotFound(moment_id.to_string()))?;

        let appreciated = moment.toggle_appreciation(&user_id);
        debug!(moment_id, appreciated, "Moment appreciation toggled");

        let snapshot = moment.clone();
        self.commit_moments(moments)?;
        Ok(snapshot)
    }

    /// All moments authored by `user_id`, ledger order preserved.
    pub fn user_moments(&self, user_id: &str) -> Vec<Moment> {
        self.moments
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect()
    }

    /// File an abuse report by the current user.
    ///
    /// Reports are append-only and stay `pending` on-device.
    pub fn add_report(&mut self, draft: ReportDraft) -> AppResult<UserReport> {
        let user = self.require_user()?.clone();
        if draft.details.chars().count() > MAX_DETAILS_LEN {
            return Err(AppError::validation(
                "details",
                format!("at most {MAX_DETAILS_LEN} characters"),
            ));
        }

        let report = UserReport {
            id: new_id(),
            reporter_id: user.id,
            reporter_name: user.display_name,
            reported_user_id: draft.reported_user_id,
            reported_username: draft.reported_username,
            reason: draft.reason,
            details: draft.details,
            status: ReportStatus::Pending,
            created_at: now(),
        };

        warn!(
            reported_user_id = %report.reported_user_id,
            reason = %report.reason.label(),
            "User reported"
        );
        let mut reports = self.reports.clone();
        reports.insert(0, report.clone());
        self.commit_reports(reports)?;
        Ok(report)
    }
}
