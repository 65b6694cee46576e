//! User profile - the single on-device identity record.

use serde::{Deserialize, Serialize};

/// How the profile was originally authenticated.
///
/// The surrounding auth screens simulate verification; only the resulting
/// method label is recorded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    #[default]
    Email,
    Phone,
    Google,
    Apple,
}

/// The current user's identity record.
///
/// At most one profile is active per device. Items, requests, and moments
/// snapshot its display fields at creation time and are never refreshed by
/// later profile edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Opaque id assigned at creation, immutable
    pub id: String,
    /// Lowercase handle, alphanumeric + underscore, at least 3 chars
    pub username: String,
    /// Name shown in UI, at least 2 chars
    pub display_name: String,
    /// Free-text biography
    pub bio: String,
    /// Opaque avatar reference, if one was picked
    pub avatar: Option<String>,
    /// Unix timestamp set once at creation
    pub joined_date: i64,
    /// Contact email, empty when not supplied
    pub email: String,
    /// Contact phone, empty when not supplied
    pub phone: String,
    /// Must be false whenever `email` is empty
    pub email_verified: bool,
    /// Must be false whenever `phone` is empty
    pub phone_verified: bool,
    /// Auth method recorded at signup
    pub auth_method: AuthMethod,
}

/// Input for profile creation.
///
/// Id and join date are assigned by the store; verification flags are
/// clamped to false when the matching contact field is empty.
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub avatar: Option<String>,
    pub email: String,
    pub phone: String,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub auth_method: AuthMethod,
}

/// Partial profile update. `None` fields are left untouched.
///
/// `avatar` is doubly optional: the outer `Option` is "change it or not",
/// the inner one is the new value (or `None` to clear it).
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<Option<String>>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub email_verified: Option<bool>,
    pub phone_verified: Option<bool>,
}
