//! TakeItFree Core Library
//!
//! Client-side state and transaction model for TakeItFree, a local-first
//! app where people give away physical items to others nearby. The core
//! owns the entity schemas, the request/approval workflow, and the
//! mutation operations that keep derived counters consistent with their
//! collections; screens and navigation live elsewhere and only consume
//! this crate.
//!
//! ## Overview
//!
//! - **Local-first**: everything lives on-device; there is no backend,
//!   network protocol, or multi-device sync
//! - **Write-through**: every mutation is durable before it is observable
//! - **Single actor**: one profile, one logical thread of control
//!
//! ## Quick Start
//!
//! ```ignore
//! use takeitfree_core::{AppStore, ProfileDraft, RedbStore};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storage = RedbStore::new("~/.takeitfree/data.redb")?;
//!     let mut store = AppStore::open(storage)?;
//!
//!     store.setup_profile(ProfileDraft {
//!         username: "maya_gives".into(),
//!         display_name: "Maya Chen".into(),
//!         ..Default::default()
//!     })?;
//!
//!     // Browse the catalog and ask for something
//!     for item in store.items() {
//!         println!("{} ({})", item.title, item.status);
//!     }
//!     store.request_item("item_1", "I need this for my class")?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod seed;
pub mod storage;
pub mod store;
pub mod types;

// Re-exports
pub use error::{AppError, AppResult};
pub use storage::{KeyValueStore, MemoryStore, RedbStore, StorageKeys, DEFAULT_PREFIX};
pub use store::{AppStore, StoreConfig};
pub use types::*;
