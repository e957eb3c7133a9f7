//! # thermohub-adapter-storage-json
//!
//! Persistence adapter storing the rule set in a single JSON file.
//!
//! ## Responsibilities
//! - Implement the `RuleStore` port defined in `thermohub-app::ports`
//! - Read and parse the whole file on every load
//! - Rewrite the whole file, pretty-printed, on every save
//! - Map IO and JSON failures into domain errors
//!
//! ## Dependency rule
//! Depends on `thermohub-app` (for port traits) and `thermohub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod file_store;

pub use file_store::{Config, JsonFileRuleStore};
