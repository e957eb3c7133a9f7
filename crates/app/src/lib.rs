//! # thermohub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`RuleStore` port** that storage adapters implement
//!   (load the whole rule tree, save the whole rule tree)
//! - Own the **write critical section** around load → mutate → save
//!   ([`store::GuardedStore`])
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RuleService`: read rules, patch a relay
//!   - `StatusService`: derive per-relay sensor readings
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (an in-memory rule store)
//!
//! ## Dependency rule
//! Depends on `thermohub-domain` only (plus `tokio::sync` for the write lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod memory_store;
pub mod ports;
pub mod services;
pub mod store;
