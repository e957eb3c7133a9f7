//! # thermohub-domain
//!
//! Pure domain model for the thermohub heating controller.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, fixed UTC offsets
//! - Define the **rule tree** (`RuleSet` → `Circuit` → `Relay` → `ScheduleEntry`)
//! - Resolve the **scheduled temperature** that applies at a given instant
//! - Define **relay patches** (explicit field updates) and the merge into a rule tree
//! - Project the rule tree into flat **sensor readings**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod patch;
pub mod rules;
pub mod schedule;
pub mod status;
