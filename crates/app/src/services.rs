//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.
//! Services built over the same backing store share one
//! [`GuardedStore`](crate::store::GuardedStore) through an `Arc`.

pub mod rule_service;
pub mod status_service;
