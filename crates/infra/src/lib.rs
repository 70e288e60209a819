//! # TalentDesk Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (environment, TOML, JSON)
//! - Tracing subscriber setup
//! - In-memory slot reservation store
//! - In-memory and file-backed draft stores
//!
//! ## Architecture
//! - Implements traits defined in `talentdesk-core`
//! - Depends on `talentdesk-domain` and `talentdesk-core`
//! - Contains all "impure" code (I/O, global subscriber)

pub mod config;
pub mod drafts;
pub mod errors;
pub mod observability;
pub mod reservations;

// Re-export commonly used items
pub use drafts::{FileDraftStore, InMemoryDraftStore};
pub use errors::InfraError;
pub use observability::init_tracing;
pub use reservations::InMemorySlotReservations;
