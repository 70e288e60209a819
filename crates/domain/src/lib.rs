//! # TalentDesk Domain
//!
//! Scheduling domain types for TalentDesk.
//!
//! This crate contains:
//! - Interview, slot and office-hours types
//! - The normalised `TimeOfDay` wall-clock type
//! - Domain error types and Result definitions
//! - Configuration structures and default constants
//!
//! ## Architecture
//! - No dependencies on other TalentDesk crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
