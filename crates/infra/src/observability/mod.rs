//! Observability infrastructure
//!
//! Installs the process-wide `tracing` subscriber. The engine crates only
//! emit events through `tracing` macros; nothing is printed unless the host
//! calls [`init_tracing`].

pub mod logging;

pub use logging::{build_filter, init_tracing};
