//! Shared utilities for nanohd.

pub mod logging;

pub use logging::{build_filter, init_tracing, LogFormat};
