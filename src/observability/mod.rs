//! Observability subsystem
//!
//! Structured JSON logging for request handling and lifecycle events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on request handling
//! 3. No async or background threads
//! 4. Deterministic output

mod logger;

pub use logger::{Logger, Severity};
