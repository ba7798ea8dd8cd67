//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `reqwest`, `std::fs`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod app;
pub mod error;

pub use app::{AppLookup, ReconcileOutcome, validate_project_id};
pub use error::{ConfigError, PlatformError, ReconcileError, ReconcileStep};
