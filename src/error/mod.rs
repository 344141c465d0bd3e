//! Error handling for the Scribe application
//!
//! This module provides the error handling system for the Scribe application,
//! including error types, warning types, result aliases, and error context
//! utilities.

pub mod context;
pub mod types;

pub use context::{handle_error, OptionExt, ResultExt};
pub use types::{ErrorSeverity, Result, ScribeError, Warning, WarningKind};
