//! Diagnostic system for compiler error reporting.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (the compiler state that led there)
//!
//! The structural-type passes only ever produce internal compiler errors
//! (the `E9xxx` range); source-level diagnostics come from earlier phases.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
