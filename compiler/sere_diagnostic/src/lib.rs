//! Diagnostic system for syntax error reporting.
//!
//! Every diagnostic carries:
//! - an error code for searchability
//! - a message saying what went wrong
//! - a primary span saying where
//! - optional notes with the surrounding context
//!
//! The parser never drops a diagnostic: [`DiagnosticCollector`] keeps all
//! of them in emission order.

mod collector;
mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use collector::DiagnosticCollector;
pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
