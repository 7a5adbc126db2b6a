//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`FiguraError`] covers:
//! - Transform stack contract violations (underflow, unbalanced scopes)
//! - Missing sockets when placing derived props
//! - Settings loading and validation failures
//! - Unknown scenario names
//!
//! Stack errors are programming-contract violations. They are surfaced as
//! `Err` so the caller sees them immediately, and nothing in the crate tries
//! to recover from them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use figura::errors::Result;
//!
//! fn draw_arm(stack: &mut TransformStack) -> Result<()> {
//!     stack.push();
//!     // ...
//!     stack.pop()
//! }
//! ```

use thiserror::Error;

use crate::scene::skeleton::SocketId;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum FiguraError {
    // ========================================================================
    // Transform Stack Errors
    // ========================================================================
    /// `pop` was called with no saved transform in the history.
    #[error("Transform stack underflow: pop called with empty history")]
    StackUnderflow,

    /// A scope returned with a different stack depth than it started with.
    #[error("Unbalanced transform stack in {context}: expected depth {expected}, found {found}")]
    UnbalancedStack {
        /// Which routine detected the imbalance
        context: &'static str,
        /// Depth recorded on entry
        expected: usize,
        /// Depth observed on exit
        found: usize,
    },

    // ========================================================================
    // Prop Placement Errors
    // ========================================================================
    /// A derived prop needs a socket that the skeleton did not capture.
    #[error("Socket {0:?} was not captured during skeleton evaluation")]
    MissingSocket(SocketId),

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// Settings failed validation.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// A scenario name did not match any known routine.
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Alias for `Result<T, FiguraError>`.
pub type Result<T> = std::result::Result<T, FiguraError>;
