//! Error types for overload dispatch.
//!
//! ## Error Hierarchy
//!
//! ```text
//! KindError      - building argument kinds and prototypes
//! DispatchError  - no rule matched a call (always fatal for that call)
//! ```
//!
//! Registration and invocation errors live with the registry that
//! produces them.

use thiserror::Error;

// ============================================================================
// Kind Errors
// ============================================================================

/// Errors building an [`ArgumentKind`](crate::ArgumentKind) or a
/// [`Prototype`](crate::Prototype).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KindError {
    /// A class kind was declared with an empty name.
    #[error("class name must not be empty")]
    EmptyClassName,

    /// A prototype list contained an empty entry.
    #[error("empty argument kind at position {position}")]
    EmptyPrototypeEntry { position: usize },
}

// ============================================================================
// Dispatch Errors
// ============================================================================

/// No rule of an overloaded function accepted the call.
///
/// The `Display` output is the complete diagnostic: every candidate
/// signature, then the kinds of the arguments actually passed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("{message}")]
    NoMatchingOverload {
        /// Name of the overloaded function.
        function: String,
        /// One rendered `function(kind, ...)` line per candidate.
        candidates: Vec<String>,
        /// Rendered kind of each explicit argument, in call order.
        actual: Vec<String>,
        /// The full diagnostic text.
        message: String,
    },
}

impl DispatchError {
    /// Name of the function that failed to dispatch.
    pub fn function(&self) -> &str {
        match self {
            DispatchError::NoMatchingOverload { function, .. } => function,
        }
    }

    /// The full diagnostic text.
    pub fn message(&self) -> &str {
        match self {
            DispatchError::NoMatchingOverload { message, .. } => message,
        }
    }
}
