//! Registry and invocation errors.

use thiserror::Error;

/// Errors registering classes or targets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A class was registered with an empty name.
    #[error("class name must not be empty")]
    EmptyClassName,

    /// A class was declared as its own parent.
    #[error("class '{0}' cannot inherit from itself")]
    SelfInheritance(String),

    /// Adding the parent would make the hierarchy cyclic.
    #[error("inheritance cycle: '{parent}' already derives from '{child}'")]
    InheritanceCycle { child: String, parent: String },

    /// A target with this name is already registered.
    #[error("target '{0}' is already registered")]
    DuplicateTarget(String),
}

/// Errors raised while invoking a native target.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NativeError {
    /// No target with this name is registered.
    #[error("no target named '{0}'")]
    UnknownTarget(String),

    /// A target read past the end of its arguments.
    #[error("argument index {index} out of bounds (call has {count} arguments)")]
    ArgumentIndexOutOfBounds { index: usize, count: usize },

    /// The target itself failed.
    #[error("{0}")]
    Failed(String),
}

impl NativeError {
    /// Create a failure with a message.
    pub fn failed(message: impl Into<String>) -> Self {
        NativeError::Failed(message.into())
    }
}
