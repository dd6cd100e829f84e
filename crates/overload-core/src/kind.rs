//! Argument kinds.
//!
//! [`ArgumentKind`] is what a prototype declares for one position;
//! [`ObservedKind`] is what a diagnostic reports an actual argument to be.
//! Both render to the same vocabulary of words so the two halves of a
//! "no matching overload" message line up.

use std::fmt;
use std::str::FromStr;

use crate::error::KindError;

/// A non-empty class or interface name used as an argument kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName(String);

impl ClassName {
    /// Create a class name, rejecting the empty string.
    pub fn new(name: impl Into<String>) -> Result<Self, KindError> {
        let name = name.into();
        if name.is_empty() {
            return Err(KindError::EmptyClassName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The kind a prototype expects at one argument position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// An array reference.
    Array,
    /// Anything; every value has a truth value.
    Bool,
    /// A number or a string that looks like one.
    Number,
    /// Anything; every value stringifies.
    String,
    /// An object of this class or a subclass, or undef.
    Class(ClassName),
}

impl ArgumentKind {
    /// Shorthand for `ArgumentKind::Class(ClassName::new(name)?)`.
    pub fn class(name: impl Into<String>) -> Result<Self, KindError> {
        ClassName::new(name).map(ArgumentKind::Class)
    }

    /// The word used for this kind in diagnostics.
    pub fn word(&self) -> &str {
        match self {
            ArgumentKind::Array => "array",
            ArgumentKind::Bool => "boolean",
            ArgumentKind::Number => "number",
            ArgumentKind::String => "string/scalar",
            ArgumentKind::Class(name) => name.as_str(),
        }
    }
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// Parses the declaration vocabulary: `array`, `bool`/`boolean`, `number`,
/// `string`/`scalar`/`string/scalar`. Anything else is a class name.
impl FromStr for ArgumentKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "array" => Ok(ArgumentKind::Array),
            "bool" | "boolean" => Ok(ArgumentKind::Bool),
            "number" => Ok(ArgumentKind::Number),
            "string" | "scalar" | "string/scalar" => Ok(ArgumentKind::String),
            other => ArgumentKind::class(other),
        }
    }
}

/// What an actual argument turned out to be, for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObservedKind {
    Undefined,
    /// A blessed object, carrying its class name.
    Object(String),
    ArrayRef,
    HashRef,
    OtherReference,
    Handle,
    Number,
    String,
}

impl ObservedKind {
    pub fn word(&self) -> &str {
        match self {
            ObservedKind::Undefined => "undef",
            ObservedKind::Object(class) => class,
            ObservedKind::ArrayRef => "array",
            ObservedKind::HashRef => "hash",
            ObservedKind::OtherReference => "reference",
            ObservedKind::Handle => "glob/handle",
            ObservedKind::Number => "number",
            ObservedKind::String => "scalar",
        }
    }
}

impl fmt::Display for ObservedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}
