//! Runtime argument values.
//!
//! [`Value`] is what a call site actually passes: scalars, unblessed
//! references, blessed objects and handles. Matching never looks at the
//! payloads beyond what [`Value::kind`] exposes, plus the class name of
//! objects and the text of strings (for the numeric check).

use std::fmt;

use rustc_hash::FxHashMap;

/// A dynamically-typed call argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value (`undef`).
    Undefined,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating point scalar.
    Float(f64),
    /// String scalar.
    Str(String),
    /// Reference to an array.
    Array(Vec<Value>),
    /// Reference to a hash.
    Hash(FxHashMap<String, Value>),
    /// A glob or I/O handle.
    Glob(GlobRef),
    /// Reference to an object blessed into a class.
    Object(ObjectRef),
    /// Reference to a scalar (or another reference).
    Ref(Box<Value>),
    /// Reference to a named subroutine.
    Code(String),
}

/// Shape of a [`Value`], the only thing the matcher dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Boolean,
    Number,
    String,
    ArrayRef,
    HashRef,
    Handle,
    ObjectRef,
    OtherReference,
}

impl Value {
    /// Create a string value.
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Create a reference to an array of values.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(items.into_iter().collect())
    }

    /// Create a reference to a hash.
    pub fn hash<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Hash(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Create an object blessed into `class`.
    pub fn object(class: impl Into<String>) -> Self {
        Value::Object(ObjectRef::new(class))
    }

    /// Create a handle value.
    pub fn glob(name: impl Into<String>) -> Self {
        Value::Glob(GlobRef::new(name))
    }

    /// Classify this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Int(_) | Value::Float(_) => ValueKind::Number,
            Value::Str(_) => ValueKind::String,
            Value::Array(_) => ValueKind::ArrayRef,
            Value::Hash(_) => ValueKind::HashRef,
            Value::Glob(_) => ValueKind::Handle,
            Value::Object(_) => ValueKind::ObjectRef,
            Value::Ref(_) | Value::Code(_) => ValueKind::OtherReference,
        }
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    #[inline]
    pub fn is_handle(&self) -> bool {
        matches!(self, Value::Glob(_))
    }

    #[inline]
    pub fn is_array_ref(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// The blessed object, if this value is one.
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<ObjectRef> for Value {
    fn from(v: ObjectRef) -> Self {
        Value::Object(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Undefined, Into::into)
    }
}

/// A reference to an object blessed into a class.
///
/// Only the class name matters for dispatch; the object's storage belongs
/// to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    class: String,
}

impl ObjectRef {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }

    /// The class this object is blessed into.
    pub fn class_name(&self) -> &str {
        &self.class
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=OBJECT", self.class)
    }
}

/// A glob or I/O handle, e.g. `*STDOUT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlobRef {
    name: String,
}

impl GlobRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
