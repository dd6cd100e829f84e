//! Call sites and redispatch targets.

use std::fmt;
use std::sync::Arc;

use crate::Value;

/// The values passed to one invocation of an overloaded function.
///
/// The first `offset` values (usually just the receiver) are carried along
/// for redispatch but are neither kind-checked nor counted as arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    values: Vec<Value>,
    offset: usize,
}

impl Call {
    /// Create a call whose first `offset` values are implicit.
    pub fn new(values: Vec<Value>, offset: usize) -> Self {
        Self { values, offset }
    }

    /// A method call: the receiver followed by the explicit arguments.
    pub fn method(receiver: Value, args: impl IntoIterator<Item = Value>) -> Self {
        let mut values = vec![receiver];
        values.extend(args);
        Self { values, offset: 1 }
    }

    /// A plain function call with no implicit leading values.
    pub fn function(args: impl IntoIterator<Item = Value>) -> Self {
        Self {
            values: args.into_iter().collect(),
            offset: 0,
        }
    }

    /// Every value, implicit ones included.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of explicit arguments, or `None` when the call is shorter than
    /// its offset (such a call satisfies no arity guard).
    #[inline]
    pub fn argc(&self) -> Option<usize> {
        self.values.len().checked_sub(self.offset)
    }

    /// The explicit arguments (empty when the call is shorter than its offset).
    pub fn args(&self) -> &[Value] {
        self.values.get(self.offset..).unwrap_or(&[])
    }

    /// Explicit argument `index`, counting from the first value after the offset.
    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args().get(index)
    }

    /// The receiver, when the call has one.
    pub fn receiver(&self) -> Option<&Value> {
        if self.offset == 0 {
            None
        } else {
            self.values.first()
        }
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

/// Name of the method a matched rule redispatches to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Target(Arc<str>);

impl Target {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}
