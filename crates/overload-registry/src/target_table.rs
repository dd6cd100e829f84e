//! Native redispatch targets.
//!
//! A matched rule names a [`Target`]; the [`TargetTable`] maps that name to
//! the Rust function that actually runs. The target receives the whole
//! original [`Call`], receiver included.

use std::fmt;
use std::sync::Arc;

use overload_core::{Call, Target, Value};
use rustc_hash::FxHashMap;

use crate::{NativeError, RegistrationError};

/// Trait for callable native targets.
pub trait NativeCallable {
    /// Run the target with the original call.
    fn call(&self, call: &Call) -> Result<Value, NativeError>;
}

impl<F> NativeCallable for F
where
    F: Fn(&Call) -> Result<Value, NativeError>,
{
    fn call(&self, call: &Call) -> Result<Value, NativeError> {
        (self)(call)
    }
}

/// Type-erased native target.
///
/// The inner callable is wrapped in `Arc` so tables can be cloned cheaply.
#[derive(Clone)]
pub struct NativeFn {
    inner: Arc<dyn NativeCallable + Send + Sync>,
}

impl NativeFn {
    pub fn new<F>(f: F) -> Self
    where
        F: NativeCallable + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    pub fn call(&self, call: &Call) -> Result<Value, NativeError> {
        self.inner.call(call)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFn").finish_non_exhaustive()
    }
}

/// Target name -> native function.
#[derive(Debug, Default, Clone)]
pub struct TargetTable {
    targets: FxHashMap<Target, NativeFn>,
}

impl TargetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a native function under `name`.
    ///
    /// Returns an error if the name is already taken.
    pub fn register<F>(&mut self, name: impl Into<Target>, f: F) -> Result<(), RegistrationError>
    where
        F: NativeCallable + Send + Sync + 'static,
    {
        let target = name.into();
        if self.targets.contains_key(&target) {
            return Err(RegistrationError::DuplicateTarget(target.to_string()));
        }
        self.targets.insert(target, NativeFn::new(f));
        Ok(())
    }

    pub fn get(&self, target: &Target) -> Option<&NativeFn> {
        self.targets.get(target)
    }

    pub fn contains(&self, target: &Target) -> bool {
        self.targets.contains_key(target)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Run the function registered under `target`.
    pub fn invoke(&self, target: &Target, call: &Call) -> Result<Value, NativeError> {
        let native = self
            .get(target)
            .ok_or_else(|| NativeError::UnknownTarget(target.to_string()))?;
        tracing::trace!(target = %target, argc = ?call.argc(), "invoking native target");
        native.call(call)
    }
}

/// Fetch explicit argument `index` of a call, for use inside targets.
pub fn arg(call: &Call, index: usize) -> Result<&Value, NativeError> {
    call.arg(index).ok_or(NativeError::ArgumentIndexOutOfBounds {
        index,
        count: call.argc().unwrap_or(0),
    })
}
