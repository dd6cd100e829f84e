//! The seams between the dispatch engine and its host environment.
//!
//! The engine never inspects the host's object model directly. It asks an
//! [`Introspect`] implementation about values and hands the chosen target to
//! an [`Invoker`]. [`Host`] is a ready-made implementation of both, backed by
//! the registries in `overload-registry`.

use overload_core::{
    Call, ClassName, DispatchError, ObjectRef, ObservedKind, Target, Value, looks_like_number,
};
use overload_registry::{ClassRegistry, NativeError, TargetTable};
use thiserror::Error;

use crate::classify::observe;

/// Value introspection supplied by the host.
pub trait Introspect {
    /// Whether `object` is an instance of `class` or of one of its subclasses.
    fn is_instance_of(&self, object: &ObjectRef, class: &ClassName) -> bool;

    /// Whether `value` is acceptable where a number is expected.
    fn looks_numeric(&self, value: &Value) -> bool {
        looks_like_number(value)
    }

    /// What `value` is, for diagnostics.
    fn classify(&self, value: &Value) -> ObservedKind {
        observe(value, |v| self.looks_numeric(v))
    }
}

impl<T: Introspect + ?Sized> Introspect for &T {
    fn is_instance_of(&self, object: &ObjectRef, class: &ClassName) -> bool {
        (**self).is_instance_of(object, class)
    }

    fn looks_numeric(&self, value: &Value) -> bool {
        (**self).looks_numeric(value)
    }

    fn classify(&self, value: &Value) -> ObservedKind {
        (**self).classify(value)
    }
}

impl Introspect for ClassRegistry {
    fn is_instance_of(&self, object: &ObjectRef, class: &ClassName) -> bool {
        self.is_derived_from(object.class_name(), class.as_str())
    }
}

/// Performs the redispatch once a rule has matched.
///
/// `Error: From<DispatchError>` is how the host raises the fatal
/// "no matching overload" error: dispatch converts the diagnostic into the
/// host's error type and returns it without running anything.
pub trait Invoker {
    type Output;
    type Error: From<DispatchError>;

    /// Call `target` with the full original call, receiver included.
    fn invoke(&mut self, target: &Target, call: &Call) -> Result<Self::Output, Self::Error>;
}

/// Errors surfaced by [`Host`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Native(#[from] NativeError),
}

/// A self-contained host: a class hierarchy plus a table of native targets.
///
/// # Example
///
/// ```
/// use overload::{Call, CallSite, Host, NativeError, Prototype, Value};
///
/// let mut host = Host::new();
/// host.targets
///     .register("area_wh", |call: &Call| -> Result<Value, NativeError> {
///         match (call.arg(0), call.arg(1)) {
///             (Some(Value::Int(w)), Some(Value::Int(h))) => Ok(Value::Int(w * h)),
///             _ => Ok(Value::Undefined),
///         }
///     })
///     .unwrap();
///
/// let site = CallSite::builder("Area")
///     .exact("number, number".parse::<Prototype>().unwrap(), "area_wh", 2)
///     .build();
///
/// let call = site.call(vec![Value::object("Rect"), Value::Int(3), Value::Int(4)]);
/// assert_eq!(site.dispatch(&mut host, &call), Ok(Value::Int(12)));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Host {
    pub classes: ClassRegistry,
    pub targets: TargetTable,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registries(classes: ClassRegistry, targets: TargetTable) -> Self {
        Self { classes, targets }
    }
}

impl Introspect for Host {
    fn is_instance_of(&self, object: &ObjectRef, class: &ClassName) -> bool {
        self.classes.is_instance_of(object, class)
    }
}

impl Invoker for Host {
    type Output = Value;
    type Error = HostError;

    fn invoke(&mut self, target: &Target, call: &Call) -> Result<Value, HostError> {
        Ok(self.targets.invoke(target, call)?)
    }
}
