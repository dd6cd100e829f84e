//! First-match overload dispatch for dynamically-typed calls.
//!
//! An overloaded function is a single entry point backed by an ordered list
//! of rules. Each rule pairs a guard (a prototype of expected argument kinds
//! plus an arity policy, or one of the special `void` / `any` guards) with
//! the target to redispatch to. The first rule whose guard accepts the call
//! wins; when none does, the call fails with a diagnostic listing every
//! candidate signature and the kinds actually passed.
//!
//! ## Architecture
//!
//! - **Classification**: [`ArgumentClassifier`] asks the host whether a value
//!   looks numeric, what class an object belongs to, and what to call a value
//!   in diagnostics
//! - **Matching**: [`PrototypeMatcher`] checks one prototype against one call
//! - **Resolution**: [`DispatchResolver`] walks a rule list in order;
//!   [`dispatch`] redispatches to the winner through the host's [`Invoker`]
//! - **Reporting**: [`ErrorReporter`] renders the "no matching overload"
//!   diagnostic as a [`DispatchError`]
//!
//! ## Modules
//!
//! - [`call_site`]: [`CallSite`] and its builder, the usual entry point
//! - [`host`]: the [`Introspect`] / [`Invoker`] seams and the reference [`Host`]
//! - [`matcher`]: prototype matching and [`Arity`] policies
//! - [`report`]: diagnostics
//! - [`resolver`]: first-match resolution
//! - [`rule`]: [`MatchRule`]
//!
//! ## Example
//!
//! ```
//! use overload::{Call, Host, NativeError, Value, overload_rules};
//!
//! let mut host = Host::new();
//! host.classes.derive("Wx::Frame", "Wx::Window").unwrap();
//! host.targets
//!     .register("SetParentWindow", |_: &Call| -> Result<Value, NativeError> {
//!         Ok(Value::str("window"))
//!     })
//!     .unwrap();
//! host.targets
//!     .register("SetParentId", |_: &Call| -> Result<Value, NativeError> {
//!         Ok(Value::str("id"))
//!     })
//!     .unwrap();
//!
//! let site = overload_rules!("SetParent" => {
//!     exact ["Wx::Window"] => "SetParentWindow",
//!     exact [number] => "SetParentId",
//! })
//! .unwrap();
//!
//! let call = site.call(vec![Value::object("Wx::Dialog"), Value::object("Wx::Frame")]);
//! assert_eq!(site.dispatch(&mut host, &call), Ok(Value::str("window")));
//!
//! let call = site.call(vec![Value::object("Wx::Dialog"), Value::Int(42)]);
//! assert_eq!(site.dispatch(&mut host, &call), Ok(Value::str("id")));
//!
//! let call = site.call(vec![Value::object("Wx::Dialog"), Value::str("frame")]);
//! let err = site.dispatch(&mut host, &call).unwrap_err();
//! assert!(err.to_string().ends_with("unable to resolve overload for SetParent(scalar)"));
//! ```

mod classify;
mod macros;

pub mod call_site;
pub mod host;
pub mod matcher;
pub mod report;
pub mod resolver;
pub mod rule;

pub use call_site::{CallSite, CallSiteBuilder};
pub use classify::{ArgumentClassifier, observe};
pub use host::{Host, HostError, Introspect, Invoker};
pub use matcher::{Arity, PrototypeMatcher};
pub use report::{ErrorReporter, HEADER};
pub use resolver::{DispatchResolver, Resolution, dispatch};
pub use rule::MatchRule;

pub use overload_core::{
    ArgumentKind, Call, ClassName, DispatchError, GlobRef, KindError, ObjectRef, ObservedKind,
    Prototype, Target, Value, ValueKind, looks_like_number, str_looks_like_number,
};
pub use overload_registry::{
    ClassRegistry, NativeCallable, NativeError, NativeFn, RegistrationError, TargetTable, arg,
};
