//! Core data model for first-match overload dispatch.
//!
//! This crate holds the types every other part of the workspace shares:
//!
//! - [`Value`] / [`ValueKind`]: dynamically-typed call arguments
//! - [`ArgumentKind`] / [`ClassName`]: what a prototype expects per position
//! - [`ObservedKind`]: what a diagnostic reports an argument to be
//! - [`Prototype`]: one candidate signature
//! - [`Call`] / [`Target`]: one invocation and the method it redispatches to
//! - [`looks_like_number`]: the default numeric-literal predicate
//! - [`DispatchError`] / [`KindError`]

mod call;
pub mod error;
mod kind;
mod numeric;
mod prototype;
mod value;

pub use call::{Call, Target};
pub use error::{DispatchError, KindError};
pub use kind::{ArgumentKind, ClassName, ObservedKind};
pub use numeric::{looks_like_number, str_looks_like_number};
pub use prototype::Prototype;
pub use value::{GlobRef, ObjectRef, Value, ValueKind};
