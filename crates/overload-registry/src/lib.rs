//! Registries backing a dispatch host.
//!
//! - [`ClassRegistry`]: class hierarchy answering "is this object an
//!   instance of class C, subclasses included?"
//! - [`TargetTable`]: native functions that matched rules redispatch to
//!
//! Both are populated once during setup and read-only afterwards. Neither is
//! internally synchronized; share them behind `Arc` once registration is done.

mod class_registry;
mod error;
mod target_table;

pub use class_registry::ClassRegistry;
pub use error::{NativeError, RegistrationError};
pub use target_table::{NativeCallable, NativeFn, TargetTable, arg};
