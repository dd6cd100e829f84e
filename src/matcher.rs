//! Prototype matching.
//!
//! This module decides whether one prototype accepts one call. It is a
//! structural check that rejects on the first failure:
//!
//! 1. Check the explicit argument count against the arity policy
//! 2. Check each position covered by both the prototype and the call
//!    against the declared kind, stopping at the first mismatch
//!
//! There is no scoring and no "closest" prototype. Arguments past the end of
//! the prototype (allowed by [`Arity::AtLeast`] or [`Arity::Declared`]) are
//! never looked at.

use overload_core::{ArgumentKind, Call, Prototype, Value};

use crate::classify::ArgumentClassifier;
use crate::host::Introspect;

/// Arity policy for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// No override: at least as many arguments as the prototype declares.
    Declared,
    /// Exactly this many arguments.
    Exact(usize),
    /// At least this many arguments.
    AtLeast(usize),
}

impl Arity {
    /// Build a policy from an optional required-count override.
    ///
    /// Without an override `allow_more` is irrelevant: the prototype's own
    /// count is a lower bound.
    pub fn from_override(required: Option<usize>, allow_more: bool) -> Self {
        match required {
            None => Arity::Declared,
            Some(n) if allow_more => Arity::AtLeast(n),
            Some(n) => Arity::Exact(n),
        }
    }

    /// Whether `argc` explicit arguments satisfy this policy for a prototype
    /// declaring `declared` kinds.
    #[inline]
    pub fn accepts(self, argc: usize, declared: usize) -> bool {
        match self {
            Arity::Declared => argc >= declared,
            Arity::Exact(n) => argc == n,
            Arity::AtLeast(n) => argc >= n,
        }
    }
}

/// Tests prototypes against calls.
pub struct PrototypeMatcher<'h, H: ?Sized> {
    classifier: ArgumentClassifier<'h, H>,
}

impl<H: ?Sized> Clone for PrototypeMatcher<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: ?Sized> Copy for PrototypeMatcher<'_, H> {}

impl<'h, H: Introspect + ?Sized> PrototypeMatcher<'h, H> {
    pub fn new(host: &'h H) -> Self {
        Self {
            classifier: ArgumentClassifier::new(host),
        }
    }

    pub fn classifier(&self) -> ArgumentClassifier<'h, H> {
        self.classifier
    }

    /// Match `prototype` against `call`, skipping the call's own offset.
    pub fn matches(&self, prototype: &Prototype, call: &Call, arity: Arity) -> bool {
        self.matches_at(prototype, call.values(), call.offset(), arity)
    }

    /// Match against raw values whose first element is the receiver.
    pub fn matches_skip_receiver(
        &self,
        prototype: &Prototype,
        values: &[Value],
        arity: Arity,
    ) -> bool {
        self.matches_at(prototype, values, 1, arity)
    }

    /// Match against raw values, skipping the first `offset` of them.
    ///
    /// A value list shorter than `offset` never matches.
    pub fn matches_at(
        &self,
        prototype: &Prototype,
        values: &[Value],
        offset: usize,
        arity: Arity,
    ) -> bool {
        let Some(argc) = values.len().checked_sub(offset) else {
            return false;
        };

        if !arity.accepts(argc, prototype.count()) {
            return false;
        }

        prototype
            .args()
            .iter()
            .zip(&values[offset..])
            .all(|(kind, value)| self.accepts(kind, value))
    }

    /// Whether a single value satisfies a single declared kind.
    pub fn accepts(&self, kind: &ArgumentKind, value: &Value) -> bool {
        match kind {
            ArgumentKind::Bool | ArgumentKind::String => true,
            ArgumentKind::Number => self.classifier.looks_numeric(value),
            ArgumentKind::Array => value.is_array_ref(),
            ArgumentKind::Class(name) => {
                !value.is_handle()
                    && (value.is_undefined() || self.classifier.is_instance_of(value, name))
            }
        }
    }
}
