//! Match rules: a guard paired with a redispatch target.

use std::fmt;
use std::sync::Arc;

use overload_core::{Call, Prototype, Target};

use crate::host::Introspect;
use crate::matcher::{Arity, PrototypeMatcher};

/// One entry of a call site's ordered rule list.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchRule {
    /// Matches a call with no explicit arguments.
    Void { target: Target },
    /// Matches every call.
    Any { target: Target },
    /// Matches exactly `required` arguments fitting `prototype`.
    Exact {
        prototype: Arc<Prototype>,
        target: Target,
        required: usize,
    },
    /// Matches `required` or more arguments fitting `prototype`.
    AtLeast {
        prototype: Arc<Prototype>,
        target: Target,
        required: usize,
    },
}

impl MatchRule {
    pub fn void(target: impl Into<Target>) -> Self {
        MatchRule::Void {
            target: target.into(),
        }
    }

    pub fn any(target: impl Into<Target>) -> Self {
        MatchRule::Any {
            target: target.into(),
        }
    }

    pub fn exact(
        prototype: impl Into<Arc<Prototype>>,
        target: impl Into<Target>,
        required: usize,
    ) -> Self {
        MatchRule::Exact {
            prototype: prototype.into(),
            target: target.into(),
            required,
        }
    }

    pub fn at_least(
        prototype: impl Into<Arc<Prototype>>,
        target: impl Into<Target>,
        required: usize,
    ) -> Self {
        MatchRule::AtLeast {
            prototype: prototype.into(),
            target: target.into(),
            required,
        }
    }

    pub fn target(&self) -> &Target {
        match self {
            MatchRule::Void { target }
            | MatchRule::Any { target }
            | MatchRule::Exact { target, .. }
            | MatchRule::AtLeast { target, .. } => target,
        }
    }

    /// The prototype checked by this rule, if it checks one.
    pub fn prototype(&self) -> Option<&Arc<Prototype>> {
        match self {
            MatchRule::Exact { prototype, .. } | MatchRule::AtLeast { prototype, .. } => {
                Some(prototype)
            }
            MatchRule::Void { .. } | MatchRule::Any { .. } => None,
        }
    }

    /// The arity policy of a prototype rule.
    pub fn arity(&self) -> Option<Arity> {
        match self {
            MatchRule::Exact { required, .. } => Some(Arity::Exact(*required)),
            MatchRule::AtLeast { required, .. } => Some(Arity::AtLeast(*required)),
            MatchRule::Void { .. } | MatchRule::Any { .. } => None,
        }
    }

    /// Whether this rule's guard accepts `call`.
    pub fn accepts<H: Introspect + ?Sized>(
        &self,
        matcher: &PrototypeMatcher<'_, H>,
        call: &Call,
    ) -> bool {
        match self {
            MatchRule::Void { .. } => call.argc() == Some(0),
            MatchRule::Any { .. } => true,
            MatchRule::Exact {
                prototype,
                required,
                ..
            } => matcher.matches(prototype, call, Arity::Exact(*required)),
            MatchRule::AtLeast {
                prototype,
                required,
                ..
            } => matcher.matches(prototype, call, Arity::AtLeast(*required)),
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchRule::Void { target } => write!(f, "void => {target}"),
            MatchRule::Any { target } => write!(f, "any => {target}"),
            MatchRule::Exact {
                prototype,
                target,
                required,
            } => write!(f, "exact {required} [{prototype}] => {target}"),
            MatchRule::AtLeast {
                prototype,
                target,
                required,
            } => write!(f, "at_least {required} [{prototype}] => {target}"),
        }
    }
}
