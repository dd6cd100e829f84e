//! First-match dispatch resolution.
//!
//! ## Algorithm
//!
//! 1. Evaluate the rules in declaration order
//! 2. The first rule whose guard accepts the call wins; later rules are not
//!    evaluated
//! 3. If no rule accepts, report every candidate signature and fail the call
//!
//! Order is significant: a broad rule (`Any`, or a prototype of
//! boolean/string kinds) shadows everything declared after it.

use overload_core::{Call, Prototype, Target};

use crate::host::{Introspect, Invoker};
use crate::matcher::PrototypeMatcher;
use crate::report::ErrorReporter;
use crate::rule::MatchRule;

/// Outcome of evaluating a rule list against a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'r> {
    /// The rule at `index` accepted the call.
    Matched { index: usize, target: &'r Target },
    /// No rule accepted the call.
    Exhausted,
}

impl<'r> Resolution<'r> {
    pub fn target(&self) -> Option<&'r Target> {
        match self {
            Resolution::Matched { target, .. } => Some(target),
            Resolution::Exhausted => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched { .. })
    }
}

/// Evaluates ordered rule lists.
pub struct DispatchResolver<'h, H: ?Sized> {
    matcher: PrototypeMatcher<'h, H>,
}

impl<'h, H: Introspect + ?Sized> DispatchResolver<'h, H> {
    pub fn new(host: &'h H) -> Self {
        Self {
            matcher: PrototypeMatcher::new(host),
        }
    }

    /// Find the first rule accepting `call`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn resolve<'r>(&self, rules: &'r [MatchRule], call: &Call) -> Resolution<'r> {
        for (index, rule) in rules.iter().enumerate() {
            let accepted = rule.accepts(&self.matcher, call);
            tracing::trace!(index, %rule, accepted, "evaluated overload rule");
            if accepted {
                return Resolution::Matched {
                    index,
                    target: rule.target(),
                };
            }
        }
        Resolution::Exhausted
    }
}

/// Resolve `call` against `rules` and redispatch to the winning target.
///
/// The target receives the full original call, receiver included. When no
/// rule matches, the diagnostic built from `prototypes` is converted into the
/// host's error type and returned; no target runs.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn dispatch<'p, H>(
    host: &mut H,
    function: &str,
    rules: &[MatchRule],
    prototypes: impl IntoIterator<Item = &'p Prototype>,
    call: &Call,
) -> Result<H::Output, H::Error>
where
    H: Introspect + Invoker,
{
    let target = match DispatchResolver::new(&*host).resolve(rules, call) {
        Resolution::Matched { index, target } => {
            tracing::debug!(function, index, %target, "overload resolved");
            target.clone()
        }
        Resolution::Exhausted => {
            let error = ErrorReporter::new(&*host).report(function, prototypes, call);
            return Err(error.into());
        }
    };

    host.invoke(&target, call)
}
