//! "No matching overload" diagnostics.
//!
//! The message lists every candidate signature, one per line, and then the
//! kinds of the arguments actually passed:
//!
//! ```text
//! Available methods:
//! SetSize(number, number)
//! SetSize(Wx::Size)
//! unable to resolve overload for SetSize(hash, undef)
//! ```

use overload_core::{Call, DispatchError, Prototype};

use crate::classify::ArgumentClassifier;
use crate::host::Introspect;

/// First line of every diagnostic.
pub const HEADER: &str = "Available methods:";

/// Renders the diagnostic for a call no rule accepted.
pub struct ErrorReporter<'h, H: ?Sized> {
    classifier: ArgumentClassifier<'h, H>,
}

impl<'h, H: Introspect + ?Sized> ErrorReporter<'h, H> {
    pub fn new(host: &'h H) -> Self {
        Self {
            classifier: ArgumentClassifier::new(host),
        }
    }

    /// Build the error for `call` against the candidate `prototypes`.
    ///
    /// Only the explicit arguments are described; the receiver (and anything
    /// else before the call's offset) is left out.
    pub fn report<'p>(
        &self,
        function: &str,
        prototypes: impl IntoIterator<Item = &'p Prototype>,
        call: &Call,
    ) -> DispatchError {
        let candidates: Vec<String> = prototypes
            .into_iter()
            .map(|proto| proto.signature(function))
            .collect();

        let actual: Vec<String> = call
            .args()
            .iter()
            .map(|value| self.classifier.classify(value).word().to_string())
            .collect();

        let mut message = String::from(HEADER);
        message.push('\n');
        for line in &candidates {
            message.push_str(line);
            message.push('\n');
        }
        message.push_str(&format!(
            "unable to resolve overload for {function}({})",
            actual.join(", ")
        ));

        tracing::debug!(function, argc = actual.len(), "no overload matched");

        DispatchError::NoMatchingOverload {
            function: function.to_string(),
            candidates,
            actual,
            message,
        }
    }
}
