//! Argument classification.
//!
//! Two questions are asked about a single value: "does it look numeric?"
//! (used by matching) and "what is it?" (used only by diagnostics). Both go
//! through the host's [`Introspect`] implementation so hosts can override
//! either one.

use overload_core::{ClassName, ObservedKind, Value};

use crate::host::Introspect;

/// Classifies runtime values on behalf of the matcher and the reporter.
pub struct ArgumentClassifier<'h, H: ?Sized> {
    host: &'h H,
}

impl<H: ?Sized> Clone for ArgumentClassifier<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: ?Sized> Copy for ArgumentClassifier<'_, H> {}

impl<'h, H: Introspect + ?Sized> ArgumentClassifier<'h, H> {
    pub fn new(host: &'h H) -> Self {
        Self { host }
    }

    /// Diagnostic classification of `value`.
    #[inline]
    pub fn classify(&self, value: &Value) -> ObservedKind {
        self.host.classify(value)
    }

    #[inline]
    pub fn looks_numeric(&self, value: &Value) -> bool {
        self.host.looks_numeric(value)
    }

    /// Whether `value` is a blessed object whose class is `class` or derives from it.
    #[inline]
    pub fn is_instance_of(&self, value: &Value, class: &ClassName) -> bool {
        value
            .as_object()
            .is_some_and(|object| self.host.is_instance_of(object, class))
    }
}

/// Default diagnostic classification.
///
/// Checks run in a fixed order: undefined, blessed object, unblessed
/// reference (array, hash, anything else), handle, numeric-looking scalar,
/// and finally plain scalar.
pub fn observe(value: &Value, looks_numeric: impl Fn(&Value) -> bool) -> ObservedKind {
    match value {
        Value::Undefined => ObservedKind::Undefined,
        Value::Object(object) => ObservedKind::Object(object.class_name().to_string()),
        Value::Array(_) => ObservedKind::ArrayRef,
        Value::Hash(_) => ObservedKind::HashRef,
        Value::Ref(_) | Value::Code(_) => ObservedKind::OtherReference,
        Value::Glob(_) => ObservedKind::Handle,
        Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => {
            if looks_numeric(value) {
                ObservedKind::Number
            } else {
                ObservedKind::String
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Host;

    fn observe_default(value: &Value) -> ObservedKind {
        observe(value, overload_core::looks_like_number)
    }

    #[test]
    fn observes_every_value_shape() {
        assert_eq!(observe_default(&Value::Undefined), ObservedKind::Undefined);
        assert_eq!(
            observe_default(&Value::object("Wx::Brush")),
            ObservedKind::Object("Wx::Brush".into())
        );
        assert_eq!(observe_default(&Value::array([])), ObservedKind::ArrayRef);
        assert_eq!(
            observe_default(&Value::Hash(Default::default())),
            ObservedKind::HashRef
        );
        assert_eq!(
            observe_default(&Value::Ref(Box::new(Value::Int(1)))),
            ObservedKind::OtherReference
        );
        assert_eq!(
            observe_default(&Value::Code("main::cb".into())),
            ObservedKind::OtherReference
        );
        assert_eq!(
            observe_default(&Value::glob("STDERR")),
            ObservedKind::Handle
        );
        assert_eq!(observe_default(&Value::Float(2.5)), ObservedKind::Number);
        assert_eq!(observe_default(&Value::str("17")), ObservedKind::Number);
        assert_eq!(
            observe_default(&Value::str("seventeen")),
            ObservedKind::String
        );
    }

    #[test]
    fn numeric_predicate_is_not_consulted_for_references() {
        let observed = observe(&Value::array([Value::Int(1)]), |_| {
            panic!("references are classified structurally")
        });
        assert_eq!(observed, ObservedKind::ArrayRef);
    }

    #[test]
    fn classifier_instance_check() {
        let mut host = Host::new();
        host.classes.derive("Dog", "Animal").unwrap();
        let classifier = ArgumentClassifier::new(&host);
        let animal = ClassName::new("Animal").unwrap();

        assert!(classifier.is_instance_of(&Value::object("Dog"), &animal));
        assert!(!classifier.is_instance_of(&Value::object("Rock"), &animal));
        assert!(!classifier.is_instance_of(&Value::Undefined, &animal));
        assert!(!classifier.is_instance_of(&Value::str("Dog"), &animal));
    }
}
