//! Overloaded call sites.
//!
//! A [`CallSite`] bundles everything one overloaded function needs: its name,
//! its ordered rule list, the signatures listed when nothing matches, and the
//! offset of the first explicit argument. Build one at setup time with
//! [`CallSite::builder`], then share it freely; a call site is immutable and
//! `Send + Sync`.

use std::sync::Arc;

use overload_core::{Call, DispatchError, Prototype, Target, Value};

use crate::host::{Introspect, Invoker};
use crate::report::ErrorReporter;
use crate::resolver::{self, DispatchResolver, Resolution};
use crate::rule::MatchRule;

/// One overloaded function and its dispatch rules.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSite {
    function: String,
    rules: Vec<MatchRule>,
    signatures: Vec<Arc<Prototype>>,
    offset: usize,
}

impl CallSite {
    /// Start building the call site for `function`.
    pub fn builder(function: impl Into<String>) -> CallSiteBuilder {
        CallSiteBuilder::new(function)
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }

    /// The signatures listed by the "no matching overload" diagnostic.
    pub fn signatures(&self) -> impl Iterator<Item = &Prototype> {
        self.signatures.iter().map(|proto| proto.as_ref())
    }

    /// Number of implicit leading values (1 for methods).
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Wrap raw values as a call using this site's offset.
    pub fn call(&self, values: Vec<Value>) -> Call {
        Call::new(values, self.offset)
    }

    /// Find the rule accepting `call` without invoking anything.
    pub fn resolve<'s, H: Introspect + ?Sized>(&'s self, host: &H, call: &Call) -> Resolution<'s> {
        DispatchResolver::new(host).resolve(&self.rules, call)
    }

    /// Resolve `call` and invoke the chosen target on `host`.
    pub fn dispatch<H>(&self, host: &mut H, call: &Call) -> Result<H::Output, H::Error>
    where
        H: Introspect + Invoker,
    {
        resolver::dispatch(host, &self.function, &self.rules, self.signatures(), call)
    }

    /// The diagnostic this site produces for `call`.
    pub fn report<H: Introspect + ?Sized>(&self, host: &H, call: &Call) -> DispatchError {
        ErrorReporter::new(host).report(&self.function, self.signatures(), call)
    }
}

/// Builder for [`CallSite`].
#[derive(Debug, Clone)]
pub struct CallSiteBuilder {
    function: String,
    rules: Vec<MatchRule>,
    signatures: Option<Vec<Arc<Prototype>>>,
    offset: usize,
}

impl CallSiteBuilder {
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            rules: Vec::new(),
            signatures: None,
            offset: 1,
        }
    }

    /// Match calls with no explicit arguments.
    pub fn void(self, target: impl Into<Target>) -> Self {
        self.rule(MatchRule::void(target))
    }

    /// Match every call. Rules added after this one are unreachable.
    pub fn any(self, target: impl Into<Target>) -> Self {
        self.rule(MatchRule::any(target))
    }

    /// Match exactly `required` arguments against `prototype`.
    pub fn exact(
        self,
        prototype: impl Into<Arc<Prototype>>,
        target: impl Into<Target>,
        required: usize,
    ) -> Self {
        self.rule(MatchRule::exact(prototype, target, required))
    }

    /// Match exactly as many arguments as `prototype` declares.
    pub fn exact_declared(
        self,
        prototype: impl Into<Arc<Prototype>>,
        target: impl Into<Target>,
    ) -> Self {
        let prototype: Arc<Prototype> = prototype.into();
        let required = prototype.count();
        self.rule(MatchRule::exact(prototype, target, required))
    }

    /// Match `required` or more arguments against `prototype`.
    pub fn at_least(
        self,
        prototype: impl Into<Arc<Prototype>>,
        target: impl Into<Target>,
        required: usize,
    ) -> Self {
        self.rule(MatchRule::at_least(prototype, target, required))
    }

    /// Append an already-built rule.
    pub fn rule(mut self, rule: MatchRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Number of implicit leading values; defaults to 1 (the receiver).
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Replace the signatures listed in diagnostics.
    ///
    /// By default they are derived from the rules.
    pub fn signatures<P>(mut self, signatures: impl IntoIterator<Item = P>) -> Self
    where
        P: Into<Arc<Prototype>>,
    {
        self.signatures = Some(signatures.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> CallSite {
        let signatures = match self.signatures {
            Some(signatures) => signatures,
            None => default_signatures(&self.rules),
        };

        tracing::debug!(
            function = %self.function,
            rules = self.rules.len(),
            signatures = signatures.len(),
            "built overload call site"
        );

        CallSite {
            function: self.function,
            rules: self.rules,
            signatures,
            offset: self.offset,
        }
    }
}

/// One signature per distinct prototype, in rule order.
///
/// A void rule contributes the empty prototype; `Any` contributes nothing.
fn default_signatures(rules: &[MatchRule]) -> Vec<Arc<Prototype>> {
    let mut signatures: Vec<Arc<Prototype>> = Vec::new();
    for rule in rules {
        let proto = match rule {
            MatchRule::Void { .. } => Arc::new(Prototype::empty()),
            MatchRule::Exact { prototype, .. } | MatchRule::AtLeast { prototype, .. } => {
                Arc::clone(prototype)
            }
            MatchRule::Any { .. } => continue,
        };
        if !signatures.iter().any(|seen| **seen == *proto) {
            signatures.push(proto);
        }
    }
    signatures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Host;
    use overload_core::ArgumentKind;

    fn proto(kinds: &str) -> Prototype {
        kinds.parse().unwrap()
    }

    fn signature_lines(site: &CallSite) -> Vec<String> {
        site.signatures()
            .map(|proto| proto.signature(site.function()))
            .collect()
    }

    #[test]
    fn call_site_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CallSite>();
    }

    #[test]
    fn default_signatures_follow_rule_order() {
        let site = CallSite::builder("SetSize")
            .void("SetDefaultSize")
            .exact(proto("number, number"), "SetSizeWH", 2)
            .exact(proto("Wx::Size"), "SetSizeSize", 1)
            .at_least(proto("number, number"), "SetSizeMore", 2)
            .any("SetSizeAny")
            .build();

        assert_eq!(
            signature_lines(&site),
            ["SetSize()", "SetSize(number, number)", "SetSize(Wx::Size)"]
        );
        assert_eq!(site.rules().len(), 5);
        assert_eq!(site.offset(), 1);
    }

    #[test]
    fn explicit_signatures_override_defaults() {
        let site = CallSite::builder("Draw")
            .any("DrawAny")
            .signatures([proto("Wx::Point"), proto("number, number")])
            .build();
        assert_eq!(
            signature_lines(&site),
            ["Draw(Wx::Point)", "Draw(number, number)"]
        );
    }

    #[test]
    fn exact_declared_uses_prototype_count() {
        let site = CallSite::builder("Move")
            .exact_declared(proto("number, number"), "MoveXY")
            .build();
        assert_eq!(
            site.rules()[0],
            MatchRule::exact(proto("number, number"), "MoveXY", 2)
        );
    }

    #[test]
    fn builder_accepts_owned_targets() {
        let fallback = String::from("Fallback");
        let site = CallSite::builder("Lookup")
            .exact(proto("number"), Target::new("LookupIndex"), 1)
            .void(format!("{fallback}0"))
            .any(fallback + "1")
            .build();

        assert_eq!(site.rules()[0].target(), &Target::new("LookupIndex"));
        assert_eq!(site.rules()[1], MatchRule::void("Fallback0"));
        assert_eq!(site.rules()[2], MatchRule::any("Fallback1"));
    }

    #[test]
    fn offset_applies_to_calls() {
        let site = CallSite::builder("abs")
            .offset(0)
            .exact(Prototype::new([ArgumentKind::Number]), "abs_num", 1)
            .build();
        let host = Host::new();

        let call = site.call(vec![Value::Int(-3)]);
        assert_eq!(call.argc(), Some(1));
        assert_eq!(
            site.resolve(&host, &call).target().map(|t| t.name()),
            Some("abs_num")
        );
    }

    #[test]
    fn report_uses_site_signatures() {
        let site = CallSite::builder("SetLabel")
            .exact(proto("string"), "SetLabelStr", 1)
            .build();
        let host = Host::new();
        let call = site.call(vec![Value::object("Wx::Button")]);

        let err = site.report(&host, &call);
        assert_eq!(
            err.message(),
            "Available methods:\nSetLabel(string/scalar)\nunable to resolve overload for SetLabel()"
        );
    }
}
