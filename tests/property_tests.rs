//! Property-based tests for prototype matching and first-match resolution.
//!
//! Values are generated together with the kinds they satisfy, so every
//! property states what the matcher must conclude for any such pairing.

use overload::{
    ArgumentKind, Arity, Call, DispatchResolver, ErrorReporter, Host, MatchRule, Prototype,
    PrototypeMatcher, Resolution, Target, Value,
};
use proptest::prelude::*;

const CLASSES: [&str; 4] = ["Base", "Middle", "Leaf", "Unrelated"];

/// `Leaf -> Middle -> Base`; `Unrelated` stands alone.
fn host() -> Host {
    let mut host = Host::new();
    host.classes.derive("Leaf", "Middle").unwrap();
    host.classes.derive("Middle", "Base").unwrap();
    host.classes.register("Unrelated").unwrap();
    host
}

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Undefined),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e9..1.0e9f64).prop_map(Value::Float),
        "[a-z]{0,8}".prop_map(Value::Str),
        "-?[0-9]{1,6}(\\.[0-9]{1,3})?".prop_map(Value::Str),
        prop::sample::select(CLASSES.to_vec()).prop_map(Value::object),
        "[A-Z]{1,6}".prop_map(Value::glob),
        "[a-z]{1,6}".prop_map(Value::Code),
    ];
    leaf.prop_recursive(2, 8, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,3}", inner.clone()), 0..3).prop_map(Value::hash),
            inner.prop_map(|v| Value::Ref(Box::new(v))),
        ]
    })
}

fn class_kind(name: &str) -> ArgumentKind {
    ArgumentKind::class(name).unwrap()
}

fn kind_strategy() -> impl Strategy<Value = ArgumentKind> {
    prop_oneof![
        Just(ArgumentKind::Array),
        Just(ArgumentKind::Bool),
        Just(ArgumentKind::Number),
        Just(ArgumentKind::String),
        prop::sample::select(CLASSES.to_vec()).prop_map(class_kind),
    ]
}

/// A value guaranteed to satisfy `kind` under [`host`].
fn satisfying(kind: &ArgumentKind) -> BoxedStrategy<Value> {
    match kind {
        ArgumentKind::Array => prop::collection::vec(any::<i64>().prop_map(Value::Int), 0..4)
            .prop_map(Value::Array)
            .boxed(),
        ArgumentKind::Bool | ArgumentKind::String => value_strategy().boxed(),
        ArgumentKind::Number => prop_oneof![
            any::<i64>().prop_map(Value::Int),
            "[+-]?[0-9]{1,6}".prop_map(Value::Str),
        ]
        .boxed(),
        ArgumentKind::Class(name) => {
            let subclasses: Vec<&'static str> = match name.as_str() {
                "Base" => vec!["Base", "Middle", "Leaf"],
                "Middle" => vec!["Middle", "Leaf"],
                "Leaf" => vec!["Leaf"],
                _ => vec!["Unrelated"],
            };
            prop_oneof![
                Just(Value::Undefined),
                prop::sample::select(subclasses).prop_map(Value::object),
            ]
            .boxed()
        }
    }
}

/// A prototype plus arguments that satisfy it position by position.
fn matching_case() -> impl Strategy<Value = (Prototype, Vec<Value>)> {
    prop::collection::vec(kind_strategy(), 0..5).prop_flat_map(|kinds| {
        let values: Vec<_> = kinds.iter().map(satisfying).collect();
        (Just(Prototype::new(kinds)), values)
    })
}

fn method_call(args: Vec<Value>) -> Call {
    Call::method(Value::object("Receiver"), args)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_satisfying_arguments_match(
        (proto, args) in matching_case(),
        extra in prop::collection::vec(value_strategy(), 0..3),
    ) {
        let host = host();
        let matcher = PrototypeMatcher::new(&host);
        let count = proto.count();

        prop_assert!(matcher.matches(&proto, &method_call(args.clone()), Arity::Exact(count)));
        prop_assert!(matcher.matches(&proto, &method_call(args.clone()), Arity::Declared));

        // Trailing arguments are never classified.
        let mut longer = args;
        longer.extend(extra);
        prop_assert!(matcher.matches(&proto, &method_call(longer), Arity::AtLeast(count)));
    }

    #[test]
    fn prop_exact_rejects_other_counts(
        (proto, args) in matching_case(),
        required in 0usize..8,
    ) {
        prop_assume!(required != args.len());
        let host = host();
        let matcher = PrototypeMatcher::new(&host);
        prop_assert!(!matcher.matches(&proto, &method_call(args), Arity::Exact(required)));
    }

    #[test]
    fn prop_bool_and_string_accept_everything(value in value_strategy()) {
        let host = host();
        let matcher = PrototypeMatcher::new(&host);
        prop_assert!(matcher.accepts(&ArgumentKind::Bool, &value));
        prop_assert!(matcher.accepts(&ArgumentKind::String, &value));
    }

    #[test]
    fn prop_number_follows_looks_numeric(value in value_strategy()) {
        let host = host();
        let matcher = PrototypeMatcher::new(&host);
        prop_assert_eq!(
            matcher.accepts(&ArgumentKind::Number, &value),
            overload::looks_like_number(&value)
        );
    }

    #[test]
    fn prop_class_kind_rejects_non_objects(
        value in value_strategy(),
        class in prop::sample::select(CLASSES.to_vec()),
    ) {
        let host = host();
        let matcher = PrototypeMatcher::new(&host);
        let kind = class_kind(class);
        let accepted = matcher.accepts(&kind, &value);
        match &value {
            Value::Undefined => prop_assert!(accepted),
            Value::Object(_) => {}
            _ => prop_assert!(!accepted),
        }
    }

    #[test]
    fn prop_first_accepting_rule_wins(
        (proto, args) in matching_case(),
        misses in prop::collection::vec(prop::collection::vec(kind_strategy(), 0..3), 0..5),
        later in 0usize..3,
    ) {
        let host = host();
        let argc = args.len();
        let call = method_call(args);

        // Every rule before the hit demands one argument more than the call has.
        let mut rules: Vec<MatchRule> = misses
            .into_iter()
            .enumerate()
            .map(|(i, kinds)| {
                MatchRule::exact(Prototype::new(kinds), format!("miss{i}"), argc + 1)
            })
            .collect();
        let hit = rules.len();
        rules.push(MatchRule::exact(proto, "hit", argc));
        // These accept the call too, but come too late.
        rules.extend((0..later).map(|i| MatchRule::any(format!("later{i}"))));

        let target = Target::new("hit");
        prop_assert_eq!(
            DispatchResolver::new(&host).resolve(&rules, &call),
            Resolution::Matched {
                index: hit,
                target: &target,
            }
        );
    }

    #[test]
    fn prop_report_lists_every_signature_and_argument(
        args in prop::collection::vec(value_strategy(), 0..5),
        protos in prop::collection::vec(
            prop::collection::vec(kind_strategy(), 0..3).prop_map(Prototype::new),
            0..4,
        ),
    ) {
        let host = host();
        let call = method_call(args.clone());
        let err = ErrorReporter::new(&host).report("F", &protos, &call);
        let lines: Vec<&str> = err.message().lines().collect();

        prop_assert_eq!(lines.len(), protos.len() + 2);
        prop_assert_eq!(lines[0], overload::HEADER);
        for (line, proto) in lines[1..].iter().zip(&protos) {
            prop_assert_eq!(*line, proto.signature("F"));
        }
        let overload::DispatchError::NoMatchingOverload { actual, .. } = &err;
        prop_assert_eq!(actual.len(), args.len());
    }
}
