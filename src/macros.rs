//! Declarative call-site construction.

/// Build a [`CallSite`](crate::CallSite) from a rule table.
///
/// Rules are listed in evaluation order. Argument kinds are the bare words
/// `array`, `bool`/`boolean`, `number` and `string`/`scalar`; any string
/// literal is a class name. The optional count after `exact` / `at_least`
/// overrides the number of arguments the prototype declares.
///
/// Evaluates to `Result<CallSite, KindError>`.
///
/// ```
/// use overload::overload_rules;
///
/// let site = overload_rules!("SetSize" => {
///     void => "SetDefaultSize",
///     exact [number, number] => "SetSizeWH",
///     exact ["Wx::Size"] => "SetSizeSize",
///     at_least 1 [number] => "SetSizeVariadic",
/// })
/// .unwrap();
///
/// assert_eq!(site.rules().len(), 4);
/// assert_eq!(site.signatures().count(), 4);
/// ```
#[macro_export]
macro_rules! overload_rules {
    ($function:expr => { $($body:tt)* }) => {
        (|| -> ::core::result::Result<$crate::CallSite, $crate::KindError> {
            let builder = $crate::CallSite::builder($function);
            $crate::__overload_rules!(builder; $($body)*)
        })()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __overload_rules {
    ($b:ident;) => {
        ::core::result::Result::Ok($b.build())
    };
    ($b:ident; void => $target:expr $(, $($rest:tt)*)?) => {{
        let $b = $b.void($target);
        $crate::__overload_rules!($b; $($($rest)*)?)
    }};
    ($b:ident; any => $target:expr $(, $($rest:tt)*)?) => {{
        let $b = $b.any($target);
        $crate::__overload_rules!($b; $($($rest)*)?)
    }};
    ($b:ident; exact [$($kind:tt),* $(,)?] => $target:expr $(, $($rest:tt)*)?) => {{
        let prototype = $crate::__overload_prototype!($($kind),*);
        let $b = $b.exact_declared(prototype, $target);
        $crate::__overload_rules!($b; $($($rest)*)?)
    }};
    ($b:ident; exact $n:literal [$($kind:tt),* $(,)?] => $target:expr $(, $($rest:tt)*)?) => {{
        let prototype = $crate::__overload_prototype!($($kind),*);
        let $b = $b.exact(prototype, $target, $n);
        $crate::__overload_rules!($b; $($($rest)*)?)
    }};
    ($b:ident; at_least [$($kind:tt),* $(,)?] => $target:expr $(, $($rest:tt)*)?) => {{
        let prototype = $crate::__overload_prototype!($($kind),*);
        let required = prototype.count();
        let $b = $b.at_least(prototype, $target, required);
        $crate::__overload_rules!($b; $($($rest)*)?)
    }};
    ($b:ident; at_least $n:literal [$($kind:tt),* $(,)?] => $target:expr $(, $($rest:tt)*)?) => {{
        let prototype = $crate::__overload_prototype!($($kind),*);
        let $b = $b.at_least(prototype, $target, $n);
        $crate::__overload_rules!($b; $($($rest)*)?)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __overload_prototype {
    ($($kind:tt),*) => {
        $crate::Prototype::new([$($crate::__overload_kind!($kind)?),*])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __overload_kind {
    (array) => {
        ::core::result::Result::<_, $crate::KindError>::Ok($crate::ArgumentKind::Array)
    };
    (bool) => {
        ::core::result::Result::<_, $crate::KindError>::Ok($crate::ArgumentKind::Bool)
    };
    (boolean) => {
        ::core::result::Result::<_, $crate::KindError>::Ok($crate::ArgumentKind::Bool)
    };
    (number) => {
        ::core::result::Result::<_, $crate::KindError>::Ok($crate::ArgumentKind::Number)
    };
    (string) => {
        ::core::result::Result::<_, $crate::KindError>::Ok($crate::ArgumentKind::String)
    };
    (scalar) => {
        ::core::result::Result::<_, $crate::KindError>::Ok($crate::ArgumentKind::String)
    };
    ($class:literal) => {
        $crate::ArgumentKind::class($class)
    };
}
