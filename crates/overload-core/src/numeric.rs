//! The default "looks numeric" predicate.
//!
//! Follows the host scripting language's numeric-literal grammar for
//! strings:
//!
//! ```text
//! ws* [+-]? ( digits ('.' digits?)? | '.' digits ) ([eE] [+-]? digits)? ws*
//! ws* [+-]? ( "inf" | "infinity" | "nan" ) ws*        (case-insensitive)
//! "0 but true"
//! ```
//!
//! Hosts with a different notion of "numeric" override
//! `Introspect::looks_numeric` instead of calling this.

use crate::Value;

/// Whether `value` would be accepted where a number is expected.
///
/// Numbers and booleans always are; strings are when they parse per the
/// grammar above. Undefined values, references, objects and handles never
/// are.
pub fn looks_like_number(value: &Value) -> bool {
    match value {
        Value::Int(_) | Value::Float(_) | Value::Bool(_) => true,
        Value::Str(s) => str_looks_like_number(s),
        _ => false,
    }
}

/// Whether the text `s` is a numeric literal.
pub fn str_looks_like_number(s: &str) -> bool {
    if s == "0 but true" {
        return true;
    }

    let s = s.trim_matches(|c: char| c.is_ascii_whitespace());
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    if s.is_empty() {
        return false;
    }

    if is_special_float(s) {
        return true;
    }

    let bytes = s.as_bytes();
    let mut pos = 0;

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn is_special_float(s: &str) -> bool {
    ["inf", "infinity", "nan"]
        .iter()
        .any(|word| s.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers_and_decimals() {
        for s in ["0", "42", "-7", "+3", "3.14", "1.", ".5", "-.5"] {
            assert!(str_looks_like_number(s), "{s:?} should be numeric");
        }
    }

    #[test]
    fn exponents() {
        assert!(str_looks_like_number("1e10"));
        assert!(str_looks_like_number("1.5E-3"));
        assert!(str_looks_like_number(".5e+2"));
        assert!(!str_looks_like_number("1e"));
        assert!(!str_looks_like_number("1e+"));
        assert!(!str_looks_like_number("e5"));
    }

    #[test]
    fn surrounding_whitespace_is_allowed() {
        assert!(str_looks_like_number("  12"));
        assert!(str_looks_like_number("12\n"));
        assert!(str_looks_like_number("\t-1.0 "));
    }

    #[test]
    fn special_values() {
        assert!(str_looks_like_number("Inf"));
        assert!(str_looks_like_number("-infinity"));
        assert!(str_looks_like_number("NaN"));
        assert!(str_looks_like_number("0 but true"));
        assert!(!str_looks_like_number("infinit"));
    }

    #[test]
    fn rejects_non_numbers() {
        let rejected = ["", " ", "+", "-", ".", "abc", "12abc"];
        let malformed = ["1_000", "0x10", "1 2", "1.2.3"];
        for s in rejected.into_iter().chain(malformed) {
            assert!(!str_looks_like_number(s), "{s:?} should not be numeric");
        }
    }

    #[test]
    fn value_kinds() {
        assert!(looks_like_number(&Value::Int(1)));
        assert!(looks_like_number(&Value::Float(f64::NAN)));
        assert!(looks_like_number(&Value::Bool(false)));
        assert!(looks_like_number(&Value::str("10")));
        assert!(!looks_like_number(&Value::str("ten")));
        assert!(!looks_like_number(&Value::Undefined));
        assert!(!looks_like_number(&Value::array([])));
        assert!(!looks_like_number(&Value::object("Foo")));
        assert!(!looks_like_number(&Value::glob("STDIN")));
    }
}
