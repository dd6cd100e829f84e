//! Candidate signatures.

use std::fmt;
use std::str::FromStr;

use crate::ArgumentKind;
use crate::error::KindError;

/// One candidate signature: the kinds expected after the receiver.
///
/// The argument count is always `args().len()`; there is no way to build a
/// prototype whose count disagrees with its kinds.
///
/// # Examples
///
/// ```
/// use overload_core::{ArgumentKind, Prototype};
///
/// let proto: Prototype = "number, string, Wx::Window".parse().unwrap();
/// assert_eq!(proto.count(), 3);
/// assert_eq!(proto.args()[0], ArgumentKind::Number);
/// assert_eq!(proto.to_string(), "number, string/scalar, Wx::Window");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Prototype {
    args: Vec<ArgumentKind>,
}

impl Prototype {
    pub fn new(args: impl IntoIterator<Item = ArgumentKind>) -> Self {
        Self {
            args: args.into_iter().collect(),
        }
    }

    /// The prototype taking no arguments besides the receiver.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn args(&self) -> &[ArgumentKind] {
        &self.args
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.args.len()
    }

    /// Render as `function(word, word, ...)`.
    pub fn signature(&self, function: &str) -> String {
        format!("{function}({self})")
    }
}

impl FromIterator<ArgumentKind> for Prototype {
    fn from_iter<I: IntoIterator<Item = ArgumentKind>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(kind.word())?;
        }
        Ok(())
    }
}

/// Parses a comma-separated kind list. The empty (or all-blank) string is
/// the empty prototype; an empty entry between commas is an error.
impl FromStr for Prototype {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::empty());
        }

        s.split(',')
            .enumerate()
            .map(|(position, part)| {
                if part.trim().is_empty() {
                    Err(KindError::EmptyPrototypeEntry { position })
                } else {
                    part.parse()
                }
            })
            .collect()
    }
}
