//! Indentation styles for rendered code.

use std::fmt;

use serde::{Deserialize, Deserializer, de};

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Java, Kotlin).
    pub const FOUR_SPACES: Self = Self::Spaces(4);

    /// 2-space indentation (TypeScript, JavaScript).
    pub const TWO_SPACES: Self = Self::Spaces(2);

    /// Tab indentation (Go).
    pub const TAB: Self = Self::Tab;

    /// Widest space indentation accepted from configuration.
    pub const MAX_SPACES: u8 = 8;

    /// The string for one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(n) => " ".repeat(usize::from(*n)),
            Self::Tab => "\t".to_string(),
        }
    }

    /// The prefix for `level` indent levels.
    pub fn prefix(&self, level: usize) -> String {
        self.unit().repeat(level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR_SPACES
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces(1) => write!(f, "1 space"),
            Self::Spaces(n) => write!(f, "{} spaces", n),
            Self::Tab => write!(f, "tab"),
        }
    }
}

/// Accepts either a space count (`indent = 2`) or the string `"tab"`.
impl<'de> Deserialize<'de> for Indent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IndentVisitor;

        impl de::Visitor<'_> for IndentVisitor {
            type Value = Indent;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "a number of spaces between 1 and {} or \"tab\"",
                    Indent::MAX_SPACES
                )
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Indent, E> {
                match u8::try_from(v) {
                    Ok(n) if (1..=Indent::MAX_SPACES).contains(&n) => Ok(Indent::Spaces(n)),
                    _ => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
                }
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Indent, E> {
                match u8::try_from(v) {
                    Ok(n) if (1..=Indent::MAX_SPACES).contains(&n) => Ok(Indent::Spaces(n)),
                    _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Indent, E> {
                if v.eq_ignore_ascii_case("tab") {
                    Ok(Indent::Tab)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(IndentVisitor)
    }
}
