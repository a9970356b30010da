//! Translated Frege types

use std::borrow::Cow;
use std::fmt;

use crate::model::{OBJECT, VOID};
use crate::purity::Purity;

/// Parenthesize a type application so it can be used as an argument.
///
/// Text that is already parenthesized or has no spaces is returned as is.
pub fn parenthesize(text: &str) -> Cow<'_, str> {
    if !text.starts_with('(') && text.contains(' ') {
        Cow::Owned(format!("({})", text))
    } else {
        Cow::Borrowed(text)
    }
}

/// A Frege type expression together with its intrinsic purity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetType {
    /// Rendered type expression
    pub text: String,
    /// Binary name of the reflective class it came from (never rendered)
    pub source: String,
    /// Intrinsic purity of the type
    pub purity: Purity,
}

impl TargetType {
    /// Create a new target type
    pub fn new(text: impl Into<String>, source: impl Into<String>, purity: Purity) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            purity,
        }
    }

    /// `Object`, the fallback for anything unrecognized
    pub fn object() -> Self {
        Self::new("Object", OBJECT, Purity::Pure)
    }

    /// `()`, the placeholder parameter of nullary members
    pub fn unit() -> Self {
        Self::new("()", VOID, Purity::Pure)
    }

    /// Check if this type came from `void`
    pub fn is_void(&self) -> bool {
        self.source == VOID
    }

    /// Same source and purity, different text
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: self.source.clone(),
            purity: self.purity,
        }
    }

    /// Text ready to be used as a type argument
    pub fn parenthesized(&self) -> Cow<'_, str> {
        parenthesize(&self.text)
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
