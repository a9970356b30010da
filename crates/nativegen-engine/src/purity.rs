//! Effect levels
//!
//! `Pure < St < Io`. A signature's level is the join of its types' intrinsic
//! levels and the structural rules in [`crate::classify`].

use std::fmt;

/// Effect level of a type or a member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Purity {
    /// No observable effect
    #[default]
    Pure,
    /// Mutation scoped to an `ST s` region
    St,
    /// Unscoped effect: global state, I/O
    Io,
}

impl Purity {
    /// Check if this is the `Pure` level
    pub fn is_pure(self) -> bool {
        self == Purity::Pure
    }

    /// Least upper bound of two levels
    pub fn join(self, other: Purity) -> Purity {
        self.max(other)
    }

    /// Parse a `pure` / `st` / `io` token, ignoring case
    pub fn from_token(token: &str) -> Option<Purity> {
        match token.to_ascii_lowercase().as_str() {
            "pure" => Some(Purity::Pure),
            "st" => Some(Purity::St),
            "io" => Some(Purity::Io),
            _ => None,
        }
    }

    /// Handle constructor for intrinsically mutable parameters
    pub fn mutable_param(self) -> Option<&'static str> {
        match self {
            Purity::Pure => None,
            Purity::St => Some("Mutable s"),
            Purity::Io => Some("MutableIO"),
        }
    }

    /// Computation constructor returning an intrinsically mutable value
    pub fn mutable_return(self) -> Option<&'static str> {
        match self {
            Purity::Pure => None,
            Purity::St => Some("STMutable s"),
            Purity::Io => Some("IOMutable"),
        }
    }

    /// Computation constructor returning an ordinary value
    pub fn effect_return(self) -> Option<&'static str> {
        match self {
            Purity::Pure => None,
            Purity::St => Some("ST s"),
            Purity::Io => Some("IO"),
        }
    }
}

impl fmt::Display for Purity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Purity::Pure => write!(f, "pure"),
            Purity::St => write!(f, "st"),
            Purity::Io => write!(f, "io"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Purity::Pure < Purity::St);
        assert!(Purity::St < Purity::Io);
        assert_eq!(Purity::Pure.join(Purity::Io), Purity::Io);
        assert_eq!(Purity::St.join(Purity::Pure), Purity::St);
    }

    #[test]
    fn test_from_token() {
        assert_eq!(Purity::from_token("PURE"), Some(Purity::Pure));
        assert_eq!(Purity::from_token("St"), Some(Purity::St));
        assert_eq!(Purity::from_token("io"), Some(Purity::Io));
        assert_eq!(Purity::from_token("mutable"), None);
        assert_eq!(Purity::from_token(""), None);
    }

    #[test]
    fn test_wrappers() {
        assert_eq!(Purity::Pure.mutable_param(), None);
        assert_eq!(Purity::St.mutable_param(), Some("Mutable s"));
        assert_eq!(Purity::Io.mutable_return(), Some("IOMutable"));
        assert_eq!(Purity::St.effect_return(), Some("ST s"));
    }
}
