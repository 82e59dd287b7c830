//! First-order terms appearing in predicate argument lists.
//!
//! The concrete syntax distinguishes terms purely by the case of their first
//! character: an identifier starting with an uppercase letter is a
//! [`Variable`](Term::Variable), anything else is a [`Constant`](Term::Constant).
//! [`Term::from_name`] applies that convention.

use std::fmt::{Display, Formatter};

/// A term in a predicate argument list: either a variable or a constant.
///
/// # Examples
///
/// ```rust
/// use wkrq_core::Term;
///
/// assert_eq!(Term::from_name("X"), Term::Variable("X".to_string()));
/// assert_eq!(Term::from_name("socrates"), Term::Constant("socrates".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Variable(String),
    Constant(String),
}

impl Term {
    /// Create a variable term.
    pub fn variable(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    /// Create a constant term.
    pub fn constant(name: impl Into<String>) -> Self {
        Term::Constant(name.into())
    }

    /// Classify a bare identifier as a variable or a constant by the case of
    /// its first character.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let uppercase = name.chars().next().map_or(false, char::is_uppercase);

        if uppercase {
            Term::Variable(name)
        } else {
            Term::Constant(name)
        }
    }

    /// The identifier of the term, regardless of its kind.
    pub fn name(&self) -> &str {
        match self {
            Term::Variable(name) | Term::Constant(name) => name,
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
