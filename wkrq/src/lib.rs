//! Formula types and parsing for **wkrq**, a reasoning toolkit for a
//! four-valued paraconsistent predicate logic.
//!
//! In this logic every predicate `P` carries two independent assertions:
//! positive evidence `P(x)` and negative evidence `P*(x)`. Because the two
//! are tracked separately, a statement and its negation can both hold (a
//! *glut*) or both fail (a *gap*) without trivializing the theory — the four
//! truth values are true, false, both, and neither. The syntax of this
//! *bilateral* representation is what this crate parses and models:
//!
//! ```text
//! ¬Tall(x)            negation notation for the starred atom (transparent mode)
//! Tall*(x)            explicit star notation (bilateral mode)
//! [∀X Human(X)]Mortal(X)    restricted universal quantification
//! ```
//!
//! # Examples
//!
//! Parsing is mode-dependent: the [`SyntaxMode`] decides which of the two
//! bilateral notations is legal input and how it is normalized.
//!
//! ```rust
//! use wkrq::{parse_acrq_formula, BilateralPredicate, Formula, SyntaxMode, Term};
//!
//! // Transparent mode translates ¬P(a) into the starred atom P*(a).
//! let formula = parse_acrq_formula("¬Tall(a)", SyntaxMode::Transparent).unwrap();
//! let expected = BilateralPredicate::negative("Tall", vec![Term::constant("a")]);
//!
//! assert_eq!(formula, Formula::Bilateral(expected));
//!
//! // Bilateral mode rejects the negation notation with an explanation.
//! assert!(parse_acrq_formula("¬Tall(a)", SyntaxMode::Bilateral).is_err());
//! ```
//!
//! Formulas can also be built directly from the types in [`wkrq_core`],
//! re-exported here:
//!
//! ```rust
//! use wkrq::{Formula, BilateralPredicate, Term};
//!
//! let rain = BilateralPredicate::positive("Rain", Vec::new());
//! let claim = Formula::negation(Formula::Bilateral(rain));
//!
//! assert_eq!(claim.to_string(), "¬Rain");
//! ```

pub use wkrq_core::{BilateralPredicate, Formula, Predicate, RestrictedQuantifier, Term};

#[cfg(feature = "parser")]
pub use wkrq_parser::{
    parse_acrq_formula, parse_formula, rewrite_to_bilateral, ParseError, SyntaxMode,
};
