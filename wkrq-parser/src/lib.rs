//! Parse bilateral predicate logic formulas from strings into wkrq
//! [`Formula`] values.
//!
//! # Testing
//!
//! Run the parser tests from the workspace root:
//!
//! ```bash
//! cargo test -p wkrq-parser
//! ```
//!
//! # Parsing strings into formulas
//!
//! - **ACrQ formulas** (bilateral predicates, mode-dependent `P*` / `~P`
//!   notation): use [`parse_acrq_formula`] with a [`SyntaxMode`].
//! - **Plain first-order formulas** (no bilateral handling, used for
//!   quantifier restriction clauses): use [`parse_formula`].
//!
//! Both accept the Unicode connective spellings (`¬`, `∧`, `∨`, `→`, `∀`,
//! `∃`) and their ASCII aliases (`~`, `&`, `|`, `->`, `forall`, `exists`).
//!
//! ```rust
//! use wkrq_parser::{parse_acrq_formula, SyntaxMode};
//!
//! let formula = parse_acrq_formula("[∀X Human(X)]Mortal(X)", SyntaxMode::Transparent);
//! assert!(formula.is_ok());
//! ```

mod parser;

// Re-export core types so the parser can be used on its own.
pub use wkrq_core::{BilateralPredicate, Formula, Predicate, RestrictedQuantifier, Term};

pub use parser::{parse_acrq_formula, parse_formula, rewrite_to_bilateral, ParseError, SyntaxMode};
