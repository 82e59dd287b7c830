//! Core formula types for `wkrq`, a reasoning toolkit for a four-valued
//! paraconsistent logic.
//!
//! The logic tracks positive and negative evidence for every predicate
//! independently, which gives four truth values: true, false, both, and
//! neither. The syntactic consequence is the *bilateral* predicate: `P` and
//! its starred counterpart `P*` are separate atoms rather than boolean
//! complements. This crate defines the abstract syntax shared by the parser
//! and the proof-search layers:
//!
//!   - [`Term`] — variables and constants in predicate argument lists,
//!   - [`Predicate`] and [`BilateralPredicate`] — plain and bilateral atoms,
//!   - [`Formula`] — connectives and restricted quantifiers over those atoms.
//!
//! # Examples
//!
//! ```rust
//! use wkrq_core::{BilateralPredicate, Formula, Term};
//!
//! // [∀X Human(X)]Mortal(X): everything satisfying Human is Mortal.
//! let human = BilateralPredicate::positive("Human", vec![Term::variable("X")]);
//! let mortal = BilateralPredicate::positive("Mortal", vec![Term::variable("X")]);
//! let claim = Formula::forall("X", Formula::Bilateral(human), Formula::Bilateral(mortal));
//!
//! assert_eq!(claim.to_string(), "[∀X Human(X)]Mortal(X)");
//! ```

pub mod formula;
pub mod term;

pub use crate::formula::{BilateralPredicate, Formula, Predicate, RestrictedQuantifier};
pub use crate::term::Term;
