//! Formulas of bilateral predicate logic.
//!
//! In a four-valued paraconsistent logic a predicate `P` carries two
//! independent assertions: positive evidence `P` and negative evidence `P*`.
//! Because the two can hold (or fail) independently, `¬P(x)` is not a boolean
//! flip of `P(x)` — it is a distinct atom. The [`BilateralPredicate`] type
//! models that pair: the same predicate name with `is_negative` set to `true`
//! denotes the starred half, and the two halves are never normalized into each
//! other.
//!
//! Quantification is restricted: `[∀X R(X)]M(X)` reads "for every `X`
//! satisfying the restriction `R`, the matrix `M` holds". Both quantifier
//! variants share the [`RestrictedQuantifier`] payload.
//!
//! Formula values are immutable once built. Construct them with the helper
//! constructors and inspect them by matching on the enum:
//!
//! ```rust
//! use wkrq_core::{BilateralPredicate, Formula, Term};
//!
//! let tall = BilateralPredicate::positive("Tall", vec![Term::variable("X")]);
//! let formula = Formula::negation(Formula::Bilateral(tall));
//!
//! assert_eq!(formula.to_string(), "¬Tall(X)");
//! ```

use std::fmt::{Display, Formatter};

use crate::term::Term;

/// A plain, non-bilateral predicate application such as `Tall(X)`.
///
/// Plain predicates only appear transiently: the ACrQ parser rewrites every
/// one of them into a [`BilateralPredicate`] before returning a result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Predicate {
    pub name: String,
    pub terms: Vec<Term>,
}

impl Predicate {
    pub fn new(name: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            terms,
        }
    }
}

/// One half of a bilateral predicate pair.
///
/// `is_negative = false` asserts `name(terms)`, while `is_negative = true`
/// asserts the paired negative-evidence predicate `name*(terms)`. The two are
/// semantically independent atoms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BilateralPredicate {
    pub name: String,
    pub terms: Vec<Term>,
    pub is_negative: bool,
}

impl BilateralPredicate {
    /// The positive-evidence half, `name(terms)`.
    pub fn positive(name: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            terms,
            is_negative: false,
        }
    }

    /// The negative-evidence half, `name*(terms)`.
    pub fn negative(name: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            terms,
            is_negative: true,
        }
    }
}

/// The shared payload of both restricted quantifier variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RestrictedQuantifier {
    pub variable: String,
    pub restriction: Box<Formula>,
    pub matrix: Box<Formula>,
}

impl RestrictedQuantifier {
    pub fn new(variable: impl Into<String>, restriction: Formula, matrix: Formula) -> Self {
        Self {
            variable: variable.into(),
            restriction: Box::new(restriction),
            matrix: Box::new(matrix),
        }
    }
}

/// A formula of bilateral predicate logic.
///
/// Connectives are structural: negation holds exactly one subformula and the
/// binary connectives hold exactly two, so arity invariants cannot be
/// violated by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    /// A 0-ary propositional variable, written as a lowercase bare word.
    Proposition(String),
    /// A plain predicate application (pre-bilateral form).
    Predicate(Predicate),
    /// A bilateral predicate atom, positive or starred.
    Bilateral(BilateralPredicate),
    Negation(Box<Formula>),
    Conjunction(Box<Formula>, Box<Formula>),
    Disjunction(Box<Formula>, Box<Formula>),
    Implication(Box<Formula>, Box<Formula>),
    /// Restricted universal quantification `[∀X R(X)]M(X)`.
    ForAll(RestrictedQuantifier),
    /// Restricted existential quantification `[∃X R(X)]M(X)`.
    Exists(RestrictedQuantifier),
}

impl Formula {
    pub fn proposition(name: impl Into<String>) -> Self {
        Formula::Proposition(name.into())
    }

    pub fn negation(subformula: Formula) -> Self {
        Formula::Negation(Box::new(subformula))
    }

    pub fn conjunction(left: Formula, right: Formula) -> Self {
        Formula::Conjunction(Box::new(left), Box::new(right))
    }

    pub fn disjunction(left: Formula, right: Formula) -> Self {
        Formula::Disjunction(Box::new(left), Box::new(right))
    }

    pub fn implication(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Implication(Box::new(antecedent), Box::new(consequent))
    }

    pub fn forall(variable: impl Into<String>, restriction: Formula, matrix: Formula) -> Self {
        Formula::ForAll(RestrictedQuantifier::new(variable, restriction, matrix))
    }

    pub fn exists(variable: impl Into<String>, restriction: Formula, matrix: Formula) -> Self {
        Formula::Exists(RestrictedQuantifier::new(variable, restriction, matrix))
    }

    /// Whether the formula is an atom: a proposition or a (bilateral)
    /// predicate application.
    pub fn is_atomic(&self) -> bool {
        matches!(
            self,
            Formula::Proposition(_) | Formula::Predicate(_) | Formula::Bilateral(_)
        )
    }
}

fn write_application(f: &mut Formatter<'_>, name: &str, terms: &[Term]) -> std::fmt::Result {
    f.write_str(name)?;

    if terms.is_empty() {
        return Ok(());
    }

    f.write_str("(")?;

    for (index, term) in terms.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }

        Display::fmt(term, f)?;
    }

    f.write_str(")")
}

impl Display for Predicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_application(f, &self.name, &self.terms)
    }
}

impl Display for BilateralPredicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_negative {
            write_application(f, &format!("{}*", self.name), &self.terms)
        } else {
            write_application(f, &self.name, &self.terms)
        }
    }
}

/// Render with the Unicode connective spellings. Binary connectives are always
/// parenthesized so the output re-parses without precedence ambiguity.
impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Proposition(name) => f.write_str(name),
            Formula::Predicate(predicate) => Display::fmt(predicate, f),
            Formula::Bilateral(predicate) => Display::fmt(predicate, f),
            Formula::Negation(subformula) => write!(f, "¬{subformula}"),
            Formula::Conjunction(left, right) => write!(f, "({left} ∧ {right})"),
            Formula::Disjunction(left, right) => write!(f, "({left} ∨ {right})"),
            Formula::Implication(left, right) => write!(f, "({left} → {right})"),
            Formula::ForAll(q) => write!(f, "[∀{} {}]{}", q.variable, q.restriction, q.matrix),
            Formula::Exists(q) => write!(f, "[∃{} {}]{}", q.variable, q.restriction, q.matrix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BilateralPredicate, Formula, Predicate};
    use crate::term::Term;

    #[test]
    fn bilateral_halves_are_distinct() {
        let positive = BilateralPredicate::positive("P", vec![Term::constant("a")]);
        let negative = BilateralPredicate::negative("P", vec![Term::constant("a")]);

        assert_ne!(positive, negative);
    }

    #[test]
    fn atoms_are_atomic() {
        assert!(Formula::proposition("p").is_atomic());
        assert!(Formula::Bilateral(BilateralPredicate::positive("P", Vec::new())).is_atomic());
        assert!(!Formula::negation(Formula::proposition("p")).is_atomic());
    }

    #[test]
    fn display_atoms() {
        let plain = Predicate::new("Tall", vec![Term::variable("X")]);
        assert_eq!(plain.to_string(), "Tall(X)");

        let starred = BilateralPredicate::negative("Tall", vec![Term::variable("X")]);
        assert_eq!(starred.to_string(), "Tall*(X)");

        let nullary = BilateralPredicate::negative("Rain", Vec::new());
        assert_eq!(nullary.to_string(), "Rain*");
    }

    #[test]
    fn display_compound() {
        let formula = Formula::implication(
            Formula::conjunction(Formula::proposition("p"), Formula::proposition("q")),
            Formula::negation(Formula::proposition("r")),
        );

        assert_eq!(formula.to_string(), "((p ∧ q) → ¬r)");
    }

    #[test]
    fn display_quantifier() {
        let restriction = Formula::Bilateral(BilateralPredicate::positive(
            "Human",
            vec![Term::variable("X")],
        ));
        let matrix = Formula::Bilateral(BilateralPredicate::positive(
            "Mortal",
            vec![Term::variable("X")],
        ));
        let formula = Formula::forall("X", restriction, matrix);

        assert_eq!(formula.to_string(), "[∀X Human(X)]Mortal(X)");
    }
}
