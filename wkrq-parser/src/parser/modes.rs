//! Surface syntax modes for bilateral predicate notation.
//!
//! The same bilateral atom `P*(x)` can be written two ways: as the explicit
//! star form `P*(x)`, or as a negated plain predicate `¬P(x)` that the parser
//! translates. Which spellings are legal is a per-parse policy:
//!
//! | mode          | `P*(x)`  | `¬P(x)`                    |
//! |---------------|----------|----------------------------|
//! | `Transparent` | rejected | translated to `P*(x)`      |
//! | `Bilateral`   | accepted | rejected                   |
//! | `Mixed`       | accepted | translated to `P*(x)`      |
//!
//! The mode carries no parsing logic of its own; the parser and the bilateral
//! rewrite pass consult it at the few decision points where the two notations
//! diverge.

use wkrq_core::{BilateralPredicate, Formula, Predicate};

use super::errors::ParseError;

/// Policy selecting which bilateral predicate spellings the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyntaxMode {
    /// Negation notation only: `¬P(x)` is translated, `P*` is rejected.
    #[default]
    Transparent,
    /// Star notation only: `P*` is accepted, `¬P(x)` is rejected.
    Bilateral,
    /// Both notations are accepted.
    Mixed,
}

impl SyntaxMode {
    /// Whether the explicit star form `P*` is legal input.
    pub fn allows_star_syntax(self) -> bool {
        !matches!(self, SyntaxMode::Transparent)
    }

    /// Whether a negation applied directly to a plain predicate is legal
    /// input.
    pub fn allows_negated_predicates(self) -> bool {
        !matches!(self, SyntaxMode::Bilateral)
    }

    /// Translate a negated plain predicate into its bilateral form.
    ///
    /// In `Bilateral` mode the translation is never legal; calling this
    /// anyway fails with a [`ParseError::ModeViolation`] explaining that the
    /// explicit star form is required.
    pub fn negate_predicate(self, predicate: Predicate) -> Result<Formula, ParseError> {
        match self {
            SyntaxMode::Transparent | SyntaxMode::Mixed => Ok(Formula::Bilateral(
                BilateralPredicate::negative(predicate.name, predicate.terms),
            )),
            SyntaxMode::Bilateral => {
                let snippet = format!("~{predicate}");
                Err(ParseError::ModeViolation(self.describe_violation(&snippet)))
            }
        }
    }

    /// A human-readable explanation for a construct this mode rejects.
    ///
    /// Pure message construction; never used for control flow.
    pub fn describe_violation(self, snippet: &str) -> String {
        match self {
            SyntaxMode::Transparent => format!(
                "star syntax `{snippet}` is not available in transparent mode; \
                 write the negated predicate `~P(...)` instead"
            ),
            SyntaxMode::Bilateral => format!(
                "negated predicate syntax `{snippet}` is not available in bilateral mode; \
                 write the explicit star form `P*(...)` instead"
            ),
            SyntaxMode::Mixed => format!("cannot interpret `{snippet}` in mixed mode"),
        }
    }
}

#[cfg(test)]
mod tests {
    use wkrq_core::{BilateralPredicate, Formula, Predicate, Term};

    use super::SyntaxMode;
    use crate::parser::errors::ParseError;

    #[test]
    fn star_legality() {
        assert!(!SyntaxMode::Transparent.allows_star_syntax());
        assert!(SyntaxMode::Bilateral.allows_star_syntax());
        assert!(SyntaxMode::Mixed.allows_star_syntax());
    }

    #[test]
    fn negated_predicate_legality() {
        assert!(SyntaxMode::Transparent.allows_negated_predicates());
        assert!(!SyntaxMode::Bilateral.allows_negated_predicates());
        assert!(SyntaxMode::Mixed.allows_negated_predicates());
    }

    #[test]
    fn negate_predicate_translates_or_fails() {
        let predicate = Predicate::new("P", vec![Term::constant("a")]);
        let expected = Formula::Bilateral(BilateralPredicate::negative(
            "P",
            vec![Term::constant("a")],
        ));

        let translated = SyntaxMode::Transparent.negate_predicate(predicate.clone());
        assert_eq!(translated, Ok(expected.clone()));

        let translated = SyntaxMode::Mixed.negate_predicate(predicate.clone());
        assert_eq!(translated, Ok(expected));

        let rejected = SyntaxMode::Bilateral.negate_predicate(predicate);
        assert!(matches!(rejected, Err(ParseError::ModeViolation(_))));
    }

    #[test]
    fn default_mode_is_transparent() {
        assert_eq!(SyntaxMode::default(), SyntaxMode::Transparent);
    }
}
