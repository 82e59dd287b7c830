//! Parser for ACrQ formulas: formulas over bilateral predicates, with a
//! mode-dependent surface syntax.
//!
//! The grammar is the same precedence ladder as the plain parser
//! ([`formula`](super::formula)), with two mode-sensitive differences:
//!
//!   - a negation applied *directly* to a capitalized predicate token is not
//!     parsed as a generic negation; depending on the [`SyntaxMode`] it is
//!     translated into the starred bilateral atom or rejected,
//!   - star predicate tokens `P*(x)` are parsed into negative bilateral atoms
//!     where the mode allows them, and rejected otherwise.
//!
//! Every plain predicate is wrapped into its positive bilateral form at the
//! atomic level, so no [`Formula::Predicate`] node ever escapes this parser.
//! Quantifier restriction clauses are parsed with the plain parser and then
//! converted by [`rewrite_to_bilateral`], which applies the same mode rules to
//! any negation they contain.

use wkrq_core::{BilateralPredicate, Formula, Predicate, RestrictedQuantifier};

use super::errors::ParseError;
use super::formula::{arguments_to_terms, parse_formula};
use super::lexer::{starts_uppercase, tokenize, Token, TokenStream};
use super::modes::SyntaxMode;
use super::MAX_NESTING_DEPTH;

/// Parse an ACrQ formula from a string under the given syntax mode.
pub fn parse_acrq_formula(input: &str, mode: SyntaxMode) -> Result<Formula, ParseError> {
    let tokens = tokenize(input)?;

    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut parser = AcrqParser::new(tokens, mode);
    let formula = parser.formula()?;

    parser.stream.finish()?;

    Ok(formula)
}

/// Convert a plain-parser sub-AST into bilateral form.
///
/// Plain predicates become positive bilateral atoms. A negation directly
/// wrapping a plain predicate obeys the mode rules, exactly as it would in
/// the main grammar. Everything else is rebuilt with rewritten children, and
/// nodes that are already bilateral (or propositional) pass through
/// unchanged, so the transform is idempotent.
pub fn rewrite_to_bilateral(formula: Formula, mode: SyntaxMode) -> Result<Formula, ParseError> {
    match formula {
        Formula::Predicate(predicate) => Ok(Formula::Bilateral(BilateralPredicate::positive(
            predicate.name,
            predicate.terms,
        ))),
        Formula::Negation(inner) => match *inner {
            Formula::Predicate(predicate) => {
                if !mode.allows_negated_predicates() {
                    let snippet = format!("~{predicate}");
                    return Err(ParseError::ModeViolation(mode.describe_violation(&snippet)));
                }

                mode.negate_predicate(predicate)
            }
            inner => Ok(Formula::negation(rewrite_to_bilateral(inner, mode)?)),
        },
        Formula::Conjunction(left, right) => Ok(Formula::conjunction(
            rewrite_to_bilateral(*left, mode)?,
            rewrite_to_bilateral(*right, mode)?,
        )),
        Formula::Disjunction(left, right) => Ok(Formula::disjunction(
            rewrite_to_bilateral(*left, mode)?,
            rewrite_to_bilateral(*right, mode)?,
        )),
        Formula::Implication(left, right) => Ok(Formula::implication(
            rewrite_to_bilateral(*left, mode)?,
            rewrite_to_bilateral(*right, mode)?,
        )),
        Formula::ForAll(q) => Ok(Formula::ForAll(rewrite_quantifier(q, mode)?)),
        Formula::Exists(q) => Ok(Formula::Exists(rewrite_quantifier(q, mode)?)),
        formula @ (Formula::Proposition(_) | Formula::Bilateral(_)) => Ok(formula),
    }
}

fn rewrite_quantifier(
    quantifier: RestrictedQuantifier,
    mode: SyntaxMode,
) -> Result<RestrictedQuantifier, ParseError> {
    Ok(RestrictedQuantifier::new(
        quantifier.variable,
        rewrite_to_bilateral(*quantifier.restriction, mode)?,
        rewrite_to_bilateral(*quantifier.matrix, mode)?,
    ))
}

struct AcrqParser {
    stream: TokenStream,
    mode: SyntaxMode,
    depth: usize,
}

impl AcrqParser {
    fn new(tokens: Vec<Token>, mode: SyntaxMode) -> Self {
        Self {
            stream: TokenStream::new(tokens),
            mode,
            depth: 0,
        }
    }

    fn nested(
        &mut self,
        rule: fn(&mut Self) -> Result<Formula, ParseError>,
    ) -> Result<Formula, ParseError> {
        if self.depth == MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep(MAX_NESTING_DEPTH));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;

        result
    }

    fn formula(&mut self) -> Result<Formula, ParseError> {
        self.nested(Self::implication)
    }

    fn implication(&mut self) -> Result<Formula, ParseError> {
        let left = self.disjunction()?;

        if matches!(self.stream.peek(), Some(Token::Implies)) {
            let _ = self.stream.advance()?;
            let right = self.nested(Self::implication)?;

            return Ok(Formula::implication(left, right));
        }

        Ok(left)
    }

    fn disjunction(&mut self) -> Result<Formula, ParseError> {
        let mut left = self.conjunction()?;

        while matches!(self.stream.peek(), Some(Token::Or)) {
            let _ = self.stream.advance()?;
            let right = self.conjunction()?;
            left = Formula::disjunction(left, right);
        }

        Ok(left)
    }

    fn conjunction(&mut self) -> Result<Formula, ParseError> {
        let mut left = self.negation()?;

        while matches!(self.stream.peek(), Some(Token::And)) {
            let _ = self.stream.advance()?;
            let right = self.negation()?;
            left = Formula::conjunction(left, right);
        }

        Ok(left)
    }

    /// Negation, with the mode-sensitive special case: `~` immediately
    /// followed by a capitalized predicate token is a notation for the
    /// starred atom, not a generic negation. `~` followed by anything else
    /// (including another `~`) recurses generically, so double negation is
    /// preserved structurally.
    fn negation(&mut self) -> Result<Formula, ParseError> {
        if !matches!(self.stream.peek(), Some(Token::Not)) {
            return self.atomic();
        }

        let _ = self.stream.advance()?;

        let negates_predicate = match self.stream.peek() {
            Some(Token::Predicate { name, .. }) | Some(Token::Identifier(name)) => {
                starts_uppercase(name)
            }
            _ => false,
        };

        if !negates_predicate {
            let subformula = self.nested(Self::negation)?;

            return Ok(Formula::negation(subformula));
        }

        let predicate = match self.stream.advance()? {
            Token::Predicate { name, args } => Predicate::new(name, arguments_to_terms(args)),
            Token::Identifier(name) => Predicate::new(name, Vec::new()),
            token => return Err(ParseError::UnexpectedToken(token.to_string())),
        };

        if !self.mode.allows_negated_predicates() {
            let snippet = format!("~{predicate}");
            return Err(ParseError::ModeViolation(
                self.mode.describe_violation(&snippet),
            ));
        }

        self.mode.negate_predicate(predicate)
    }

    fn atomic(&mut self) -> Result<Formula, ParseError> {
        match self.stream.advance()? {
            Token::OpenParen => {
                let formula = self.formula()?;

                match self.stream.advance() {
                    Ok(Token::CloseParen) => Ok(formula),
                    _ => Err(ParseError::UnbalancedParenthesis),
                }
            }
            Token::Quantifier {
                universal,
                variable,
                restriction,
            } => self.quantifier(universal, variable, restriction),
            Token::StarPredicate { name, args } => {
                if !self.mode.allows_star_syntax() {
                    let snippet = format!("{name}*");
                    return Err(ParseError::ModeViolation(
                        self.mode.describe_violation(&snippet),
                    ));
                }

                Ok(Formula::Bilateral(BilateralPredicate::negative(
                    name,
                    arguments_to_terms(args),
                )))
            }
            Token::Predicate { name, args } => Ok(Formula::Bilateral(
                BilateralPredicate::positive(name, arguments_to_terms(args)),
            )),
            Token::Identifier(name) => {
                if starts_uppercase(&name) {
                    Ok(Formula::Bilateral(BilateralPredicate::positive(
                        name,
                        Vec::new(),
                    )))
                } else {
                    Ok(Formula::proposition(name))
                }
            }
            token => Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }

    /// Restricted quantifier: the restriction text is parsed with the plain
    /// parser, the matrix with this parser at the negation level, and both
    /// sub-ASTs go through the bilateral rewrite before the node is built.
    fn quantifier(
        &mut self,
        universal: bool,
        variable: String,
        restriction: String,
    ) -> Result<Formula, ParseError> {
        let restriction = parse_formula(&restriction)?;
        let restriction = rewrite_to_bilateral(restriction, self.mode)?;

        let matrix = self.nested(Self::negation)?;
        let matrix = rewrite_to_bilateral(matrix, self.mode)?;

        if universal {
            Ok(Formula::forall(variable, restriction, matrix))
        } else {
            Ok(Formula::exists(variable, restriction, matrix))
        }
    }
}
