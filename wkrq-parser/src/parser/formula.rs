//! Parser for plain first-order formulas, without bilateral predicate
//! handling.
//!
//! This is the parser used for quantifier restriction clauses: predicates stay
//! plain [`Formula::Predicate`] nodes, negation is always generic, and star
//! syntax is rejected outright. The ACrQ parser runs its bilateral rewrite
//! pass over the result before attaching it to a quantifier node.
//!
//! Precedence ladder, lowest to highest:
//!
//! ```text
//! formula     := implication
//! implication := disjunction ( '->' implication )?     right-associative
//! disjunction := conjunction ( '|' conjunction )*      left-associative
//! conjunction := negation ( '&' negation )*            left-associative
//! negation    := '~' negation | atomic
//! atomic      := '(' formula ')' | quantifier | Name(args) | identifier
//! ```

use wkrq_core::{Formula, Predicate, Term};

use super::errors::ParseError;
use super::lexer::{starts_uppercase, tokenize, Token, TokenStream};
use super::MAX_NESTING_DEPTH;

/// Parse a plain first-order formula from a string.
pub fn parse_formula(input: &str) -> Result<Formula, ParseError> {
    let tokens = tokenize(input)?;

    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut parser = FormulaParser::new(tokens);
    let formula = parser.formula()?;

    parser.stream.finish()?;

    Ok(formula)
}

pub(crate) fn arguments_to_terms(args: Vec<String>) -> Vec<Term> {
    args.into_iter().map(Term::from_name).collect()
}

struct FormulaParser {
    stream: TokenStream,
    depth: usize,
}

impl FormulaParser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            stream: TokenStream::new(tokens),
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

    fn negation(&mut self) -> Result<Formula, ParseError> {
        if matches!(self.stream.peek(), Some(Token::Not)) {
            let _ = self.stream.advance()?;
            let subformula = self.nested(Self::negation)?;

            return Ok(Formula::negation(subformula));
        }

        self.atomic()
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
            Token::Predicate { name, args } => Ok(Formula::Predicate(Predicate::new(
                name,
                arguments_to_terms(args),
            ))),
            Token::Identifier(name) => {
                if starts_uppercase(&name) {
                    Ok(Formula::Predicate(Predicate::new(name, Vec::new())))
                } else {
                    Ok(Formula::proposition(name))
                }
            }
            token => Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }

    fn quantifier(
        &mut self,
        universal: bool,
        variable: String,
        restriction: String,
    ) -> Result<Formula, ParseError> {
        let restriction = parse_formula(&restriction)?;
        let matrix = self.nested(Self::negation)?;

        if universal {
            Ok(Formula::forall(variable, restriction, matrix))
        } else {
            Ok(Formula::exists(variable, restriction, matrix))
        }
    }
}

#[cfg(test)]
mod tests {
    use wkrq_core::{Formula, Predicate, Term};

    use super::parse_formula;
    use crate::parser::errors::ParseError;

    fn predicate(name: &str, terms: Vec<Term>) -> Formula {
        Formula::Predicate(Predicate::new(name, terms))
    }

    #[test]
    fn predicates_stay_plain() {
        let parsed = parse_formula("Tall(X)").expect("parse");
        let expected = predicate("Tall", vec![Term::variable("X")]);

        assert_eq!(parsed, expected);
    }

    #[test]
    fn negation_stays_generic() {
        let parsed = parse_formula("~P(a)").expect("parse");
        let expected = Formula::negation(predicate("P", vec![Term::constant("a")]));

        assert_eq!(parsed, expected);
    }

    #[test]
    fn star_syntax_is_rejected() {
        let result = parse_formula("P*(x)");
        assert!(matches!(result, Err(ParseError::UnexpectedToken(_))));
    }

    #[test]
    fn conjunction_binds_tighter_than_disjunction() {
        let parsed = parse_formula("p & q | r").expect("parse");
        let expected = Formula::disjunction(
            Formula::conjunction(Formula::proposition("p"), Formula::proposition("q")),
            Formula::proposition("r"),
        );

        assert_eq!(parsed, expected);
    }

    #[test]
    fn implication_is_right_associative() {
        let parsed = parse_formula("p -> q -> r").expect("parse");
        let expected = Formula::implication(
            Formula::proposition("p"),
            Formula::implication(Formula::proposition("q"), Formula::proposition("r")),
        );

        assert_eq!(parsed, expected);
    }

    #[test]
    fn quantifier_restriction_is_subparsed() {
        let parsed = parse_formula("[∀X Human(X) & Greek(X)]Mortal(X)").expect("parse");
        let restriction = Formula::conjunction(
            predicate("Human", vec![Term::variable("X")]),
            predicate("Greek", vec![Term::variable("X")]),
        );
        let expected = Formula::forall(
            "X",
            restriction,
            predicate("Mortal", vec![Term::variable("X")]),
        );

        assert_eq!(parsed, expected);
    }

    #[test]
    fn unbalanced_parenthesis() {
        let result = parse_formula("(p & q");
        assert_eq!(result, Err(ParseError::UnbalancedParenthesis));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_formula(""), Err(ParseError::EmptyInput));
        assert_eq!(parse_formula("   "), Err(ParseError::EmptyInput));
    }

    #[test]
    fn deeply_nested_negation_is_bounded() {
        let input = "~".repeat(10_000) + "p";
        let result = parse_formula(&input);

        assert!(matches!(result, Err(ParseError::NestingTooDeep(_))));
    }
}
