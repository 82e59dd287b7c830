//! Tokenizer for the formula surface syntax.
//!
//! The input is scanned left to right, trying the lexeme classes in a fixed
//! priority order (first match wins — the order is load-bearing):
//!
//!   1. restricted quantifier brackets `[∀X R]` / `[exists X R]`, captured as
//!      a single token whose restriction text is re-parsed later,
//!   2. the multi-character connective `->` / `→`,
//!   3. single-character connectives `&`/`∧`, `|`/`∨`, `~`/`¬`,
//!   4. parentheses,
//!   5. star predicates `Name*` / `Name*(a, b)`, captured whole so `P*(x)` is
//!      never split at the `*`,
//!   6. plain predicates `Name(a, b)` with their argument list,
//!   7. bare identifiers, classified later by parse context.
//!
//! Whitespace between tokens is discarded. The first character matching no
//! class fails the whole tokenization.

use std::fmt::{Display, Formatter};
use std::iter::Peekable;
use std::vec;

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_while1};
use nom::character::complete::{char, multispace0};
use nom::combinator::{map, opt, value};
use nom::error::{Error as NomError, ErrorKind};
use nom::multi::separated_list0;
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use nom::IResult;

use super::errors::ParseError;

/// A single lexeme, with its structure already attached.
///
/// Predicate tokens carry their name and pre-split argument names; quantifier
/// tokens carry the raw restriction text for a later sub-parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Quantifier {
        universal: bool,
        variable: String,
        restriction: String,
    },
    Implies,
    And,
    Or,
    Not,
    OpenParen,
    CloseParen,
    StarPredicate {
        name: String,
        args: Vec<String>,
    },
    Predicate {
        name: String,
        args: Vec<String>,
    },
    Identifier(String),
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Quantifier {
                universal,
                variable,
                restriction,
            } => {
                let symbol = if *universal { "∀" } else { "∃" };
                write!(f, "[{symbol}{variable} {restriction}]")
            }
            Token::Implies => f.write_str("->"),
            Token::And => f.write_str("&"),
            Token::Or => f.write_str("|"),
            Token::Not => f.write_str("~"),
            Token::OpenParen => f.write_str("("),
            Token::CloseParen => f.write_str(")"),
            Token::StarPredicate { name, args } => write_application(f, name, "*", args),
            Token::Predicate { name, args } => write_application(f, name, "", args),
            Token::Identifier(name) => f.write_str(name),
        }
    }
}

fn write_application(
    f: &mut Formatter<'_>,
    name: &str,
    suffix: &str,
    args: &[String],
) -> std::fmt::Result {
    write!(f, "{name}{suffix}")?;

    if !args.is_empty() {
        write!(f, "({})", args.join(", "))?;
    }

    Ok(())
}

/// Whether an identifier denotes a predicate rather than a propositional atom
/// or constant.
pub(crate) fn starts_uppercase(name: &str) -> bool {
    name.chars().next().map_or(false, char::is_uppercase)
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

fn argument_list(input: &str) -> IResult<&str, Vec<String>> {
    let argument = map(delimited(multispace0, word, multispace0), |name: &str| {
        name.to_owned()
    });
    let arguments = terminated(separated_list0(char(','), argument), multispace0);

    delimited(char('('), arguments, char(')'))(input)
}

fn quantifier(input: &str) -> IResult<&str, Token> {
    let universal = value(true, alt((tag("∀"), tag("forall"))));
    let existential = value(false, alt((tag("∃"), tag("exists"))));
    let variable = preceded(multispace0, word);
    let inner = tuple((alt((universal, existential)), variable, is_not("]")));
    let mut parser = delimited(char('['), inner, char(']'));

    let (rest, (universal, variable, restriction)) = parser(input)?;
    let restriction = restriction.trim();

    if restriction.is_empty() {
        return Err(nom::Err::Error(NomError::new(input, ErrorKind::Verify)));
    }

    let token = Token::Quantifier {
        universal,
        variable: variable.to_owned(),
        restriction: restriction.to_owned(),
    };

    Ok((rest, token))
}

fn connective(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::Implies, alt((tag("->"), tag("→")))),
        value(Token::And, alt((tag("&"), tag("∧")))),
        value(Token::Or, alt((tag("|"), tag("∨")))),
        value(Token::Not, alt((tag("~"), tag("¬")))),
    ))(input)
}

fn parenthesis(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::OpenParen, char('(')),
        value(Token::CloseParen, char(')')),
    ))(input)
}

fn star_predicate(input: &str) -> IResult<&str, Token> {
    let mut parser = tuple((word, char('*'), opt(argument_list)));
    let (rest, (name, _, args)) = parser(input)?;

    let token = Token::StarPredicate {
        name: name.to_owned(),
        args: args.unwrap_or_default(),
    };

    Ok((rest, token))
}

fn predicate(input: &str) -> IResult<&str, Token> {
    let mut parser = pair(word, argument_list);
    let (rest, (name, args)) = parser(input)?;

    let token = Token::Predicate {
        name: name.to_owned(),
        args,
    };

    Ok((rest, token))
}

fn identifier(input: &str) -> IResult<&str, Token> {
    map(word, |name: &str| Token::Identifier(name.to_owned()))(input)
}

fn token(input: &str) -> IResult<&str, Token> {
    alt((
        quantifier,
        connective,
        parenthesis,
        star_predicate,
        predicate,
        identifier,
    ))(input)
}

/// Convert an input string into its token sequence, failing on the first
/// character that matches no lexeme class.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let (next, lexeme) = token(rest).map_err(|_| lex_error(input, rest))?;
        tokens.push(lexeme);
        rest = next.trim_start();
    }

    Ok(tokens)
}

fn lex_error(input: &str, rest: &str) -> ParseError {
    let position = input.len() - rest.len();

    match rest.chars().next() {
        Some('[') => {
            let snippet = match rest.find(']') {
                Some(end) => &rest[..end + 1],
                None => rest,
            };

            ParseError::MalformedQuantifier(snippet.to_owned())
        }
        Some(character) => ParseError::UnrecognizedCharacter {
            position,
            character,
        },
        None => ParseError::EmptyInput,
    }
}

/// Cursor over the token sequence consumed by the recursive-descent parsers.
#[derive(Debug)]
pub(crate) struct TokenStream {
    tokens: Peekable<vec::IntoIter<Token>>,
}

impl TokenStream {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
        }
    }

    pub(crate) fn peek(&mut self) -> Option<&Token> {
        self.tokens.peek()
    }

    pub(crate) fn advance(&mut self) -> Result<Token, ParseError> {
        self.tokens.next().ok_or(ParseError::UnexpectedEnd)
    }

    /// Succeeds only if every token has been consumed; trailing tokens after
    /// a complete top-level formula are an error, not silently ignored.
    pub(crate) fn finish(mut self) -> Result<(), ParseError> {
        match self.tokens.next() {
            Some(token) => Err(ParseError::TrailingInput(token.to_string())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{tokenize, Token};
    use crate::parser::errors::ParseError;

    #[test]
    fn star_predicate_is_one_token() {
        let tokens = tokenize("P*(x)").expect("tokenize");
        let expected = Token::StarPredicate {
            name: "P".to_owned(),
            args: vec!["x".to_owned()],
        };

        assert_eq!(tokens, vec![expected]);
    }

    #[test]
    fn bare_star_predicate() {
        let tokens = tokenize("Rain*").expect("tokenize");
        let expected = Token::StarPredicate {
            name: "Rain".to_owned(),
            args: Vec::new(),
        };

        assert_eq!(tokens, vec![expected]);
    }

    #[test]
    fn arrow_is_not_split() {
        let tokens = tokenize("p -> q").expect("tokenize");
        let expected = vec![
            Token::Identifier("p".to_owned()),
            Token::Implies,
            Token::Identifier("q".to_owned()),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn unicode_and_ascii_connectives_agree() {
        assert_eq!(tokenize("p ∧ q"), tokenize("p & q"));
        assert_eq!(tokenize("p ∨ q"), tokenize("p | q"));
        assert_eq!(tokenize("¬p"), tokenize("~p"));
        assert_eq!(tokenize("p → q"), tokenize("p -> q"));
    }

    #[test]
    fn quantifier_bracket_is_opaque() {
        let tokens = tokenize("[∀X Human(X)]Mortal(X)").expect("tokenize");
        let quantifier = Token::Quantifier {
            universal: true,
            variable: "X".to_owned(),
            restriction: "Human(X)".to_owned(),
        };
        let matrix = Token::Predicate {
            name: "Mortal".to_owned(),
            args: vec!["X".to_owned()],
        };

        assert_eq!(tokens, vec![quantifier, matrix]);
    }

    #[test]
    fn ascii_quantifier_spellings() {
        let tokens = tokenize("[forall X P(X)]Q(X)").expect("tokenize");
        assert!(matches!(
            tokens[0],
            Token::Quantifier { universal: true, .. }
        ));

        let tokens = tokenize("[exists Y P(Y)]Q(Y)").expect("tokenize");
        assert!(matches!(
            tokens[0],
            Token::Quantifier { universal: false, .. }
        ));
    }

    #[test]
    fn argument_whitespace_is_trimmed() {
        let tokens = tokenize("P( a , B )").expect("tokenize");
        let expected = Token::Predicate {
            name: "P".to_owned(),
            args: vec!["a".to_owned(), "B".to_owned()],
        };

        assert_eq!(tokens, vec![expected]);
    }

    #[test]
    fn unrecognized_character_reports_position() {
        let error = tokenize("p & #q").expect_err("lex error");
        let expected = ParseError::UnrecognizedCharacter {
            position: 4,
            character: '#',
        };

        assert_eq!(error, expected);
    }

    #[test]
    fn malformed_quantifier_bracket() {
        let error = tokenize("[∀X ]P(X)").expect_err("lex error");
        assert!(matches!(error, ParseError::MalformedQuantifier(_)));
    }
}
