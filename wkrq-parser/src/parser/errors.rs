use thiserror::Error;

/// The error type for formula parsing.
///
/// Every variant aborts the parse of the current input entirely: there is no
/// recovery, no partial AST, and nothing is ever swallowed inside the parser.
/// Callers are responsible for presenting the error to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that matches no lexeme class, with its byte position.
    #[error("unrecognized character {character:?} at position {position}")]
    UnrecognizedCharacter { position: usize, character: char },

    /// The input contained no tokens at all.
    #[error("empty formula")]
    EmptyInput,

    /// The token stream ended where the grammar required more input.
    #[error("unexpected end of formula")]
    UnexpectedEnd,

    /// A well-formed token appeared at a position the grammar does not allow.
    #[error("unexpected token `{0}`")]
    UnexpectedToken(String),

    /// A `(` without a matching `)`.
    #[error("expected closing parenthesis")]
    UnbalancedParenthesis,

    /// A `[` that does not open a well-shaped restricted quantifier.
    #[error("malformed quantifier `{0}`")]
    MalformedQuantifier(String),

    /// Tokens remained after a complete top-level formula.
    #[error("unexpected trailing input starting at `{0}`")]
    TrailingInput(String),

    /// A construct that is legal in some syntax mode, but not the active one.
    /// The message is produced by [`SyntaxMode::describe_violation`].
    ///
    /// [`SyntaxMode::describe_violation`]: crate::SyntaxMode::describe_violation
    #[error("{0}")]
    ModeViolation(String),

    /// The formula nests deeper than the parser's recursion limit.
    #[error("formula exceeds the maximum nesting depth of {0}")]
    NestingTooDeep(usize),
}
