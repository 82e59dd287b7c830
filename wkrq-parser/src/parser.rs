mod bilateral_formula;
mod errors;
mod formula;
mod lexer;
mod modes;

/// Maximum formula nesting depth accepted by the recursive-descent parsers.
///
/// Parsing is linear in input length, but recursion depth tracks formula
/// nesting depth, so untrusted input could otherwise exhaust the call stack.
pub(crate) const MAX_NESTING_DEPTH: usize = 256;

pub use bilateral_formula::{parse_acrq_formula, rewrite_to_bilateral};
pub use errors::ParseError;
pub use formula::parse_formula;
pub use modes::SyntaxMode;
