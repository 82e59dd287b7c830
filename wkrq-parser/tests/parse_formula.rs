//! Integration tests: parse plain first-order formula strings.
//!
//! Run with: `cargo test -p wkrq-parser --test parse_formula`

use wkrq_parser::{parse_formula, Formula, ParseError, Predicate, Term};

fn predicate(name: &str, terms: Vec<Term>) -> Formula {
    Formula::Predicate(Predicate::new(name, terms))
}

#[test]
fn predicates_are_not_bilateralized() {
    let parsed = parse_formula("Human(X) -> Mortal(X)").expect("parse");
    let expected = Formula::implication(
        predicate("Human", vec![Term::variable("X")]),
        predicate("Mortal", vec![Term::variable("X")]),
    );

    assert_eq!(parsed, expected);
}

#[test]
fn negation_wraps_predicates_generically() {
    let parsed = parse_formula("¬P(a) & Q(b)").expect("parse");
    let expected = Formula::conjunction(
        Formula::negation(predicate("P", vec![Term::constant("a")])),
        predicate("Q", vec![Term::constant("b")]),
    );

    assert_eq!(parsed, expected);
}

#[test]
fn star_syntax_is_not_part_of_the_plain_grammar() {
    let result = parse_formula("P*(x)");
    assert!(matches!(result, Err(ParseError::UnexpectedToken(_))));
}

#[test]
fn nested_quantifiers_via_restriction_strings() {
    // The restriction clause is re-parsed as its own formula, so quantifiers
    // can appear in the matrix of an outer quantifier.
    let parsed = parse_formula("[∀X Human(X)][∃Y Parent(Y)]Child(X)").expect("parse");
    let inner = Formula::exists(
        "Y",
        predicate("Parent", vec![Term::variable("Y")]),
        predicate("Child", vec![Term::variable("X")]),
    );
    let expected = Formula::forall("X", predicate("Human", vec![Term::variable("X")]), inner);

    assert_eq!(parsed, expected);
}

#[test]
fn trailing_tokens_are_rejected() {
    let result = parse_formula("p q");
    assert!(matches!(result, Err(ParseError::TrailingInput(_))));
}

#[test]
fn unrecognized_characters_carry_their_position() {
    let error = parse_formula("P(a) % Q(b)").expect_err("lex error");
    let expected = ParseError::UnrecognizedCharacter {
        position: 5,
        character: '%',
    };

    assert_eq!(error, expected);
}
