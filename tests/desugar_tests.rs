//! Tests for the parse-time rewriting of assignment sugar.

use lparse::lexer::lex;
use lparse::parser::{parse, ParseState};
use lparse::tree::Node;

fn parse_program(input: &str) -> Node {
    let tokens = lex(input).expect("lexing failed");
    let mut state = ParseState::new(tokens);
    let (tree, errors) = parse(&mut state);
    if !errors.is_empty() {
        panic!("parsing failed: {}", errors[0]);
    }
    tree.expect("parsing failed: no tree")
}

/// The sugared and expanded forms must produce identical trees, labels
/// included.
fn assert_same_tree(sugared: &str, expanded: &str) {
    assert_eq!(
        parse_program(sugared),
        parse_program(expanded),
        "{sugared} should parse like {expanded}"
    );
}

#[test]
fn compound_assignments_expand_to_plain_assignments() {
    assert_same_tree("x += 2;", "x := x + 2;");
    assert_same_tree("x -= 2;", "x := x - 2;");
    assert_same_tree("x *= 2;", "x := x * 2;");
    assert_same_tree("x /= 2;", "x := x / 2;");
    assert_same_tree("x %= 2;", "x := x % 2;");
}

#[test]
fn compound_assignment_keeps_the_whole_right_hand_side() {
    // the synthesized addition takes the complete right-hand side as one
    // operand, which the expanded spelling needs parentheses to express
    assert_same_tree("x += 2 * y + f(3);", "x := x + (2 * y + f(3));");
}

#[test]
fn increment_expands_to_plus_one() {
    assert_same_tree("++x;", "x := x + 1;");
}

#[test]
fn decrement_expands_to_minus_one() {
    assert_same_tree("--x;", "x := x - 1;");
}

#[test]
fn expanded_assignment_shape() {
    let tree = parse_program("x += y;");

    let assign = &tree.children[1].children[0];
    assert_eq!(assign.label, ":=");
    assert_eq!(assign.children.len(), 2);
    assert_eq!(assign.children[0].label, "x");

    // right child is a synthesized addition over the assigned identifier
    let sum = &assign.children[1];
    assert_eq!(sum.label, "+");
    assert_eq!(sum.children[0].label, "x");
    assert_eq!(sum.children[1].label, "y");
}

#[test]
fn increment_synthesizes_a_literal_one() {
    let tree = parse_program("++count;");

    let assign = &tree.children[1].children[0];
    assert_eq!(assign.label, ":=");
    assert_eq!(assign.children[0].label, "count");

    let sum = &assign.children[1];
    assert_eq!(sum.label, "+");
    assert_eq!(sum.children[0].label, "count");
    assert_eq!(sum.children[1].label, "1");
    assert!(sum.children[1].children.is_empty());
}
