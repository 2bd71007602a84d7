//! Grammar procedures, one per rule:
//!
//! ```text
//! Program     -> FunctionDef* Statement*
//! FunctionDef -> 'def' Identifier Params Block
//! Params      -> '(' (Identifier (',' Identifier)*)? ')'
//! Block       -> '{' Statement* '}'
//! Statement   -> IfStmt | WhileStmt | ReadStmt | WriteStmt | Expression ';'
//! IfStmt      -> 'if' '(' Expression ')' 'then' Block ('else' Block)?
//! WhileStmt   -> 'while' '(' Expression ')' Block
//! ReadStmt    -> 'read' '(' Identifier ')' ';'
//! WriteStmt   -> 'write' '(' Expression ')' ';'
//! Expression  -> Assign | Call | Clause        (one token of lookahead)
//! ```
//!
//! Expression rules, the precedence climber, and the assignment-sugar
//! rewriting live in [`expression`]; statement rules in [`statement`].

mod expression;
mod statement;

use crate::lexer::TokenKind;
use crate::tree::Node;

use super::follow::Nonterminal;
use super::{ParseState, SyntaxError};

use statement::statement;

/// Parse a whole token sequence.
///
/// The program tree is always built in full, placeholder nodes standing in
/// for unparseable subtrees. It is only returned when no diagnostics were
/// raised; the diagnostics come back in the order they were encountered.
pub fn parse(state: &mut ParseState) -> (Option<Node>, Vec<SyntaxError>) {
    let tree = program(state);
    let errors = state.take_errors();
    if errors.is_empty() {
        (Some(tree), errors)
    } else {
        (None, errors)
    }
}

/// Program -> FunctionDef* Statement*
fn program(state: &mut ParseState) -> Node {
    let mut root = Node::new("Program");
    root.add_child(definitions(state));
    root.add_child(statements(state));
    root
}

fn definitions(state: &mut ParseState) -> Node {
    let mut result = Node::new("Definitions");
    while state.check(TokenKind::Def) {
        result.add_child(function_def(state));
    }
    result
}

/// FunctionDef -> 'def' Identifier Params Block
fn function_def(state: &mut ParseState) -> Node {
    if !state.expect(TokenKind::Def) {
        return state.recover(Nonterminal::FunctionDef, TokenKind::Def);
    }
    if !state.check(TokenKind::Identifier) {
        return state.recover(Nonterminal::FunctionDef, TokenKind::Identifier);
    }
    let name = state.current().label();
    state.advance();

    let mut result = Node::new(format!("def:{name}"));
    result.add_child(parameters(state));
    result.add_child(block(state));
    result
}

/// Params -> '(' (Identifier (',' Identifier)*)? ')'
fn parameters(state: &mut ParseState) -> Node {
    if !state.expect(TokenKind::LeftParen) {
        return state.recover(Nonterminal::Parameters, TokenKind::LeftParen);
    }
    let mut result = Node::new("Parameters");

    if state.check(TokenKind::Identifier) {
        result.add_child(Node::new(state.current().label()));
        state.advance();
    }
    while state.check(TokenKind::Comma) {
        state.advance();
        if !state.check(TokenKind::Identifier) {
            return state.recover(Nonterminal::Parameters, TokenKind::Identifier);
        }
        result.add_child(Node::new(state.current().label()));
        state.advance();
    }

    if !state.expect(TokenKind::RightParen) {
        return state.recover(Nonterminal::Parameters, TokenKind::RightParen);
    }
    result
}

/// Block -> '{' Statement* '}'
///
/// The statement loop also stops at end-of-input so a missing `}` is
/// reported once instead of looping forever.
pub(crate) fn block(state: &mut ParseState) -> Node {
    if !state.expect(TokenKind::LeftBrace) {
        return state.recover(Nonterminal::Block, TokenKind::LeftBrace);
    }
    let mut result = Node::new("Statements");

    while !state.check(TokenKind::RightBrace) && !state.check(TokenKind::Eof) {
        result.add_child(statement(state));
    }

    if !state.expect(TokenKind::RightBrace) {
        return state.recover(Nonterminal::Block, TokenKind::RightBrace);
    }
    result
}

fn statements(state: &mut ParseState) -> Node {
    let mut result = Node::new("Statements");
    while !state.check(TokenKind::Eof) {
        result.add_child(statement(state));
    }
    result
}
