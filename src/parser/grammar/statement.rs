//! Statement rules.

use crate::lexer::TokenKind;
use crate::parser::follow::Nonterminal;
use crate::parser::ParseState;
use crate::tree::Node;

use super::block;
use super::expression::expression;

/// Statement -> IfStmt | WhileStmt | ReadStmt | WriteStmt | Expression ';'
pub(crate) fn statement(state: &mut ParseState) -> Node {
    match state.current().kind {
        TokenKind::If => if_statement(state),
        TokenKind::While => while_statement(state),
        TokenKind::Read => read_statement(state),
        TokenKind::Write => write_statement(state),
        _ => {
            let result = expression(state);
            if !state.expect(TokenKind::Semicolon) {
                return state.recover(Nonterminal::Statement, TokenKind::Semicolon);
            }
            result
        }
    }
}

/// IfStmt -> 'if' '(' Expression ')' 'then' Block ('else' Block)?
///
/// The node has two children without an else branch, three with one.
fn if_statement(state: &mut ParseState) -> Node {
    let mut result = Node::new(state.current().label());
    if !state.expect(TokenKind::If) {
        return state.recover(Nonterminal::IfStatement, TokenKind::If);
    }
    if !state.expect(TokenKind::LeftParen) {
        return state.recover(Nonterminal::IfStatement, TokenKind::LeftParen);
    }
    result.add_child(expression(state));
    if !state.expect(TokenKind::RightParen) {
        return state.recover(Nonterminal::IfStatement, TokenKind::RightParen);
    }
    if !state.expect(TokenKind::Then) {
        return state.recover(Nonterminal::IfStatement, TokenKind::Then);
    }
    result.add_child(block(state));

    if state.check(TokenKind::Else) {
        state.advance();
        result.add_child(block(state));
    }
    result
}

/// WhileStmt -> 'while' '(' Expression ')' Block
fn while_statement(state: &mut ParseState) -> Node {
    let mut result = Node::new(state.current().label());
    if !state.expect(TokenKind::While) {
        return state.recover(Nonterminal::WhileStatement, TokenKind::While);
    }
    if !state.expect(TokenKind::LeftParen) {
        return state.recover(Nonterminal::WhileStatement, TokenKind::LeftParen);
    }
    result.add_child(expression(state));
    if !state.expect(TokenKind::RightParen) {
        return state.recover(Nonterminal::WhileStatement, TokenKind::RightParen);
    }
    result.add_child(block(state));
    result
}

/// ReadStmt -> 'read' '(' Identifier ')' ';'
fn read_statement(state: &mut ParseState) -> Node {
    let mut result = Node::new(state.current().label());
    state.advance();

    if !state.expect(TokenKind::LeftParen) {
        return state.recover(Nonterminal::Statement, TokenKind::LeftParen);
    }
    if !state.check(TokenKind::Identifier) {
        return state.recover(Nonterminal::Statement, TokenKind::Identifier);
    }
    result.add_child(Node::new(state.current().label()));
    state.advance();

    if !state.expect(TokenKind::RightParen) {
        return state.recover(Nonterminal::Statement, TokenKind::RightParen);
    }
    if !state.expect(TokenKind::Semicolon) {
        return state.recover(Nonterminal::Statement, TokenKind::Semicolon);
    }
    result
}

/// WriteStmt -> 'write' '(' Expression ')' ';'
fn write_statement(state: &mut ParseState) -> Node {
    let mut result = Node::new(state.current().label());
    state.advance();

    if !state.expect(TokenKind::LeftParen) {
        return state.recover(Nonterminal::Statement, TokenKind::LeftParen);
    }
    result.add_child(expression(state));

    if !state.expect(TokenKind::RightParen) {
        return state.recover(Nonterminal::Statement, TokenKind::RightParen);
    }
    if !state.expect(TokenKind::Semicolon) {
        return state.recover(Nonterminal::Statement, TokenKind::Semicolon);
    }
    result
}
