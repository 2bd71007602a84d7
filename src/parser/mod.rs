//! Recursive-descent parser for L.
//!
//! [`ParseState`] owns all mutable state of one parse run: the token
//! cursor and the accumulated diagnostics. Grammar procedures live in
//! [`grammar`] and drive the cursor exclusively through the methods here;
//! on a mismatch they call [`ParseState::recover`], which records a
//! diagnostic, skips ahead to the active rule's follow set, and hands back
//! a placeholder node so the enclosing rule can keep going. Errors are
//! never propagated by unwinding.

mod follow;
mod grammar;

pub use follow::Nonterminal;
pub use grammar::parse;

use std::fmt;

use crate::lexer::{Token, TokenKind};
use crate::tree::Node;

use follow::follow_set;

/// A single syntax error: the token kind that was expected and the
/// position of the token found instead.
///
/// Displays as `Line <line>, position <column>: <Kind> expected.`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub expected: TokenKind,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}, position {}: {} expected.",
            self.line, self.column, self.expected
        )
    }
}

impl std::error::Error for SyntaxError {}

/// Mutable state of one parse run. Not reentrant; drive it to completion
/// with [`parse`] and discard it.
pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
    errors: Vec<SyntaxError>,
}

impl ParseState {
    /// Wrap a token sequence for parsing.
    ///
    /// The grammar procedures require the end-of-input sentinel; if the
    /// supplied sequence lacks one, it is appended here.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let (line, column) = tokens
                .last()
                .map(|t| (t.line, t.column))
                .unwrap_or((1, 1));
            tokens.push(Token::new(TokenKind::Eof, line, column));
        }
        Self {
            tokens,
            index: 0,
            errors: Vec::new(),
        }
    }

    /// Token at the cursor; reads past the end yield the sentinel.
    pub fn current(&self) -> &Token {
        &self.tokens[self.index.min(self.tokens.len() - 1)]
    }

    /// Token one past the cursor, clamped the same way as [`current`].
    ///
    /// This is the single token of lookahead used to pick between
    /// assignment, call, and plain expression after an identifier.
    ///
    /// [`current`]: ParseState::current
    pub fn peek_next(&self) -> &Token {
        &self.tokens[(self.index + 1).min(self.tokens.len() - 1)]
    }

    pub fn advance(&mut self) {
        self.index += 1;
    }

    /// Non-consuming kind test.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Consume one token if it has the given kind. On a mismatch the
    /// cursor does not move; the caller decides how to recover.
    pub fn expect(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Record a diagnostic at the current token, skip to the follow set of
    /// the active rule, and return a placeholder node for the subtree that
    /// could not be built.
    ///
    /// `Eof` is in every follow set, so the skip loop always halts.
    pub(crate) fn recover(&mut self, rule: Nonterminal, expected: TokenKind) -> Node {
        let found = self.current();
        let (line, column) = (found.line, found.column);
        self.errors.push(SyntaxError {
            expected,
            line,
            column,
        });

        let follow = follow_set(rule);
        while !follow.contains(&self.current().kind) {
            self.advance();
        }

        Node::error(expected)
    }

    pub(crate) fn take_errors(&mut self) -> Vec<SyntaxError> {
        std::mem::take(&mut self.errors)
    }
}
