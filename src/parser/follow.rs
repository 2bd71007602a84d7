//! Synchronization data for panic-mode recovery.
//!
//! Each grammar rule that can raise a syntax error has a follow set: the
//! token kinds that may legally appear immediately after that rule. On a
//! mismatch the parser skips ahead to the nearest member of the active
//! rule's follow set and resumes there. `Eof` is a member of every set, so
//! the skip loop always halts.

use crate::lexer::TokenKind;

/// Grammar rule active when a syntax error is raised. Only used to pick a
/// follow set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nonterminal {
    FunctionDef,
    Parameters,
    Block,
    Statement,
    IfStatement,
    WhileStatement,
    Call,
    Arguments,
    Atom,
}

pub(crate) fn follow_set(rule: Nonterminal) -> &'static [TokenKind] {
    use TokenKind::*;

    match rule {
        Nonterminal::FunctionDef => &[
            Def, If, While, Read, Write, Identifier, Number, Boolean, LeftParen, Increment,
            Decrement, Eof,
        ],
        Nonterminal::Parameters => &[LeftBrace, Eof],
        Nonterminal::Block => &[
            Def, Else, If, While, Read, Write, Identifier, Number, Boolean, LeftParen, Increment,
            Decrement, RightBrace, Eof,
        ],
        Nonterminal::Statement | Nonterminal::IfStatement | Nonterminal::WhileStatement => &[
            If, While, Read, Write, Identifier, Number, Boolean, LeftParen, Increment, Decrement,
            RightBrace, Eof,
        ],
        Nonterminal::Call | Nonterminal::Arguments => &[Semicolon, RightParen, Comma, Eof],
        Nonterminal::Atom => &[
            Or, And, Equals, NotEquals, Less, LessEquals, Greater, GreaterEquals, Plus, Minus,
            Star, Slash, Percent, Caret, Semicolon, RightParen, Comma, Eof,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_RULES: [Nonterminal; 9] = [
        Nonterminal::FunctionDef,
        Nonterminal::Parameters,
        Nonterminal::Block,
        Nonterminal::Statement,
        Nonterminal::IfStatement,
        Nonterminal::WhileStatement,
        Nonterminal::Call,
        Nonterminal::Arguments,
        Nonterminal::Atom,
    ];

    #[test]
    fn every_follow_set_contains_eof() {
        for rule in ALL_RULES {
            assert!(
                follow_set(rule).contains(&TokenKind::Eof),
                "{rule:?} is missing Eof"
            );
        }
    }

    /// A statement's follow set must let recovery resume at the next
    /// statement, or the block/program loops would skip too far.
    #[test]
    fn statement_follow_allows_the_next_statement() {
        let statement_start = [
            TokenKind::If,
            TokenKind::While,
            TokenKind::Read,
            TokenKind::Write,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Boolean,
            TokenKind::LeftParen,
            TokenKind::Increment,
            TokenKind::Decrement,
        ];
        for kind in statement_start {
            assert!(follow_set(Nonterminal::Statement).contains(&kind));
        }
    }
}
