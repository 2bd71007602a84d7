//! # lparse - A Recursive-Descent Parser for the L Language
//!
//! L is a small imperative language with function definitions, `if`/`while`
//! control flow, `read`/`write` statements, and arithmetic/boolean
//! expressions with assignment sugar. This crate turns L source into a
//! concrete derivation tree, or — when the input is syntactically invalid —
//! into a list of positional diagnostics covering every error found in a
//! single pass.
//!
//! ## Pipeline
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Lexer] → Token Stream (ends in an end-of-input sentinel)
//!     ↓
//! [Parser] → Derivation Tree (tree::Node) or diagnostics
//!     ↓
//! [Renderer] → Indented textual tree (fmt)
//! ```
//!
//! ## Key Design Decisions
//!
//! ### One procedure per grammar rule
//! The parser is plain recursive descent: each non-terminal has one
//! procedure driving the token cursor, with a single precedence-climbing
//! routine covering all binary-operator levels. Grammar procedures never
//! fail abruptly — a mismatch records a diagnostic and recovery substitutes
//! a placeholder node, so one run reports every error it can find.
//!
//! ### Panic-mode recovery over follow sets
//! On a mismatch the parser skips forward to a token that may legally
//! follow the active rule, taken from a static follow-set table. The
//! end-of-input sentinel belongs to every follow set, which bounds the
//! whole parse by the token count.
//!
//! ### Parse-time desugaring
//! Compound assignments (`x += e`) and prefix steps (`++x`) are rewritten
//! into their expanded tree shapes (`x := x + e`, `x := x + 1`) while the
//! tree is built, so consumers only ever see core forms.
//!
//! ## Module Structure
//!
//! - [`lexer`] - Token model and tokenizer
//! - [`parser`] - Recursive-descent parser, recovery, diagnostics
//! - [`tree`] - Derivation-tree node
//! - [`fmt`] - Indented tree rendering
//!
//! ## Getting Started
//!
//! ```
//! use lparse::lexer::lex;
//! use lparse::parser::{parse, ParseState};
//!
//! let tokens = lex("write(1 + 2);").unwrap();
//! let mut state = ParseState::new(tokens);
//! let (tree, errors) = parse(&mut state);
//! assert!(errors.is_empty());
//! println!("{}", tree.unwrap());
//! ```

pub mod fmt;
pub mod lexer;
pub mod parser;
pub mod tree;
