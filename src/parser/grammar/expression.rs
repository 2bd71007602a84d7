//! Expression rules: the identifier-led three-way dispatch, function
//! calls, the precedence climber, and assignment-sugar rewriting.
//!
//! Sugar is rewritten structurally while the tree is built: `x += e`
//! yields the same tree as `x := x + e`, and `++x` the same tree as
//! `x := x + 1`, with the `1` synthesized as a literal node rather than
//! read from input.

use crate::lexer::TokenKind;
use crate::parser::follow::Nonterminal;
use crate::parser::ParseState;
use crate::tree::Node;

/// Binary-operator precedence levels, loosest binding first. `Power` is
/// right-associative and parsed by its own rule; all other levels build
/// left-associative chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Precedence {
    Or,
    And,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Power,
}

impl Precedence {
    fn tighter(self) -> Precedence {
        match self {
            Precedence::Or => Precedence::And,
            Precedence::And => Precedence::Equality,
            Precedence::Equality => Precedence::Relational,
            Precedence::Relational => Precedence::Additive,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Power,
            Precedence::Power => Precedence::Power,
        }
    }
}

fn level_of(kind: TokenKind) -> Option<Precedence> {
    match kind {
        TokenKind::Or => Some(Precedence::Or),
        TokenKind::And => Some(Precedence::And),
        TokenKind::Equals | TokenKind::NotEquals => Some(Precedence::Equality),
        TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals => Some(Precedence::Relational),
        TokenKind::Plus | TokenKind::Minus => Some(Precedence::Additive),
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Some(Precedence::Multiplicative),
        TokenKind::Caret => Some(Precedence::Power),
        _ => None,
    }
}

/// Arithmetic operator a compound assignment expands to, if any.
fn sugar_op(kind: TokenKind) -> Option<TokenKind> {
    match kind {
        TokenKind::PlusAssign => Some(TokenKind::Plus),
        TokenKind::MinusAssign => Some(TokenKind::Minus),
        TokenKind::StarAssign => Some(TokenKind::Star),
        TokenKind::SlashAssign => Some(TokenKind::Slash),
        TokenKind::PercentAssign => Some(TokenKind::Percent),
        _ => None,
    }
}

/// Expression -> Assign | Call | Clause
///
/// An identifier-led expression is disambiguated by the token after the
/// identifier: an assignment operator, a `(` or `.`, or anything else. The
/// decision is made on two peeked tokens, so the cursor never rewinds.
pub(crate) fn expression(state: &mut ParseState) -> Node {
    if state.check(TokenKind::Identifier) {
        match state.peek_next().kind {
            TokenKind::Assign
            | TokenKind::PlusAssign
            | TokenKind::MinusAssign
            | TokenKind::StarAssign
            | TokenKind::SlashAssign
            | TokenKind::PercentAssign => assignment(state),
            TokenKind::LeftParen | TokenKind::Dot => call(state),
            _ => binary(state, Precedence::Or),
        }
    } else {
        binary(state, Precedence::Or)
    }
}

/// Assign -> Identifier (':=' | '+=' | '-=' | '*=' | '/=' | '%=') Expression
///
/// Compound forms desugar here: the node is always labeled `:=`, and the
/// right child of a compound form is a synthesized operator node over the
/// assigned identifier and the parsed right-hand side.
fn assignment(state: &mut ParseState) -> Node {
    let name = state.current().label();
    state.advance();
    let op = state.current().kind;
    state.advance();

    let value = expression(state);

    let mut result = Node::new(TokenKind::Assign.lexeme());
    result.add_child(Node::new(name.clone()));
    match sugar_op(op) {
        Some(binop) => {
            let mut sugar = Node::new(binop.lexeme());
            sugar.add_child(Node::new(name));
            sugar.add_child(value);
            result.add_child(sugar);
        }
        None => result.add_child(value),
    }
    result
}

/// Call -> Identifier '.' Call | Identifier Args
///
/// Dotted composition nests to the right: `f.g(x)` is a call to `f` whose
/// single child is an `Arguments` wrapper holding the call `g(x)`.
fn call(state: &mut ParseState) -> Node {
    if !state.check(TokenKind::Identifier) {
        return state.recover(Nonterminal::Call, TokenKind::Identifier);
    }
    let mut result = Node::new(format!("Call:{}", state.current().label()));
    state.advance();

    if state.check(TokenKind::Dot) {
        state.advance();
        let mut args = Node::new("Arguments");
        args.add_child(call(state));
        result.add_child(args);
    } else if state.check(TokenKind::LeftParen) {
        result.add_child(arguments(state));
    }
    result
}

/// Args -> '(' (Expression (',' Expression)*)? ')'
fn arguments(state: &mut ParseState) -> Node {
    if !state.expect(TokenKind::LeftParen) {
        return state.recover(Nonterminal::Arguments, TokenKind::LeftParen);
    }
    let mut result = Node::new("Arguments");

    if !state.check(TokenKind::RightParen) {
        result.add_child(expression(state));
    }
    while state.check(TokenKind::Comma) {
        state.advance();
        result.add_child(expression(state));
    }

    if !state.expect(TokenKind::RightParen) {
        return state.recover(Nonterminal::Arguments, TokenKind::RightParen);
    }
    result
}

/// Left-associative climb at one precedence level: parse the next-tighter
/// level, then fold any number of operators at exactly this level into a
/// left-leaning chain.
fn binary(state: &mut ParseState, level: Precedence) -> Node {
    let lower = level.tighter();
    let mut result = if lower == Precedence::Power {
        power(state)
    } else {
        binary(state, lower)
    };

    while level_of(state.current().kind) == Some(level) {
        let mut op_node = Node::new(state.current().label());
        state.advance();
        op_node.add_child(result);
        op_node.add_child(if lower == Precedence::Power {
            power(state)
        } else {
            binary(state, lower)
        });
        result = op_node;
    }
    result
}

/// Power -> Atom ('^' Power)?
///
/// Right-associative: the right operand recurses into this rule, not into
/// the atom, so `a^b^c` nests to the right.
fn power(state: &mut ParseState) -> Node {
    let mut result = atom(state);

    if level_of(state.current().kind) == Some(Precedence::Power) {
        let mut op_node = Node::new(state.current().label());
        state.advance();
        op_node.add_child(result);
        op_node.add_child(power(state));
        result = op_node;
    }
    result
}

/// Atom -> '(' Expression ')' | Call | ('++' | '--') Identifier
///       | Number | Boolean | Identifier
fn atom(state: &mut ParseState) -> Node {
    match state.current().kind {
        TokenKind::LeftParen => {
            state.advance();
            let result = expression(state);
            if !state.expect(TokenKind::RightParen) {
                return state.recover(Nonterminal::Atom, TokenKind::RightParen);
            }
            result
        }
        TokenKind::Identifier => {
            if state.peek_next().kind == TokenKind::LeftParen {
                call(state)
            } else {
                let leaf = Node::new(state.current().label());
                state.advance();
                leaf
            }
        }
        TokenKind::Increment => prefix_step(state, TokenKind::Plus),
        TokenKind::Decrement => prefix_step(state, TokenKind::Minus),
        TokenKind::Number | TokenKind::Boolean => {
            let leaf = Node::new(state.current().label());
            state.advance();
            leaf
        }
        _ => state.recover(Nonterminal::Atom, TokenKind::Identifier),
    }
}

/// `++x` / `--x`, rewritten to `x := x + 1` / `x := x - 1` with a
/// synthesized literal `1`.
fn prefix_step(state: &mut ParseState, op: TokenKind) -> Node {
    state.advance();
    if !state.check(TokenKind::Identifier) {
        return state.recover(Nonterminal::Atom, TokenKind::Identifier);
    }
    let name = state.current().label();
    state.advance();

    let mut sugar = Node::new(op.lexeme());
    sugar.add_child(Node::new(name.clone()));
    sugar.add_child(Node::new("1"));

    let mut result = Node::new(TokenKind::Assign.lexeme());
    result.add_child(Node::new(name));
    result.add_child(sugar);
    result
}
