//! Parser state and the program entry point.
//!
//! The parser looks at exactly two tokens: `current` and one token of
//! `lookahead`, refilled from the lexer on every [`Parser::advance`].
//! There is no backtracking. Problems are recorded as diagnostics and the
//! affected subtree is left absent, so a parse always runs to end of input.

use std::mem;

use log::{debug, trace, warn};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_stmt;

/// How many expressions and blocks may be open at once.
pub const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser {
    /// Token source, pulled one token at a time
    lexer: Lexer,
    /// The token the current production is looking at
    current: Token,
    /// The token after `current`
    lookahead: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Open expressions and blocks
    depth: usize,
}

impl Parser {
    /// Creates a parser and fills the two-token window.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let lookahead = lexer.next_token();

        Parser {
            lexer,
            current,
            lookahead,
            errors: vec![],
            depth: 0,
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn lookahead_token(&self) -> &Token {
        &self.lookahead
    }

    pub fn lookahead_kind(&self) -> TokenKind {
        self.lookahead.kind
    }

    /// Shifts the window by one token and returns the token that was current.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let lookahead = mem::replace(&mut self.lookahead, next);
        let previous = mem::replace(&mut self.current, lookahead);
        trace!("current: {}, lookahead: {}", self.current, self.lookahead);
        previous
    }

    /// Advances if the lookahead is of the expected kind and returns the
    /// new current token. Otherwise records an `UnexpectedToken` error and
    /// leaves the window untouched.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Option<Token> {
        if self.lookahead.kind == expected_kind {
            self.advance();
            Some(self.current.clone())
        } else {
            let found = self.lookahead.kind;
            let position = self.lookahead.position();
            self.error(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found,
                },
                position,
            );
            None
        }
    }

    pub fn error(&mut self, error_impl: ErrorImpl, position: Position) {
        let error = Error::new(error_impl, position);
        warn!("{}", error);
        self.errors.push(error);
    }

    /// Opens one level of nesting. At the limit this records a
    /// `NestingTooDeep` error at the current token and returns false.
    pub fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            let position = self.get_position();
            self.error(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                position,
            );
            return false;
        }

        self.depth += 1;
        true
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn get_position(&self) -> Position {
        self.current.position()
    }

    /// Parses statements until end of input.
    ///
    /// The returned program is always present; it may hold fewer statements
    /// than the source, or absent subtrees, when the error list is non-empty.
    pub fn parse_program(mut self) -> (Program, Vec<Error>) {
        let mut program = Program::default();

        while self.current_token_kind() != TokenKind::EOF {
            if let Some(stmt) = parse_stmt(&mut self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            "parsed {} statement(s) with {} error(s)",
            program.len(),
            self.errors.len()
        );

        (program, self.errors)
    }
}

/// Parses a complete source buffer.
///
/// This is the main entry point for parsing. It returns the program together
/// with every diagnostic recorded along the way; callers should treat a
/// non-empty list as a failed parse even though a program is still returned.
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    Parser::new(Lexer::new(source)).parse_program()
}
