//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry point.
//! The parser owns its Lexer and pulls tokens through a two-token window
//! (current + peek). Expressions are parsed with a Pratt approach using
//! NUD/LED handlers; statements use specialized handler functions.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer and maintains lookup tables for parsing
/// statements and expressions. It holds the two-token lookahead window and
/// accumulates diagnostics instead of aborting on the first error.
pub struct Parser {
    /// The lexer the parser pulls tokens from
    lexer: Lexer,
    /// The token currently under consideration
    cur_token: Token,
    /// The one-token lookahead
    peek_token: Token,
    /// Diagnostics collected so far, in source order
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// Reads two tokens from the lexer immediately, so the current and peek
    /// tokens are both valid before any parse call.
    ///
    /// # Arguments
    ///
    /// * `lexer` - The lexer to pull tokens from
    ///
    /// # Returns
    ///
    /// A new Parser instance ready to parse the token stream.
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Parser {
            lexer,
            cur_token,
            peek_token,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.cur_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.cur_token.kind
    }

    /// Returns the peek token without advancing.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Returns the kind of the peek token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Shifts the token window forward by one and returns the token that was
    /// current. The peek slot is refilled from the lexer, so both window
    /// slots are always valid.
    pub fn advance(&mut self) -> Token {
        let fresh = self.lexer.next_token();
        mem::replace(&mut self.cur_token, mem::replace(&mut self.peek_token, fresh))
    }

    /// Confirms that the current token is of the given kind.
    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    /// Confirms that the peek token is of the given kind.
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Expects the peek token to be of the specified kind.
    ///
    /// If it is, the window advances and the matched token (now current) is
    /// returned. If it is not, an error naming the expected and actual kinds
    /// is returned and the window does not move.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the peek token matches, otherwise an Error.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_is(expected_kind) {
            self.advance();
            Ok(self.cur_token.clone())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    received: self.peek_token.kind,
                },
                self.peek_token.span.start.clone(),
            ))
        }
    }

    /// Records a diagnostic without interrupting the parse.
    pub fn record_error(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Returns the diagnostics collected so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Skips forward to the next statement boundary after a failed
    /// statement, so the statement loop can keep going.
    pub fn synchronize(&mut self) {
        while !self.current_is(TokenKind::Semicolon) && !self.current_is(TokenKind::EOF) {
            self.advance();
        }
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this prefix token
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.cur_token.span.start.clone()
    }
}

/// Parses a source unit into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes all lookup tables, and parses statements until EOF. Failed
/// statements are recorded as diagnostics and skipped; the parse always
/// completes.
///
/// # Arguments
///
/// * `lexer` - The lexer for the source unit to parse
///
/// # Returns
///
/// A tuple containing:
/// - The Program (possibly partial when diagnostics were recorded)
/// - The ordered list of diagnostics
pub fn parse(lexer: Lexer) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(lexer);
    create_token_lookups(&mut parser);

    let start = parser.current_token().span.start.clone();
    let mut statements = vec![];

    while !parser.current_is(TokenKind::EOF) {
        match parse_stmt(&mut parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => {
                parser.record_error(error);
                parser.synchronize();
            }
        }
        parser.advance();
    }

    let end = parser.get_position();
    let program = Program {
        statements,
        span: Span { start, end },
    };

    (program, parser.errors)
}
