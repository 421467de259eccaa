use std::rc::Rc;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

#[derive(Clone)]
pub struct Lexer {
    source: Vec<u8>,
    pos: usize,
    read_pos: usize,
    ch: u8, // Current char under examination, 0 at end of input
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lex = Lexer {
            source: source.into_bytes(),
            pos: 0,
            read_pos: 0,
            ch: 0,
            file: file_name,
        };
        lex.read_char();
        lex
    }

    fn read_char(&mut self) {
        if self.read_pos >= self.source.len() {
            self.ch = 0;
        } else {
            self.ch = self.source[self.read_pos];
        }
        self.pos = self.read_pos;
        self.read_pos += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_pos >= self.source.len() {
            0
        } else {
            self.source[self.read_pos]
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn make_span(&self, start: usize, end: usize) -> Span {
        Span {
            start: Position(start as u32, Rc::clone(&self.file)),
            end: Position(end as u32, Rc::clone(&self.file)),
        }
    }

    /// Returns the next token in the source, consuming the characters that
    /// form it. At end of input this returns an EOF token, and keeps
    /// returning EOF tokens on every subsequent call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    MK_TOKEN!(
                        TokenKind::Equals,
                        String::from("=="),
                        self.make_span(start, start + 2)
                    )
                } else {
                    MK_TOKEN!(
                        TokenKind::Assignment,
                        String::from("="),
                        self.make_span(start, start + 1)
                    )
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    MK_TOKEN!(
                        TokenKind::NotEquals,
                        String::from("!="),
                        self.make_span(start, start + 2)
                    )
                } else {
                    MK_TOKEN!(
                        TokenKind::Not,
                        String::from("!"),
                        self.make_span(start, start + 1)
                    )
                }
            }
            b';' => MK_TOKEN!(
                TokenKind::Semicolon,
                String::from(";"),
                self.make_span(start, start + 1)
            ),
            b',' => MK_TOKEN!(
                TokenKind::Comma,
                String::from(","),
                self.make_span(start, start + 1)
            ),
            b'(' => MK_TOKEN!(
                TokenKind::OpenParen,
                String::from("("),
                self.make_span(start, start + 1)
            ),
            b')' => MK_TOKEN!(
                TokenKind::CloseParen,
                String::from(")"),
                self.make_span(start, start + 1)
            ),
            b'{' => MK_TOKEN!(
                TokenKind::OpenCurly,
                String::from("{"),
                self.make_span(start, start + 1)
            ),
            b'}' => MK_TOKEN!(
                TokenKind::CloseCurly,
                String::from("}"),
                self.make_span(start, start + 1)
            ),
            b'+' => MK_TOKEN!(
                TokenKind::Plus,
                String::from("+"),
                self.make_span(start, start + 1)
            ),
            b'-' => MK_TOKEN!(
                TokenKind::Dash,
                String::from("-"),
                self.make_span(start, start + 1)
            ),
            b'*' => MK_TOKEN!(
                TokenKind::Star,
                String::from("*"),
                self.make_span(start, start + 1)
            ),
            b'/' => MK_TOKEN!(
                TokenKind::Slash,
                String::from("/"),
                self.make_span(start, start + 1)
            ),
            b'<' => MK_TOKEN!(
                TokenKind::Less,
                String::from("<"),
                self.make_span(start, start + 1)
            ),
            b'>' => MK_TOKEN!(
                TokenKind::Greater,
                String::from(">"),
                self.make_span(start, start + 1)
            ),
            0 => {
                return MK_TOKEN!(
                    TokenKind::EOF,
                    String::new(),
                    self.make_span(start, start)
                );
            }
            ch if is_letter(ch) => {
                return self.read_symbol(start);
            }
            ch if ch.is_ascii_digit() => {
                return self.read_number(start);
            }
            ch => MK_TOKEN!(
                TokenKind::Illegal,
                (ch as char).to_string(),
                self.make_span(start, start + 1)
            ),
        };

        self.read_char();
        token
    }

    fn read_symbol(&mut self, start: usize) -> Token {
        while is_letter(self.ch) || self.ch.is_ascii_digit() {
            self.read_char();
        }

        let value = String::from_utf8_lossy(&self.source[start..self.pos]).into_owned();
        let span = self.make_span(start, self.pos);

        if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
            MK_TOKEN!(*kind, value, span)
        } else {
            MK_TOKEN!(TokenKind::Identifier, value, span)
        }
    }

    fn read_number(&mut self, start: usize) -> Token {
        while self.ch.is_ascii_digit() {
            self.read_char();
        }

        let value = String::from_utf8_lossy(&self.source[start..self.pos]).into_owned();
        let span = self.make_span(start, self.pos);

        MK_TOKEN!(TokenKind::Number, value, span)
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Scans the whole source up front and returns every token including the
/// trailing EOF. Convenience wrapper over [`Lexer::next_token`] for callers
/// that want the full stream at once.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
