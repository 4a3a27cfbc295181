use log::trace;

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Pull-based tokenizer over a decoded character buffer.
///
/// The lexer keeps no token history: every call to [`Lexer::next_token`]
/// scans exactly one token starting at the current character. Once the
/// input is exhausted it keeps returning `EOF`.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
    finished: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    fn at(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    fn advance(&mut self) {
        if let Some(current) = self.at() {
            if current == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.pos += 1;
        }
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Text between two character indices.
    fn slice(&self, start: usize, end: usize) -> String {
        self.source[start..end].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while self.at().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    pub fn next_token(&mut self) -> Token {
        let token = self.scan_token();
        trace!("lexed {}", token);
        token
    }

    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        let (line, column) = (self.line, self.column);
        let Some(current) = self.at() else {
            return MK_TOKEN!(TokenKind::EOF, "", line, column);
        };

        let (kind, width) = match (current, self.peek()) {
            ('-', Some('>')) => (TokenKind::Arrow, 2),
            ('=', Some('=')) => (TokenKind::Equals, 2),
            ('!', Some('=')) => (TokenKind::NotEquals, 2),
            ('<', Some('=')) => (TokenKind::LessEquals, 2),
            ('>', Some('=')) => (TokenKind::GreaterEquals, 2),
            ('+', _) => (TokenKind::Plus, 1),
            ('-', _) => (TokenKind::Dash, 1),
            ('*', _) => (TokenKind::Star, 1),
            ('/', _) => (TokenKind::Slash, 1),
            ('=', _) => (TokenKind::Assignment, 1),
            ('<', _) => (TokenKind::Less, 1),
            ('>', _) => (TokenKind::Greater, 1),
            ('(', _) => (TokenKind::OpenParen, 1),
            (')', _) => (TokenKind::CloseParen, 1),
            ('{', _) => (TokenKind::OpenCurly, 1),
            ('}', _) => (TokenKind::CloseCurly, 1),
            (',', _) => (TokenKind::Comma, 1),
            (';', _) => (TokenKind::Semicolon, 1),
            ('.', _) => (TokenKind::Dot, 1),
            ('"', _) => return self.read_string(line, column),
            (c, _) if is_letter(c) => return self.read_symbol(line, column),
            (c, _) if c.is_ascii_digit() => return self.read_number(line, column),
            _ => (TokenKind::Illegal, 1),
        };

        let value = self.slice(self.pos, self.pos + width);
        self.advance_n(width);

        MK_TOKEN!(kind, value, line, column)
    }

    fn read_while(&mut self, predicate: fn(char) -> bool) {
        while self.at().is_some_and(predicate) {
            self.advance();
        }
    }

    fn read_symbol(&mut self, line: u32, column: u32) -> Token {
        let start = self.pos;
        self.read_while(|c| is_letter(c) || c.is_alphanumeric());

        let value = self.slice(start, self.pos);
        let kind = RESERVED_LOOKUP
            .get(value.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        MK_TOKEN!(kind, value, line, column)
    }

    fn read_number(&mut self, line: u32, column: u32) -> Token {
        let start = self.pos;
        self.read_while(|c| c.is_ascii_digit());

        let mut kind = TokenKind::Int;
        if self.at() == Some('.') && self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.read_while(|c| c.is_ascii_digit());
            kind = TokenKind::Float;
        }

        MK_TOKEN!(kind, self.slice(start, self.pos), line, column)
    }

    fn read_string(&mut self, line: u32, column: u32) -> Token {
        let start = self.pos;
        self.advance();

        let mut result = String::new();

        loop {
            match self.at() {
                None => {
                    // Unterminated: report everything from the opening quote.
                    return MK_TOKEN!(TokenKind::Illegal, self.slice(start, self.pos), line, column);
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    let escaped = match self.peek() {
                        Some('n') => Some('\n'),
                        Some('t') => Some('\t'),
                        Some('r') => Some('\r'),
                        Some('\\') => Some('\\'),
                        Some('"') => Some('"'),
                        Some('0') => Some('\0'),
                        _ => None,
                    };

                    match escaped {
                        Some(ch) => {
                            result.push(ch);
                            self.advance_n(2);
                        }
                        None => {
                            // Keep the backslash, the next character is read normally.
                            result.push('\\');
                            self.advance();
                        }
                    }
                }
                Some(ch) => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        MK_TOKEN!(TokenKind::String, result, line, column)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token including the final `EOF`, then stops.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.finished = true;
        }

        Some(token)
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Tokenizes a whole buffer, including the trailing `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
