use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

/// Single pass cursor over a source string.
///
/// `start..current` is the lexeme being built. Both are byte offsets; every
/// character the scanner stops on is ASCII, so slices always land on a
/// character boundary.
pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            tokens: vec![],
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Consumes the scanner and returns every token followed by `EOF`.
    ///
    /// Stops at the first lexical error; nothing scanned before it is
    /// returned.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, Error> {
        while !self.at_eof() {
            self.start = self.current;

            if let Some(token) = self.scan_token()? {
                self.tokens.push(token);
            }
        }

        self.tokens.push(MK_TOKEN!(TokenKind::EOF, ""; self.line));
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<Option<Token>, Error> {
        let c = self.advance();

        let token = match c {
            b'(' => MK_TOKEN!(TokenKind::LeftParen, "("; self.line),
            b')' => MK_TOKEN!(TokenKind::RightParen, ")"; self.line),
            b'{' => MK_TOKEN!(TokenKind::LeftBrace, "{"; self.line),
            b'}' => MK_TOKEN!(TokenKind::RightBrace, "}"; self.line),
            b',' => MK_TOKEN!(TokenKind::Comma, ","; self.line),
            b'.' => MK_TOKEN!(TokenKind::Dot, "."; self.line),
            b'-' => MK_TOKEN!(TokenKind::Minus, "-"; self.line),
            b'+' => MK_TOKEN!(TokenKind::Plus, "+"; self.line),
            b';' => MK_TOKEN!(TokenKind::Semicolon, ";"; self.line),
            b'*' => MK_TOKEN!(TokenKind::Star, "*"; self.line),

            b'!' => self.either(b'=', TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.either(b'=', TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.either(b'=', TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.either(b'=', TokenKind::GreaterEqual, TokenKind::Greater),

            b'/' => {
                if self.matches(b'/') {
                    self.line_comment();
                    return Ok(None);
                } else if self.matches(b'*') {
                    self.block_comment()?;
                    return Ok(None);
                }

                MK_TOKEN!(TokenKind::Slash, "/"; self.line)
            }

            b' ' | b'\r' | b'\t' => return Ok(None),
            b'\n' => {
                self.line += 1;
                return Ok(None);
            }

            b'"' => self.string()?,
            c if c.is_ascii_digit() => self.number()?,
            c if is_alpha(c) => self.identifier(),

            _ => {
                let character = self.source[self.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);

                return Err(Error::new(
                    ErrorImpl::UnexpectedCharacter { character },
                    self.line,
                ));
            }
        };

        Ok(Some(token))
    }

    fn either(&mut self, expected: u8, matched: TokenKind, otherwise: TokenKind) -> Token {
        let kind = if self.matches(expected) { matched } else { otherwise };
        MK_TOKEN!(kind, self.lexeme(); self.line)
    }

    // The terminating newline is left for the next iteration.
    fn line_comment(&mut self) {
        while !self.at_eof() && self.peek() != b'\n' {
            self.advance();
        }
    }

    fn block_comment(&mut self) -> Result<(), Error> {
        while !self.at_eof() && !(self.peek() == b'*' && self.peek_next() == b'/') {
            if self.peek() == b'\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            return Err(Error::new(ErrorImpl::UnterminatedBlockComment, self.line));
        }

        self.advance();
        self.advance();
        Ok(())
    }

    fn string(&mut self) -> Result<Token, Error> {
        while !self.at_eof() && self.peek() != b'"' {
            if self.peek() == b'\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            return Err(Error::new(ErrorImpl::UnterminatedString, self.line));
        }

        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        Ok(MK_TOKEN!(
            TokenKind::String,
            self.lexeme(),
            Literal::String(String::from(value));
            self.line
        ))
    }

    fn number(&mut self) -> Result<Token, Error> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A '.' only starts a fraction when a digit follows it.
        if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            self.advance();

            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text = self.lexeme();
        let float_error = || {
            Error::new(
                ErrorImpl::FloatParseFailure {
                    token: String::from(text),
                },
                self.line,
            )
        };

        // Out of range literals parse as infinity.
        let value = text.parse::<f64>().map_err(|_| float_error())?;
        if !value.is_finite() {
            return Err(float_error());
        }

        Ok(MK_TOKEN!(TokenKind::Number, text, Literal::Number(value); self.line))
    }

    fn identifier(&mut self) -> Token {
        while is_alpha_numeric(self.peek()) {
            self.advance();
        }

        let text = self.lexeme();
        let kind = RESERVED_LOOKUP
            .get(text)
            .copied()
            .unwrap_or(TokenKind::Identifier);

        MK_TOKEN!(kind, text; self.line)
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn matches(&mut self, expected: u8) -> bool {
        if self.at_eof() || self.peek() != expected {
            return false;
        }

        self.current += 1;
        true
    }

    fn advance(&mut self) -> u8 {
        let c = self.source.as_bytes()[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> u8 {
        self.source.as_bytes().get(self.current).copied().unwrap_or(b'\0')
    }

    fn peek_next(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.current + 1)
            .copied()
            .unwrap_or(b'\0')
    }

    fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }
}

fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_alpha_numeric(c: u8) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

pub fn scan(source: &str) -> Result<Vec<Token>, Error> {
    Scanner::new(source).scan_tokens()
}
