//! Position-tracked cursor over deck code text.

use thiserror::Error;

/// A parse failure at a byte offset.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("expected {expected} at byte {position}")]
pub struct ParseError {
    pub position: usize,
    pub expected: &'static str,
}

/// Forward-only cursor over a string.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Current byte offset.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed input.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance by `n` bytes. `n` must land on a char boundary.
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.src.len());
    }

    /// Consume `c` if it is next.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `c` or fail.
    pub fn expect(&mut self, c: char, expected: &'static str) -> Result<(), ParseError> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    /// Consume the longest prefix whose chars satisfy `pred`.
    pub fn take_while<F>(&mut self, pred: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let rest = self.rest();
        let len = rest.find(|c| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Consume a run of ASCII digits as a number.
    pub fn number(&mut self, expected: &'static str) -> Result<u32, ParseError> {
        let start = self.pos;
        let digits = self.take_while(|c| c.is_ascii_digit());
        digits.parse().map_err(|_| ParseError {
            position: start,
            expected,
        })
    }

    /// A `ParseError` at the current position.
    #[must_use]
    pub fn error(&self, expected: &'static str) -> ParseError {
        ParseError {
            position: self.pos,
            expected,
        }
    }
}
