//! One-line cursor handed to the tokenizer by the line driver.

use nom::IResult;

/// Column of byte offset `end` in `text`, expanding tabs to `tab_size` stops.
pub fn count_column(text: &str, end: usize, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    text[..end].chars().fold(0, |column, ch| {
        if ch == '\t' {
            column + tab_size - column % tab_size
        } else {
            column + 1
        }
    })
}

/// Cursor over a single source line.
///
/// `start..pos` is the span of the token being scanned; the line driver moves
/// `start` up to `pos` before every token.
#[derive(Debug, Clone)]
pub struct LineStream<'a> {
    string: &'a str,
    pos: usize,
    start: usize,
    tab_size: usize,
}

impl<'a> LineStream<'a> {
    pub fn new(string: &'a str, tab_size: usize) -> Self {
        Self {
            string,
            pos: 0,
            start: 0,
            tab_size,
        }
    }

    pub fn string(&self) -> &'a str {
        self.string
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Start of line: nothing consumed yet.
    pub fn sol(&self) -> bool {
        self.pos == 0
    }

    /// End of line.
    pub fn eol(&self) -> bool {
        self.pos >= self.string.len()
    }

    pub fn start_token(&mut self) {
        self.start = self.pos;
    }

    /// Unconsumed remainder of the line.
    pub fn rest(&self) -> &'a str {
        &self.string[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        self.pos > start
    }

    pub fn eat_space(&mut self) -> bool {
        self.eat_while(char::is_whitespace)
    }

    pub fn skip_to_end(&mut self) {
        self.pos = self.string.len();
    }

    /// Runs a recognizer on the remainder and consumes what it matched.
    /// Nothing is consumed when it fails.
    pub fn eat_match<F>(&mut self, mut parser: F) -> bool
    where
        F: FnMut(&'a str) -> IResult<&'a str, &'a str>,
    {
        match parser(self.rest()) {
            Ok((_, matched)) => {
                self.pos += matched.len();
                true
            }
            Err(_) => false,
        }
    }

    /// Text of the current token.
    pub fn current(&self) -> &'a str {
        &self.string[self.start..self.pos]
    }

    /// Visual column of the current token's start.
    pub fn column(&self) -> usize {
        count_column(self.string, self.start, self.tab_size)
    }

    /// Visual width of the line's leading whitespace.
    pub fn indentation(&self) -> usize {
        let text = self.string.trim_start_matches(char::is_whitespace);
        count_column(self.string, self.string.len() - text.len(), self.tab_size)
    }
}
