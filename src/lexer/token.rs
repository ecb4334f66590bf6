//! トークンの分類と固定テーブル

use logos::Logos;
use serde::Serialize;
use std::fmt;

/// Highlighting class of one scanned span.
///
/// Punctuation and whitespace are unclassified and show up as `None` wherever
/// an `Option<Style>` is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Keyword,
    Atom,
    Number,
    String,
    Comment,
    Operator,
    Variable,
}

impl Style {
    /// The style name an editor theme keys on.
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Keyword => "keyword",
            Style::Atom => "atom",
            Style::Number => "number",
            Style::String => "string",
            Style::Comment => "comment",
            Style::Operator => "operator",
            Style::Variable => "variable",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Punctuation seen by the scanner, consumed right away by the line driver
/// to push or pop nesting contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punct {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    LeftParen,
    RightParen,
    Comma,
    Semicolon,
    Colon,
    /// Never produced by the scanner: a `.` always starts a number span.
    Dot,
    /// Synthetic marker emitted for the `case` and `default` keywords.
    Case,
}

impl Punct {
    pub fn from_char(ch: char) -> Option<Self> {
        let punct = match ch {
            '{' => Punct::LeftBrace,
            '}' => Punct::RightBrace,
            '[' => Punct::LeftBracket,
            ']' => Punct::RightBracket,
            '(' => Punct::LeftParen,
            ')' => Punct::RightParen,
            ',' => Punct::Comma,
            ';' => Punct::Semicolon,
            ':' => Punct::Colon,
            '.' => Punct::Dot,
            _ => return None,
        };
        Some(punct)
    }
}

/// Keyword and atom tables, compiled into a static DFA.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Word {
    #[token("case")]
    #[token("default")]
    CaseLabel,

    #[token("break")]
    #[token("chan")]
    #[token("const")]
    #[token("continue")]
    #[token("defer")]
    #[token("else")]
    #[token("fallthrough")]
    #[token("for")]
    #[token("func")]
    #[token("go")]
    #[token("goto")]
    #[token("if")]
    #[token("import")]
    #[token("interface")]
    #[token("map")]
    #[token("package")]
    #[token("range")]
    #[token("return")]
    #[token("select")]
    #[token("struct")]
    #[token("switch")]
    #[token("type")]
    #[token("var")]
    // Predeclared types
    #[token("bool")]
    #[token("byte")]
    #[token("complex64")]
    #[token("complex128")]
    #[token("float32")]
    #[token("float64")]
    #[token("int8")]
    #[token("int16")]
    #[token("int32")]
    #[token("int64")]
    #[token("string")]
    #[token("uint8")]
    #[token("uint16")]
    #[token("uint32")]
    #[token("uint64")]
    #[token("int")]
    #[token("uint")]
    #[token("uintptr")]
    #[token("error")]
    #[token("rune")]
    #[token("any")]
    #[token("comparable")]
    Keyword,

    #[token("true")]
    #[token("false")]
    #[token("iota")]
    #[token("nil")]
    #[token("append")]
    #[token("cap")]
    #[token("close")]
    #[token("complex")]
    #[token("copy")]
    #[token("delete")]
    #[token("imag")]
    #[token("len")]
    #[token("make")]
    #[token("new")]
    #[token("panic")]
    #[token("print")]
    #[token("println")]
    #[token("real")]
    #[token("recover")]
    Atom,
}

impl Word {
    /// Looks `text` up in the tables. Only an exact, whole-word hit counts, so
    /// `cases` or `int80` are not keywords.
    pub(crate) fn classify(text: &str) -> Option<Self> {
        let mut lex = Word::lexer(text);
        match lex.next() {
            Some(Ok(word)) if lex.span() == (0..text.len()) => Some(word),
            _ => None,
        }
    }
}

/// Operator characters; a run of them forms one operator span.
pub fn is_operator_char(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-' | '*' | '&' | '^' | '%' | ':' | '=' | '<' | '>' | '!' | '|' | '/'
    )
}

/// Identifier characters: ASCII word characters, `$`, and anything from
/// U+00A1 upward standing in for non-ASCII letters.
pub fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' || ch >= '\u{a1}'
}
