//! 字句スキャナ
//!
//! Consumes one lexical span from a [`LineStream`] and classifies it. The only
//! state that survives a call is the continuation mode, which carries an
//! unterminated string or block comment over to the next line.

use super::literal_parser::{decimal_tail, fraction_tail, hex_tail, octal_tail};
use super::stream::LineStream;
use super::token::{is_ident_char, is_operator_char, Punct, Style, Word};

/// Opening quote of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    Double,
    Single,
    /// Raw string: no escapes, may span lines.
    Backtick,
}

impl Quote {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '"' => Some(Quote::Double),
            '\'' => Some(Quote::Single),
            '`' => Some(Quote::Backtick),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
            Quote::Backtick => '`',
        }
    }

    pub fn is_raw(self) -> bool {
        self == Quote::Backtick
    }
}

/// Which sub-scanner handles the next span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tokenize {
    #[default]
    Base,
    InString(Quote),
    InComment,
}

impl Tokenize {
    pub fn is_continuation(self) -> bool {
        self != Tokenize::Base
    }
}

/// Result of scanning one span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scan {
    pub style: Option<Style>,
    pub punct: Option<Punct>,
}

impl Scan {
    fn styled(style: Style) -> Self {
        Self {
            style: Some(style),
            punct: None,
        }
    }

    fn punct(punct: Punct) -> Self {
        Self {
            style: None,
            punct: Some(punct),
        }
    }
}

/// Scans one span in the mode given by `tokenize`, updating the mode when a
/// string or comment opens or closes.
///
/// The stream must not be at end of line; every call consumes at least one
/// character otherwise.
pub fn scan(stream: &mut LineStream<'_>, tokenize: &mut Tokenize) -> Scan {
    match *tokenize {
        Tokenize::Base => scan_base(stream, tokenize),
        Tokenize::InString(quote) => scan_string(stream, quote, tokenize),
        Tokenize::InComment => scan_comment(stream, tokenize),
    }
}

fn scan_base(stream: &mut LineStream<'_>, tokenize: &mut Tokenize) -> Scan {
    let Some(ch) = stream.next_char() else {
        return Scan::default();
    };

    if let Some(quote) = Quote::from_char(ch) {
        *tokenize = Tokenize::InString(quote);
        return scan_string(stream, quote, tokenize);
    }

    // '.' is also punctuation, but a number always wins
    if ch.is_ascii_digit() || ch == '.' {
        match ch {
            '.' => {
                stream.eat_match(fraction_tail);
            }
            '0' => {
                if !stream.eat_match(hex_tail) {
                    stream.eat_match(octal_tail);
                }
            }
            _ => {
                stream.eat_match(decimal_tail);
            }
        }
        return Scan::styled(Style::Number);
    }

    if let Some(punct) = Punct::from_char(ch) {
        return Scan::punct(punct);
    }

    if ch == '/' {
        if stream.eat('*') {
            *tokenize = Tokenize::InComment;
            return scan_comment(stream, tokenize);
        }
        if stream.eat('/') {
            stream.skip_to_end();
            return Scan::styled(Style::Comment);
        }
    }

    if is_operator_char(ch) {
        stream.eat_while(is_operator_char);
        return Scan::styled(Style::Operator);
    }

    stream.eat_while(is_ident_char);
    match Word::classify(stream.current()) {
        Some(Word::CaseLabel) => Scan {
            style: Some(Style::Keyword),
            punct: Some(Punct::Case),
        },
        Some(Word::Keyword) => Scan::styled(Style::Keyword),
        Some(Word::Atom) => Scan::styled(Style::Atom),
        None => Scan::styled(Style::Variable),
    }
}

/// Consumes string body up to and including the closing quote. Without one,
/// the whole rest of the line is string and the mode stays open.
fn scan_string(stream: &mut LineStream<'_>, quote: Quote, tokenize: &mut Tokenize) -> Scan {
    let mut escaped = false;
    let mut closed = false;
    while let Some(next) = stream.next_char() {
        if next == quote.as_char() && !escaped {
            closed = true;
            break;
        }
        escaped = !escaped && !quote.is_raw() && next == '\\';
    }
    *tokenize = if closed {
        Tokenize::Base
    } else {
        Tokenize::InString(quote)
    };
    Scan::styled(Style::String)
}

fn scan_comment(stream: &mut LineStream<'_>, tokenize: &mut Tokenize) -> Scan {
    let mut maybe_end = false;
    while let Some(ch) = stream.next_char() {
        if ch == '/' && maybe_end {
            *tokenize = Tokenize::Base;
            break;
        }
        maybe_end = ch == '*';
    }
    Scan::styled(Style::Comment)
}
