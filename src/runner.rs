//! Whole-document drivers: run the mode over every line the way an editor
//! does, either to collect highlighted spans or to re-indent the text.

use crate::config::ModeConfig;
use crate::lexer::Style;
use crate::mode::{GoMode, Indent, State};
use serde::Serialize;

/// One scanned span, byte offsets relative to its line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub style: Option<Style>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTokens {
    /// 1-based line number.
    pub line: usize,
    pub spans: Vec<Span>,
}

/// Tokenizes one line, advancing `state` past it. An empty line produces no
/// spans and leaves the state untouched.
pub fn highlight_line(mode: &GoMode, line: &str, state: &mut State) -> Vec<Span> {
    let mut stream = mode.line_stream(line);
    let mut spans = Vec::new();
    while !stream.eol() {
        let style = mode.token(&mut stream, state);
        spans.push(Span {
            start: stream.start(),
            end: stream.pos(),
            text: stream.current().to_string(),
            style,
        });
    }
    spans
}

pub fn highlight(mode: &GoMode, source: &str) -> Vec<LineTokens> {
    let mut state = mode.start_state(0);
    let lines: Vec<_> = source
        .lines()
        .enumerate()
        .map(|(i, line)| LineTokens {
            line: i + 1,
            spans: highlight_line(mode, line, &mut state),
        })
        .collect();
    log::debug!("highlighted {} lines", lines.len());
    lines
}

fn indentation(config: &ModeConfig, columns: i32) -> String {
    let columns = usize::try_from(columns).unwrap_or(0);
    if config.indent_with_tabs {
        let tab_size = config.tab_size.max(1) as usize;
        let mut out = "\t".repeat(columns / tab_size);
        out.push_str(&" ".repeat(columns % tab_size));
        out
    } else {
        " ".repeat(columns)
    }
}

/// Splits a line off its terminator (`\r\n`, `\n`, or none at end of input).
fn split_line_ending(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}

/// Replaces every line's leading whitespace with the mode's suggestion.
///
/// Lines inside a multi-line string or comment are kept verbatim; other blank
/// lines are emptied. Each line keeps its own terminator.
pub fn reindent(mode: &GoMode, source: &str) -> String {
    let mut state = mode.start_state(0);
    let mut out = String::with_capacity(source.len());
    let mut changed = 0;

    for raw in source.split_inclusive('\n') {
        let (line, ending) = split_line_ending(raw);
        let text = line.trim_start();
        // query a copy so a case label lookup does not touch the live state
        let new_line = match mode.indent(&mut state.clone(), text) {
            Indent::Pass => line.to_string(),
            Indent::Columns(_) if text.is_empty() => String::new(),
            Indent::Columns(columns) => {
                format!("{}{}", indentation(mode.config(), columns), text)
            }
        };
        if new_line != line {
            changed += 1;
        }
        highlight_line(mode, &new_line, &mut state);
        out.push_str(&new_line);
        out.push_str(ending);
    }
    log::debug!("re-indented {} lines", changed);
    out
}
