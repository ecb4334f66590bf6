//! Line driver and indentation policy.
//!
//! [`GoMode::token`] is called repeatedly over one line; besides classifying
//! each span it keeps the context stack in step with the brackets it sees.
//! [`GoMode::indent`] then answers how far the next line should be indented.

pub mod context;
pub mod state;

pub use context::{Align, Context, ContextKind, ContextStack};
pub use state::State;

use crate::config::ModeConfig;
use crate::error::ConfigResult;
use crate::lexer::literal_parser::starts_with_case_label;
use crate::lexer::{scan, LineStream, Punct, Scan, Style};
use crate::registry::{ModeSpec, GO_MODE_SPEC};

/// Indentation suggested for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Columns(i32),
    /// No suggestion; the host keeps its default behavior.
    Pass,
}

impl Indent {
    pub fn columns(self) -> Option<i32> {
        match self {
            Indent::Columns(columns) => Some(columns),
            Indent::Pass => None,
        }
    }
}

fn to_column(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

#[derive(Debug, Clone, Default)]
pub struct GoMode {
    config: ModeConfig,
}

impl GoMode {
    pub fn new(config: ModeConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ModeConfig {
        &self.config
    }

    /// Static metadata the host registers alongside the mode.
    pub fn spec(&self) -> &'static ModeSpec {
        &GO_MODE_SPEC
    }

    pub fn indent_unit(&self) -> i32 {
        i32::try_from(self.config.indent_unit).unwrap_or(i32::MAX)
    }

    /// Stream over `line` using the configured tab size.
    pub fn line_stream<'a>(&self, line: &'a str) -> LineStream<'a> {
        LineStream::new(line, self.config.tab_size as usize)
    }

    pub fn start_state(&self, base_column: i32) -> State {
        State::new(base_column.saturating_sub(self.indent_unit()))
    }

    /// Consumes one span of the line and returns its style.
    ///
    /// Whitespace and punctuation come back as `None`. Calling this at the end
    /// of the line consumes nothing and also returns `None`.
    pub fn token(&self, stream: &mut LineStream<'_>, state: &mut State) -> Option<Style> {
        stream.start_token();
        if stream.sol() {
            let head = state.context.head_mut();
            if head.align == Align::Unresolved {
                head.align = Align::Indent;
            }
            if head.kind == ContextKind::Case {
                head.kind = ContextKind::Brace;
            }
            state.indented = to_column(stream.indentation());
            state.start_of_line = true;
        }
        if stream.eat_space() || stream.eol() {
            return None;
        }

        let before = state.tokenize;
        let Scan { style, punct } = scan(stream, &mut state.tokenize);
        if state.tokenize != before {
            log::trace!("tokenize {:?} -> {:?}", before, state.tokenize);
        }
        if style == Some(Style::Comment) {
            return style;
        }

        let head = state.context.head_mut();
        if head.align == Align::Unresolved {
            head.align = Align::Column;
        }
        let head_kind = head.kind;

        if let Some(punct) = punct {
            if let Some(kind) = ContextKind::opened_by(punct) {
                state.push_context(to_column(stream.column()), kind);
            } else if punct == Punct::Case {
                state.context.head_mut().kind = ContextKind::Case;
            } else if head_kind.is_closed_by(punct) {
                state.pop_context();
            }
        }
        state.start_of_line = false;
        style
    }

    /// Indentation for a line beginning with `text_after` (leading whitespace
    /// is ignored), given the state after the previous line.
    ///
    /// A pending case block whose next line is another `case`/`default` label
    /// is closed here, so the state is taken mutably.
    pub fn indent(&self, state: &mut State, text_after: &str) -> Indent {
        if state.tokenize.is_continuation() {
            return Indent::Pass;
        }
        let text_after = text_after.trim_start();
        let head = state.context.head_mut();
        if head.kind == ContextKind::Case && starts_with_case_label(text_after) {
            head.kind = ContextKind::Brace;
            return Indent::Columns(head.indented);
        }

        let closing = head
            .kind
            .closing_char()
            .is_some_and(|close| text_after.starts_with(close));
        let columns = match head.align {
            Align::Column => head.column.saturating_add(if closing { 0 } else { 1 }),
            Align::Indent | Align::Unresolved => {
                head.indented
                    .saturating_add(if closing { 0 } else { self.indent_unit() })
            }
        };
        Indent::Columns(columns)
    }
}
