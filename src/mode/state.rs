//! Per-document tokenizer state, threaded through every line.

use super::context::{Align, Context, ContextKind, ContextStack};
use crate::lexer::Tokenize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Continuation mode left behind by the previous span.
    pub tokenize: Tokenize,
    pub context: ContextStack,
    /// Indentation of the line being scanned.
    pub indented: i32,
    /// Set until the first non-space token of the line is scanned.
    pub start_of_line: bool,
}

impl State {
    pub(crate) fn new(root_indented: i32) -> Self {
        Self {
            tokenize: Tokenize::Base,
            context: ContextStack::new(Context {
                indented: root_indented,
                column: 0,
                kind: ContextKind::Top,
                align: Align::Indent,
            }),
            indented: 0,
            start_of_line: true,
        }
    }

    pub(crate) fn push_context(&mut self, column: i32, kind: ContextKind) {
        log::trace!(
            "push {:?} at column {} (indented {})",
            kind,
            column,
            self.indented
        );
        self.context.push(Context {
            indented: self.indented,
            column,
            kind,
            align: Align::Unresolved,
        });
    }

    pub(crate) fn pop_context(&mut self) {
        if let Some(popped) = self.context.pop() {
            log::trace!("pop {:?} opened at column {}", popped.kind, popped.column);
            if popped.kind.is_bracket() {
                self.indented = popped.indented;
            }
        }
    }
}
