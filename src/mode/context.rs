//! Nesting contexts for braces, brackets, parens and case blocks.

use crate::lexer::Punct;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    /// Root sentinel.
    Top,
    Brace,
    Bracket,
    Paren,
    /// Body of a `case`/`default` label; turns back into `Brace` on the next line.
    Case,
}

impl ContextKind {
    /// Delimiter that closes this context.
    pub fn closing_char(self) -> Option<char> {
        match self {
            ContextKind::Brace => Some('}'),
            ContextKind::Bracket => Some(']'),
            ContextKind::Paren => Some(')'),
            ContextKind::Top | ContextKind::Case => None,
        }
    }

    pub fn is_bracket(self) -> bool {
        self.closing_char().is_some()
    }

    pub fn is_closed_by(self, punct: Punct) -> bool {
        matches!(
            (self, punct),
            (ContextKind::Brace, Punct::RightBrace)
                | (ContextKind::Bracket, Punct::RightBracket)
                | (ContextKind::Paren, Punct::RightParen)
        )
    }

    /// Kind of context opened by `punct`, if it is an opening bracket.
    pub fn opened_by(punct: Punct) -> Option<Self> {
        match punct {
            Punct::LeftBrace => Some(ContextKind::Brace),
            Punct::LeftBracket => Some(ContextKind::Bracket),
            Punct::LeftParen => Some(ContextKind::Paren),
            _ => None,
        }
    }
}

/// How lines inside a context are indented. Decided once, by the first token
/// after the opener: a token on the same line aligns to the opener's column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    #[default]
    Unresolved,
    Column,
    Indent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Line indentation in effect when the context opened.
    pub indented: i32,
    /// Column of the opening token.
    pub column: i32,
    pub kind: ContextKind,
    pub align: Align,
}

/// Stack of open contexts. The root is never popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextStack {
    contexts: Vec<Context>,
}

impl ContextStack {
    pub fn new(root: Context) -> Self {
        Self {
            contexts: vec![root],
        }
    }

    pub fn head(&self) -> &Context {
        // never empty: `pop` keeps the root
        &self.contexts[self.contexts.len() - 1]
    }

    pub fn head_mut(&mut self) -> &mut Context {
        let last = self.contexts.len() - 1;
        &mut self.contexts[last]
    }

    /// Number of open contexts, the root included.
    pub fn depth(&self) -> usize {
        self.contexts.len()
    }

    pub fn push(&mut self, context: Context) {
        self.contexts.push(context);
    }

    /// Removes and returns the head, or `None` if only the root is left.
    pub fn pop(&mut self) -> Option<Context> {
        if self.contexts.len() > 1 {
            self.contexts.pop()
        } else {
            None
        }
    }

    /// Contexts from the root to the head.
    pub fn iter(&self) -> impl Iterator<Item = &Context> {
        self.contexts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(kind: ContextKind) -> Context {
        Context {
            indented: 0,
            column: 0,
            kind,
            align: Align::Unresolved,
        }
    }

    #[test]
    fn test_root_is_never_popped() {
        let mut stack = ContextStack::new(context(ContextKind::Top));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.depth(), 1);

        stack.push(context(ContextKind::Paren));
        assert_eq!(stack.head().kind, ContextKind::Paren);
        assert_eq!(stack.pop().map(|c| c.kind), Some(ContextKind::Paren));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.head().kind, ContextKind::Top);
    }

    #[test]
    fn test_head_mut() {
        let mut stack = ContextStack::new(context(ContextKind::Top));
        stack.push(context(ContextKind::Brace));
        stack.head_mut().kind = ContextKind::Case;
        let kinds: Vec<_> = stack.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ContextKind::Top, ContextKind::Case]);
    }

    #[test]
    fn test_kind_delimiters() {
        assert_eq!(ContextKind::Brace.closing_char(), Some('}'));
        assert_eq!(ContextKind::Case.closing_char(), None);
        assert!(!ContextKind::Top.is_bracket());
        assert!(ContextKind::Paren.is_closed_by(Punct::RightParen));
        assert!(!ContextKind::Paren.is_closed_by(Punct::RightBrace));
        assert!(!ContextKind::Case.is_closed_by(Punct::RightBrace));
        assert_eq!(
            ContextKind::opened_by(Punct::LeftBracket),
            Some(ContextKind::Bracket)
        );
        assert_eq!(ContextKind::opened_by(Punct::Comma), None);
    }
}
