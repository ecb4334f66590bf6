//! Static mode metadata and MIME-type lookup.
//!
//! None of this affects tokenizing; it is what a host editor reads when it
//! registers the mode: which keys trigger re-indentation, which brackets to
//! auto-close, how to fold, and how to toggle comments.

use crate::error::RegistryError;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeSpec {
    pub name: &'static str,
    pub mime: &'static str,
    /// Typing one of these re-indents the current line.
    pub electric_chars: &'static str,
    /// Pairs eligible for auto-closing.
    pub close_brackets: &'static [(char, char)],
    pub fold: &'static str,
    pub block_comment_start: &'static str,
    pub block_comment_end: &'static str,
    pub line_comment: &'static str,
}

pub static GO_MODE_SPEC: ModeSpec = ModeSpec {
    name: "go",
    mime: "text/x-go",
    electric_chars: "{}):",
    close_brackets: &[
        ('(', ')'),
        ('[', ']'),
        ('{', '}'),
        ('\'', '\''),
        ('"', '"'),
        ('`', '`'),
    ],
    fold: "brace",
    block_comment_start: "/*",
    block_comment_end: "*/",
    line_comment: "//",
};

impl ModeSpec {
    pub fn is_electric(&self, ch: char) -> bool {
        self.electric_chars.contains(ch)
    }

    /// Closing counterpart inserted when `open` is typed.
    pub fn closing_bracket(&self, open: char) -> Option<char> {
        self.close_brackets
            .iter()
            .find(|(o, _)| *o == open)
            .map(|(_, close)| *close)
    }

    /// Wraps `line` in a block comment.
    pub fn block_comment(&self, line: &str) -> String {
        format!(
            "{} {} {}",
            self.block_comment_start, line, self.block_comment_end
        )
    }
}

/// Modes by name and MIME types resolving to them, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ModeRegistry {
    modes: IndexMap<&'static str, &'static ModeSpec>,
    mimes: IndexMap<String, &'static str>,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the Go mode and its MIME type.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.define_mode(&GO_MODE_SPEC);
        registry
    }

    /// Registers `spec` under its name and its own MIME type.
    pub fn define_mode(&mut self, spec: &'static ModeSpec) {
        log::debug!("define mode '{}' ({})", spec.name, spec.mime);
        self.modes.insert(spec.name, spec);
        self.mimes.insert(spec.mime.to_string(), spec.name);
    }

    /// Maps an extra MIME type onto an already registered mode.
    pub fn define_mime(&mut self, mime: &str, mode: &str) -> Result<(), RegistryError> {
        let (name, _) = self
            .modes
            .get_key_value(mode)
            .ok_or_else(|| RegistryError::UnknownMode {
                name: mode.to_string(),
            })?;
        self.mimes.insert(mime.to_string(), *name);
        Ok(())
    }

    pub fn get_mode(&self, name: &str) -> Result<&'static ModeSpec, RegistryError> {
        self.modes
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownMode {
                name: name.to_string(),
            })
    }

    pub fn resolve_mime(&self, mime: &str) -> Result<&'static ModeSpec, RegistryError> {
        let name = self
            .mimes
            .get(mime)
            .ok_or_else(|| RegistryError::UnknownMime {
                mime: mime.to_string(),
            })?;
        self.get_mode(name)
    }

    pub fn mimes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mimes.iter().map(|(mime, name)| (mime.as_str(), *name))
    }
}
