//! Go Mode Library
//!
//! An incremental, line-oriented tokenizer for Go source together with a
//! bracket-aware indentation engine, meant to be driven one line at a time by
//! an editor for syntax highlighting and auto-indent.

pub mod config;
pub mod error;
pub mod lexer;
pub mod mode;
pub mod registry;
pub mod runner;

// Re-export commonly used types
pub use config::ModeConfig;
pub use error::{ConfigError, GoModeError, GoModeResult, RegistryError};
pub use lexer::{LineStream, Style, Tokenize};
pub use mode::{GoMode, Indent, State};
pub use registry::{ModeRegistry, ModeSpec, GO_MODE_SPEC};
pub use runner::{highlight, reindent, LineTokens, Span};
