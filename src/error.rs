//! 統一的なエラーハンドリングモジュール
//!
//! The tokenizer itself never fails. Errors only come from the edges: loading
//! configuration, looking modes up by MIME type, and file I/O in the binary.

use thiserror::Error;

/// Top-level error type of the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoModeError {
    /// 設定エラー
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// モード登録エラー
    #[error("mode lookup failed: {0}")]
    Registry(#[from] RegistryError),

    /// ファイルI/Oエラー
    #[error("I/O error: {0}")]
    Io(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("indentUnit must be at least 1")]
    ZeroIndentUnit,

    #[error("tabSize must be at least 1")]
    ZeroTabSize,

    #[error("malformed config: {message}")]
    Parse { message: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no mode registered for MIME type '{mime}'")]
    UnknownMime { mime: String },

    #[error("no mode named '{name}'")]
    UnknownMode { name: String },
}

impl From<std::io::Error> for GoModeError {
    fn from(err: std::io::Error) -> Self {
        GoModeError::Io(err.to_string())
    }
}

pub type GoModeResult<T> = Result<T, GoModeError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
