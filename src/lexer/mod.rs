//! Lexical analysis for Go source, one line at a time.
//!
//! The scanner classifies keywords, atoms, numbers, strings, comments,
//! operators and identifiers. Strings and block comments that run past the end
//! of a line leave a continuation mode behind so the next line resumes inside
//! them.

pub mod literal_parser;
pub mod stream;
pub mod token;
pub mod tokenizer;

pub use stream::{count_column, LineStream};
pub use token::{is_ident_char, is_operator_char, Punct, Style};
pub use tokenizer::{scan, Quote, Scan, Tokenize};
