/*!
# Rust Language Module

This Rust module provides lexical analysis, parsing, and reference
resolution for the tape language.

*/

#[macro_use]
mod error;
mod chars;
mod ident;
mod lex;
mod parse;
mod promise;
mod resolve;

pub use chars::classify;
pub use chars::stream;
pub use chars::stream_file;
pub use chars::Kind;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use parse::parse;
pub use parse::parse_file;
pub use promise::Promise;

pub mod ast;
pub mod token;

/// A character or token position range attached to errors for
/// context.
pub type Column = std::ops::Range<usize>;
