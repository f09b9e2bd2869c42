//! Lexical analysis (tokenization) for ECMAScript source code.
//!
//! The lexer transforms source text into a stream of tokens for a parser
//! or any other consumer.
//!
//! ## Structure
//!
//! - `source.rs` - `CharSource` inputs and the `Lookahead` queue
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `token.rs` - `Token` and `TokenKind` definitions
//! - `keywords.rs` - The reserved word table
//! - `operators.rs` - Punctuator decision trees
//! - `literals.rs` - The numeric literal state machine
//!
//! ## Usage
//!
//! ```rust
//! use jscan_lexer::lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let x = 42;");
//!
//! loop {
//!     let token = scanner.next_token().unwrap();
//!     if matches!(token.kind, TokenKind::Eof) {
//!         break;
//!     }
//!     println!("{:?}", token.kind);
//! }
//! ```

mod literals;
mod operators;
mod options;
mod scanner;
mod source;
mod token;

pub mod keywords;

pub use options::ScanOptions;
pub use scanner::{Scanner, tokenize};
pub use source::{CharSource, Lookahead, ReaderSource, StrSource};
pub use token::{Token, TokenKind};
