// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # jscan-lexer
//!
//! A pull-based scanner that turns ECMAScript source text into tokens.
//!
//! ## Overview
//!
//! The scanner recognizes:
//! - Punctuators and operators, using greedy longest-match lookahead
//! - Reserved words and identifiers (Unicode `XID_Start`/`XID_Continue`)
//! - Numeric literals in binary, octal, decimal, hexadecimal and legacy
//!   octal forms, with numeric separators
//!
//! Whitespace is skipped. Strings, templates, comments and regular
//! expressions are not scanned.
//!
//! ## Quick Start
//!
//! ```rust
//! use jscan_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("const foo = 0x2A;");
//!
//! loop {
//!     let token = scanner.next_token().expect("well-formed input");
//!     if token.kind == TokenKind::Eof {
//!         break;
//!     }
//!     println!("{token}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod lexer;

pub use error::{NumberFault, Result, ScanError};
pub use lexer::{
    CharSource, Lookahead, ReaderSource, ScanOptions, Scanner, StrSource, Token, TokenKind,
    keywords, tokenize,
};
