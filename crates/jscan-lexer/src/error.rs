// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the scanner.

use thiserror::Error;

/// Result type for scanner operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Faults that abort the token being scanned.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A numeric literal is not well formed
    #[error("SyntaxError: malformed number: {0}")]
    MalformedNumber(#[from] NumberFault),

    /// The underlying input source failed
    #[error("I/O error while reading source: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Returns true if this error came from the input source rather than
    /// from the text being scanned.
    pub fn is_io(&self) -> bool {
        matches!(self, ScanError::Io(_))
    }
}

/// The reason a numeric literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumberFault {
    /// A digit that is not valid in the literal's radix
    #[error("invalid digit '{digit}' in base {radix} literal")]
    InvalidDigit {
        /// The offending character
        digit: char,
        /// The radix in effect
        radix: u32,
    },

    /// A separator before any digit of a run (`0x_1`, `1._5`)
    #[error("numeric separator must follow a digit")]
    LeadingSeparator,

    /// Two separators in a row (`1__2`)
    #[error("only one numeric separator is allowed between digits")]
    ConsecutiveSeparators,

    /// A separator at the end of a digit run (`1_`)
    #[error("numeric separator must be followed by a digit")]
    TrailingSeparator,

    /// A separator right after a leading zero or inside a legacy octal literal
    #[error("numeric separator is not allowed after a leading 0")]
    SeparatorAfterLeadingZero,

    /// A digit run with no digits (`0x`)
    #[error("expected at least one digit")]
    MissingDigits,

    /// An exponent marker with no digits (`1e`, `1e+`)
    #[error("expected exponent digits")]
    MissingExponent,

    /// A legacy octal or leading-zero decimal literal in strict mode
    #[error("legacy octal literals are not allowed in strict mode")]
    LegacyOctalInStrictMode,
}
