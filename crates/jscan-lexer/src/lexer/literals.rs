//! Numeric literal scanning.
//!
//! ## Forms
//!
//! ```text
//! 42        -> Decimal
//! 3.14      -> Decimal with fraction
//! .5        -> Fraction only (no leading zero)
//! 1e10      -> Exponential
//! 1.5e-3    -> Exponential with negative
//! 1_000_000 -> With separators (ES2021)
//! 0123      -> Legacy octal (83)
//! 0189      -> Non-octal decimal (189), a legacy octal with 8 or 9
//! ```
//!
//! | Prefix | Base | Example |
//! |--------|------|---------|
//! | `0x` | 16 | `0xFF` |
//! | `0o` | 8 | `0o777` |
//! | `0b` | 2 | `0b1010` |
//!
//! Method: `scan_number`
//!
//! ## Separators
//!
//! A single `_` may sit between two digits of a run. It may not lead or
//! end the run, may not be doubled, and is rejected anywhere in a literal
//! that starts with a redundant `0` (legacy octal and `08`-style decimals).
//!
//! ## Values
//!
//! Prefixed and legacy octal literals accumulate `value * radix + digit`.
//! Decimal literals are decoded from their digits with `str::parse`, so
//! fractions and exponents round correctly.

use tracing::debug;

use super::{CharSource, Scanner, Token, TokenKind};
use crate::error::{NumberFault, Result};

/// State of the digit run being accumulated.
#[derive(Debug, Clone, Copy)]
struct DigitRun {
    radix: u32,
    /// Started with `0` followed by an octal digit, still base 8
    legacy_octal: bool,
    /// Started with a redundant `0` and is decimal (`0`, `09`, `0189`)
    leading_zero: bool,
    digits: usize,
    value: f64,
}

impl DigitRun {
    fn new(radix: u32) -> Self {
        Self {
            radix,
            legacy_octal: false,
            leading_zero: false,
            digits: 0,
            value: 0.0,
        }
    }

    fn push(&mut self, digit: u32) {
        self.value = self.value * f64::from(self.radix) + f64::from(digit);
        self.digits += 1;
    }

    /// Turns a legacy octal run that met an `8` or `9` into a decimal one.
    fn reinterpret_as_decimal(&mut self) {
        self.radix = 10;
        self.legacy_octal = false;
        self.leading_zero = true;
    }
}

impl<S: CharSource> Scanner<S> {
    /// Scans a numeric literal, or `.`/`...` when `first` is a dot that
    /// does not start a number.
    pub(super) fn scan_number(&mut self, first: char) -> Result<Token> {
        self.buf.clear();

        let result = if first == '.' {
            self.scan_dot()
        } else {
            self.scan_numeric_literal(first)
        };

        if let Err(e) = &result {
            debug!(error = %e, "malformed number");
        }
        result
    }

    fn scan_dot(&mut self) -> Result<Token> {
        match self.peek()? {
            Some('.') if self.peek_nth(2)? == Some('.') => {
                self.advance()?;
                self.advance()?;
                Ok(Token::fixed(TokenKind::Ellipsis))
            }
            Some('0'..='9') => {
                self.buf.push_str("0.");
                self.scan_digits(&mut DigitRun::new(10))?;
                self.scan_exponent()?;
                self.decimal_token()
            }
            _ => Ok(Token::fixed(TokenKind::Dot)),
        }
    }

    fn scan_numeric_literal(&mut self, first: char) -> Result<Token> {
        let mut run = DigitRun::new(10);

        if first == '0' {
            match self.peek()? {
                Some(prefix @ ('b' | 'B' | 'o' | 'O' | 'x' | 'X')) => {
                    self.advance()?;
                    let radix = match prefix.to_ascii_lowercase() {
                        'b' => 2,
                        'o' => 8,
                        _ => 16,
                    };
                    let mut run = DigitRun::new(radix);
                    self.scan_digits(&mut run)?;
                    return Ok(Token::number(run.value));
                }
                Some('0'..='9') if self.options.strict => {
                    return Err(NumberFault::LegacyOctalInStrictMode.into());
                }
                Some('0'..='7') => {
                    run.radix = 8;
                    run.legacy_octal = true;
                }
                _ => run.leading_zero = true,
            }
        }

        // `first` is always a decimal digit here
        run.push(first.to_digit(10).unwrap_or_default());
        self.buf.push(first);
        self.scan_digits(&mut run)?;

        if run.legacy_octal {
            return Ok(Token::number(run.value));
        }

        self.scan_fraction()?;
        self.scan_exponent()?;
        self.decimal_token()
    }

    /// Accumulates digits valid for `run.radix`, handling separators.
    ///
    /// Digits are mirrored into the accumulation buffer; separators are
    /// not. The code point that ends the run is left unconsumed, while a
    /// rejected digit or separator is consumed before the fault is raised.
    fn scan_digits(&mut self, run: &mut DigitRun) -> Result<()> {
        let mut after_separator = false;

        while let Some(ch) = self.peek()? {
            match ch {
                '_' => {
                    self.advance()?;
                    if run.digits == 0 {
                        return Err(NumberFault::LeadingSeparator.into());
                    }
                    if after_separator {
                        return Err(NumberFault::ConsecutiveSeparators.into());
                    }
                    if run.legacy_octal || run.leading_zero {
                        return Err(NumberFault::SeparatorAfterLeadingZero.into());
                    }
                    after_separator = true;
                    continue;
                }
                // Exponent marker
                'e' | 'E' if run.radix == 10 => break,
                _ => {}
            }

            let Some(digit) = ch.to_digit(16) else {
                break;
            };
            self.advance()?;

            if digit >= run.radix {
                if run.legacy_octal && digit < 10 {
                    run.reinterpret_as_decimal();
                } else {
                    return Err(NumberFault::InvalidDigit {
                        digit: ch,
                        radix: run.radix,
                    }
                    .into());
                }
            }

            run.push(digit);
            self.buf.push(ch);
            after_separator = false;
        }

        if after_separator {
            return Err(NumberFault::TrailingSeparator.into());
        }
        if run.digits == 0 {
            return Err(NumberFault::MissingDigits.into());
        }
        Ok(())
    }

    /// Scans an optional `.` and fractional digits of a decimal literal.
    /// The digits may be absent: `1.` is `1`.
    fn scan_fraction(&mut self) -> Result<()> {
        if self.peek()? != Some('.') {
            return Ok(());
        }
        self.advance()?;
        self.buf.push('.');

        if matches!(self.peek()?, Some('0'..='9' | '_')) {
            self.scan_digits(&mut DigitRun::new(10))?;
        }
        Ok(())
    }

    /// Scans an optional exponent: `e` or `E`, an optional sign, and at
    /// least one digit.
    fn scan_exponent(&mut self) -> Result<()> {
        if !matches!(self.peek()?, Some('e' | 'E')) {
            return Ok(());
        }
        self.advance()?;
        self.buf.push('e');

        if let Some(sign @ ('+' | '-')) = self.peek()? {
            self.advance()?;
            self.buf.push(sign);
        }

        if !matches!(self.peek()?, Some('0'..='9' | '_')) {
            return Err(NumberFault::MissingExponent.into());
        }
        self.scan_digits(&mut DigitRun::new(10))
    }

    fn decimal_token(&self) -> Result<Token> {
        let value = self
            .buf
            .parse::<f64>()
            .map_err(|_| NumberFault::MissingDigits)?;
        Ok(Token::number(value))
    }
}
