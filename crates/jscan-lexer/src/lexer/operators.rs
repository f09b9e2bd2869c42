//! Punctuator and operator scanning.
//!
//! Every punctuator-start character has its own decision tree that picks
//! the longest valid punctuator. A code point is consumed only once it is
//! known to belong to the token; anything merely peeked stays queued for
//! the next token.
//!
//! | Token | Method | Variants |
//! |-------|--------|----------|
//! | `+` | `scan_plus` | `+`, `++`, `+=` |
//! | `-` | `scan_minus` | `-`, `--`, `-=` |
//! | `*` | `scan_star` | `*`, `**`, `*=`, `**=` |
//! | `/` | `scan_slash` | `/`, `/=` |
//! | `%` | `scan_percent` | `%`, `%=` |
//! | `<` | `scan_less_than` | `<`, `<=`, `<<`, `<<=` |
//! | `>` | `scan_greater_than` | `>`, `>=`, `>>`, `>>>`, `>>=`, `>>>=` |
//! | `=` | `scan_equal` | `=`, `==`, `===`, `=>` |
//! | `!` | `scan_bang` | `!`, `!=`, `!==` |
//! | `&` | `scan_ampersand` | `&`, `&&`, `&=`, `&&=` |
//! | `\|` | `scan_pipe` | `\|`, `\|\|`, `\|=`, `\|\|=` |
//! | `^` | `scan_caret` | `^`, `^=` |
//! | `?` | `scan_question` | `?`, `?.`, `??`, `??=` |
//!
//! `.` and `...` are handled with numeric literals, since a dot may start
//! a number.
//!
//! ## Lookahead Logic
//!
//! ```text
//! // For input ">>>="
//! scan_greater_than():
//!   peek() returns '>'  -> consume
//!   peek() returns '>'  -> consume
//!   peek() returns '='  -> consume
//!   return UnsignedRightShiftEqual
//! ```
//!
//! `?.` needs two code points of lookahead: `a?.5:b` is a conditional,
//! so `?.` is only produced when no decimal digit follows the dot.

use super::{CharSource, Scanner, Token, TokenKind};
use crate::error::Result;

impl<S: CharSource> Scanner<S> {
    pub(super) fn scan_punctuator(&mut self, ch: char) -> Result<Token> {
        let kind = match ch {
            // Single-character tokens
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '~' => TokenKind::Tilde,

            // Multi-character tokens
            '+' => self.scan_plus()?,
            '-' => self.scan_minus()?,
            '*' => self.scan_star()?,
            '/' => self.scan_slash()?,
            '%' => self.scan_percent()?,
            '<' => self.scan_less_than()?,
            '>' => self.scan_greater_than()?,
            '=' => self.scan_equal()?,
            '!' => self.scan_bang()?,
            '&' => self.scan_ampersand()?,
            '|' => self.scan_pipe()?,
            '^' => self.scan_caret()?,
            '?' => self.scan_question()?,

            _ => return Ok(Token::syntax_error(ch)),
        };

        Ok(Token::fixed(kind))
    }

    /// Consumes the next code point if it is `expected`.
    fn eat(&mut self, expected: char) -> Result<bool> {
        if self.peek()? == Some(expected) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn scan_plus(&mut self) -> Result<TokenKind> {
        Ok(match self.peek()? {
            Some('+') => {
                self.advance()?;
                TokenKind::PlusPlus
            }
            Some('=') => {
                self.advance()?;
                TokenKind::PlusEqual
            }
            _ => TokenKind::Plus,
        })
    }

    fn scan_minus(&mut self) -> Result<TokenKind> {
        Ok(match self.peek()? {
            Some('-') => {
                self.advance()?;
                TokenKind::MinusMinus
            }
            Some('=') => {
                self.advance()?;
                TokenKind::MinusEqual
            }
            _ => TokenKind::Minus,
        })
    }

    fn scan_star(&mut self) -> Result<TokenKind> {
        Ok(match self.peek()? {
            Some('*') => {
                self.advance()?;
                if self.eat('=')? {
                    TokenKind::StarStarEqual
                } else {
                    TokenKind::StarStar
                }
            }
            Some('=') => {
                self.advance()?;
                TokenKind::StarEqual
            }
            _ => TokenKind::Star,
        })
    }

    fn scan_slash(&mut self) -> Result<TokenKind> {
        Ok(if self.eat('=')? {
            TokenKind::SlashEqual
        } else {
            TokenKind::Slash
        })
    }

    fn scan_percent(&mut self) -> Result<TokenKind> {
        Ok(if self.eat('=')? {
            TokenKind::PercentEqual
        } else {
            TokenKind::Percent
        })
    }

    fn scan_less_than(&mut self) -> Result<TokenKind> {
        Ok(match self.peek()? {
            Some('<') => {
                self.advance()?;
                if self.eat('=')? {
                    TokenKind::LeftShiftEqual
                } else {
                    TokenKind::LeftShift
                }
            }
            Some('=') => {
                self.advance()?;
                TokenKind::LessThanEqual
            }
            _ => TokenKind::LessThan,
        })
    }

    fn scan_greater_than(&mut self) -> Result<TokenKind> {
        Ok(match self.peek()? {
            Some('>') => {
                self.advance()?;
                match self.peek()? {
                    Some('>') => {
                        self.advance()?;
                        if self.eat('=')? {
                            TokenKind::UnsignedRightShiftEqual
                        } else {
                            TokenKind::UnsignedRightShift
                        }
                    }
                    Some('=') => {
                        self.advance()?;
                        TokenKind::RightShiftEqual
                    }
                    _ => TokenKind::RightShift,
                }
            }
            Some('=') => {
                self.advance()?;
                TokenKind::GreaterThanEqual
            }
            _ => TokenKind::GreaterThan,
        })
    }

    fn scan_equal(&mut self) -> Result<TokenKind> {
        Ok(match self.peek()? {
            Some('=') => {
                self.advance()?;
                if self.eat('=')? {
                    TokenKind::StrictEqual
                } else {
                    TokenKind::EqualEqual
                }
            }
            Some('>') => {
                self.advance()?;
                TokenKind::Arrow
            }
            _ => TokenKind::Equal,
        })
    }

    fn scan_bang(&mut self) -> Result<TokenKind> {
        Ok(if self.eat('=')? {
            if self.eat('=')? {
                TokenKind::StrictNotEqual
            } else {
                TokenKind::NotEqual
            }
        } else {
            TokenKind::Bang
        })
    }

    fn scan_ampersand(&mut self) -> Result<TokenKind> {
        Ok(match self.peek()? {
            Some('&') => {
                self.advance()?;
                if self.eat('=')? {
                    TokenKind::AmpersandAmpersandEqual
                } else {
                    TokenKind::AmpersandAmpersand
                }
            }
            Some('=') => {
                self.advance()?;
                TokenKind::AmpersandEqual
            }
            _ => TokenKind::Ampersand,
        })
    }

    fn scan_pipe(&mut self) -> Result<TokenKind> {
        Ok(match self.peek()? {
            Some('|') => {
                self.advance()?;
                if self.eat('=')? {
                    TokenKind::PipePipeEqual
                } else {
                    TokenKind::PipePipe
                }
            }
            Some('=') => {
                self.advance()?;
                TokenKind::PipeEqual
            }
            _ => TokenKind::Pipe,
        })
    }

    fn scan_caret(&mut self) -> Result<TokenKind> {
        Ok(if self.eat('=')? {
            TokenKind::CaretEqual
        } else {
            TokenKind::Caret
        })
    }

    fn scan_question(&mut self) -> Result<TokenKind> {
        Ok(match self.peek()? {
            Some('?') => {
                self.advance()?;
                if self.eat('=')? {
                    TokenKind::QuestionQuestionEqual
                } else {
                    TokenKind::QuestionQuestion
                }
            }
            Some('.') if !matches!(self.peek_nth(2)?, Some('0'..='9')) => {
                self.advance()?;
                TokenKind::QuestionDot
            }
            _ => TokenKind::Question,
        })
    }
}
