//! The scanner that produces tokens from source text.

use std::io::BufRead;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::{CharSource, Lookahead, ReaderSource, ScanOptions, StrSource, Token, TokenKind};
use crate::error::Result;

/// A scanner that tokenizes ECMAScript source code.
///
/// Call [`Scanner::next_token`] until it returns a token of kind
/// [`TokenKind::Eof`]; every later call returns `Eof` again.
#[derive(Debug)]
pub struct Scanner<S> {
    pub(super) input: Lookahead<S>,
    /// Accumulation buffer for multi-character lexemes, reset per lexeme.
    pub(super) buf: String,
    pub(super) options: ScanOptions,
    finished: bool,
}

impl<'a> Scanner<StrSource<'a>> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self::with_source(StrSource::new(source))
    }
}

impl<R: BufRead> Scanner<ReaderSource<R>> {
    /// Creates a scanner that decodes UTF-8 source from `reader`.
    pub fn from_reader(reader: R) -> Self {
        Self::with_source(ReaderSource::new(reader))
    }
}

impl<S: CharSource> Scanner<S> {
    /// Creates a scanner over any code point source.
    pub fn with_source(source: S) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    /// Creates a scanner with explicit options.
    pub fn with_options(source: S, options: ScanOptions) -> Self {
        Self {
            input: Lookahead::new(source),
            buf: String::new(),
            options,
            finished: false,
        }
    }

    /// The options this scanner was created with.
    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Returns the next token from the source.
    ///
    /// A malformed numeric literal or a failing source aborts the token and
    /// is returned as an error. Scanning may be resumed afterwards; see
    /// [`Scanner::skip_to_whitespace`].
    pub fn next_token(&mut self) -> Result<Token> {
        loop {
            let Some(ch) = self.input.read()? else {
                return Ok(Token::eof());
            };

            let token = match ch {
                _ if is_space(ch) => continue,
                '@' => Token::fixed(TokenKind::At),
                _ if is_id_start(ch) => self.scan_identifier(ch)?,
                '0'..='9' | '.' => self.scan_number(ch)?,
                _ if is_punctuator_start(ch) => self.scan_punctuator(ch)?,
                _ => {
                    debug!(?ch, "unrecognized character");
                    Token::syntax_error(ch)
                }
            };

            trace!(kind = ?token.kind, text = %token.text, value = ?token.value, "token");
            return Ok(token);
        }
    }

    /// Discards code points up to, but not including, the next whitespace
    /// or end of input. Returns how many were discarded.
    ///
    /// Callers use this to resynchronize after a scan error.
    pub fn skip_to_whitespace(&mut self) -> Result<usize> {
        let mut skipped = 0;
        while let Some(ch) = self.peek()? {
            if is_space(ch) {
                break;
            }
            self.advance()?;
            skipped += 1;
        }
        debug!(skipped, "skipped to whitespace");
        Ok(skipped)
    }

    /// Returns the next code point without consuming it.
    pub(super) fn peek(&mut self) -> Result<Option<char>> {
        self.input.peek(1)
    }

    /// Returns the code point `n` positions ahead without consuming it.
    pub(super) fn peek_nth(&mut self, n: usize) -> Result<Option<char>> {
        self.input.peek(n)
    }

    /// Consumes one code point.
    pub(super) fn advance(&mut self) -> Result<()> {
        self.input.read()?;
        Ok(())
    }

    fn scan_identifier(&mut self, first: char) -> Result<Token> {
        self.buf.clear();
        self.buf.push(first);

        while let Some(ch) = self.peek()? {
            if !is_id_continue(ch) {
                break;
            }
            self.buf.push(ch);
            self.advance()?;
        }

        Ok(Token::word(self.buf.clone()))
    }
}

impl<S: CharSource> Iterator for Scanner<S> {
    type Item = Result<Token>;

    /// Yields tokens up to, but not including, `Eof`. An error is yielded
    /// once and ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: CharSource> FusedIterator for Scanner<S> {}

/// Scans `source` to completion, stopping at the first error.
///
/// The returned tokens do not include the trailing `Eof`.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source).collect()
}

/// Checks if a character is whitespace: the Unicode `White_Space`
/// property plus the byte order mark, minus NEL (U+0085).
pub(crate) fn is_space(ch: char) -> bool {
    match ch {
        '\u{85}' => false,
        '\u{FEFF}' => true,
        _ => ch.is_whitespace(),
    }
}

/// Checks if a character can start an identifier.
pub(crate) fn is_id_start(ch: char) -> bool {
    ch == '_' || ch == '$' || unicode_xid::UnicodeXID::is_xid_start(ch)
}

/// Checks if a character can continue an identifier.
pub(crate) fn is_id_continue(ch: char) -> bool {
    matches!(ch, '$' | '\u{200C}' | '\u{200D}') || unicode_xid::UnicodeXID::is_xid_continue(ch)
}

/// Checks if a character starts a punctuator other than `@` and `.`.
pub(crate) fn is_punctuator_start(ch: char) -> bool {
    matches!(
        ch,
        '{' | '}'
            | '('
            | ')'
            | '['
            | ']'
            | ';'
            | ','
            | '<'
            | '>'
            | '='
            | '!'
            | '+'
            | '-'
            | '*'
            | '/'
            | '%'
            | '&'
            | '|'
            | '^'
            | '~'
            | '?'
            | ':'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_tokens() {
        let mut scanner = Scanner::new("{ } ( )");
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::LeftBrace));
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::RightBrace));
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::LeftParen));
        assert!(matches!(scanner.next_token().unwrap().kind, TokenKind::RightParen));
        assert!(scanner.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut scanner = Scanner::new("  ");
        assert!(scanner.next_token().unwrap().is_eof());
        assert!(scanner.next_token().unwrap().is_eof());
        assert!(scanner.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("function const let var"),
            vec![TokenKind::Function, TokenKind::Const, TokenKind::Let, TokenKind::Var]
        );
    }

    #[test]
    fn test_identifiers() {
        let tokens = tokenize("foo _bar $baz a1 \u{e9}t\u{e9} x\u{200C}y").unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_ref()).collect();
        assert_eq!(texts, ["foo", "_bar", "$baz", "a1", "\u{e9}t\u{e9}", "x\u{200C}y"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
    }

    #[test]
    fn test_identifier_stops_at_punctuator() {
        let tokens = tokenize("foo(bar)").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].text, "foo");
        assert_eq!(tokens[1].kind, TokenKind::LeftParen);
        assert_eq!(tokens[2].text, "bar");
        assert_eq!(tokens[3].kind, TokenKind::RightParen);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let tokens = tokenize("constant iffy in").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].kind, TokenKind::In);
    }

    #[test]
    fn test_at_sign() {
        assert_eq!(kinds("@dec"), vec![TokenKind::At, TokenKind::Identifier]);
    }

    #[test]
    fn test_unrecognized_character() {
        let mut scanner = Scanner::new("a # b");
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Identifier);
        let bad = scanner.next_token().unwrap();
        assert_eq!(bad.kind, TokenKind::SyntaxError);
        assert_eq!(bad.text, "#");
        assert_eq!(scanner.next_token().unwrap().text, "b");
    }

    #[test]
    fn test_next_line_is_not_space() {
        assert_eq!(kinds("\u{85}"), vec![TokenKind::SyntaxError]);
    }

    #[test]
    fn test_is_space() {
        for ch in [
            '\u{0009}', '\u{000B}', '\u{000C}', '\u{0020}', '\u{00A0}', '\u{1680}', '\u{2000}',
            '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}', '\u{2007}',
            '\u{2008}', '\u{2009}', '\u{200A}', '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}',
            '\u{3000}', '\u{FEFF}', '\n', '\r',
        ] {
            assert!(is_space(ch), "{:?} should be whitespace", ch);
        }
        assert!(!is_space('\u{0085}'));
        assert!(!is_space('a'));
        assert!(!is_space('\u{200B}'));
    }

    #[test]
    fn test_whitespace_is_transparent() {
        assert_eq!(kinds("(  )"), kinds("()"));
        assert_eq!(
            kinds("(\u{FEFF}\u{2028}\t\u{A0})"),
            vec![TokenKind::LeftParen, TokenKind::RightParen]
        );
    }

    #[test]
    fn test_skip_to_whitespace() {
        let mut scanner = Scanner::new("1__2x y");
        assert!(scanner.next_token().is_err());
        assert_eq!(scanner.skip_to_whitespace().unwrap(), 2);
        assert_eq!(scanner.next_token().unwrap().text, "y");
    }

    #[test]
    fn test_iterator_stops_at_eof() {
        let scanner = Scanner::new("a b");
        let tokens: Vec<_> = scanner.map(|t| t.unwrap().kind).collect();
        assert_eq!(tokens, vec![TokenKind::Identifier, TokenKind::Identifier]);
    }

    #[test]
    fn test_iterator_ends_after_error() {
        let mut scanner = Scanner::new("0x 1");
        assert!(scanner.next().unwrap().is_err());
        assert!(scanner.next().is_none());
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_from_reader() {
        let mut scanner = Scanner::from_reader(std::io::Cursor::new("let \u{3c0} = 3"));
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Let);
        assert_eq!(scanner.next_token().unwrap().text, "\u{3c0}");
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Equal);
        assert_eq!(scanner.next_token().unwrap().value, Some(3.0));
        assert!(scanner.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_const_declaration() {
        let tokens = tokenize("const foo = 1").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind, TokenKind::Const);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "foo");
        assert_eq!(tokens[2].kind, TokenKind::Equal);
        assert_eq!(tokens[3].kind, TokenKind::NumericLiteral);
        assert_eq!(tokens[3].value, Some(1.0));
    }
}
