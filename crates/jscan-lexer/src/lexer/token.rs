//! Token definitions for the scanner.

use std::borrow::Cow;
use std::fmt;

use super::keywords;

/// A token produced by the scanner.
///
/// Tokens are plain values: the scanner builds each one once and hands it
/// to the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// Source spelling for identifiers, keywords and punctuators.
    /// Empty for numeric literals and end of input.
    pub text: Cow<'static, str>,
    /// Decoded magnitude, present only for numeric literals
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub value: Option<f64>,
}

impl Token {
    /// Creates a new token with the given text and no numeric value.
    pub fn new(kind: TokenKind, text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            text: text.into(),
            value: None,
        }
    }

    /// Creates a punctuator or keyword token spelled the way its kind is.
    pub fn fixed(kind: TokenKind) -> Self {
        Self::new(kind, kind.as_str().unwrap_or_default())
    }

    /// Creates an identifier or keyword token from an identifier-shaped word.
    pub fn word(text: String) -> Self {
        let kind = keywords::lookup(&text).unwrap_or(TokenKind::Identifier);
        Self::new(kind, text)
    }

    /// Creates a numeric literal token.
    pub fn number(value: f64) -> Self {
        Self {
            kind: TokenKind::NumericLiteral,
            text: Cow::Borrowed(""),
            value: Some(value),
        }
    }

    /// Creates the end-of-input token.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// Creates a syntax error token for an unrecognized code point.
    pub fn syntax_error(ch: char) -> Self {
        Self::new(TokenKind::SyntaxError, ch.to_string())
    }

    /// Returns true if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.value) {
            (TokenKind::NumericLiteral, Some(value)) => write!(f, "NumericLiteral({value})"),
            (TokenKind::Eof, _) => write!(f, "Eof"),
            (kind, _) => write!(f, "{kind:?}({})", self.text),
        }
    }
}

/// The different kinds of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Special
    /// End of input
    Eof,
    /// Unrecognized code point
    SyntaxError,

    // Literals
    /// Numeric literal
    NumericLiteral,

    /// Identifier
    Identifier,

    // Reserved words
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    False,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    Instanceof,
    New,
    Null,
    Return,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,

    // Strict mode reserved words
    Implements,
    Interface,
    Let,
    Package,
    Private,
    Protected,
    Public,
    Static,
    Yield,

    // Punctuation
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// .
    Dot,
    /// ...
    Ellipsis,
    /// ;
    Semicolon,
    /// ,
    Comma,
    /// @
    At,
    /// <
    LessThan,
    /// >
    GreaterThan,
    /// <=
    LessThanEqual,
    /// >=
    GreaterThanEqual,
    /// ==
    EqualEqual,
    /// !=
    NotEqual,
    /// ===
    StrictEqual,
    /// !==
    StrictNotEqual,
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// **
    StarStar,
    /// ++
    PlusPlus,
    /// --
    MinusMinus,
    /// <<
    LeftShift,
    /// >>
    RightShift,
    /// >>>
    UnsignedRightShift,
    /// &
    Ampersand,
    /// |
    Pipe,
    /// ^
    Caret,
    /// !
    Bang,
    /// ~
    Tilde,
    /// &&
    AmpersandAmpersand,
    /// ||
    PipePipe,
    /// ??
    QuestionQuestion,
    /// ?
    Question,
    /// ?.
    QuestionDot,
    /// :
    Colon,
    /// =>
    Arrow,

    // Assignments
    /// =
    Equal,
    /// +=
    PlusEqual,
    /// -=
    MinusEqual,
    /// *=
    StarEqual,
    /// /=
    SlashEqual,
    /// %=
    PercentEqual,
    /// **=
    StarStarEqual,
    /// <<=
    LeftShiftEqual,
    /// >>=
    RightShiftEqual,
    /// >>>=
    UnsignedRightShiftEqual,
    /// &=
    AmpersandEqual,
    /// |=
    PipeEqual,
    /// ^=
    CaretEqual,
    /// &&=
    AmpersandAmpersandEqual,
    /// ||=
    PipePipeEqual,
    /// ??=
    QuestionQuestionEqual,
}

impl TokenKind {
    /// Returns the fixed spelling of a punctuator or keyword, or `None`
    /// for kinds whose text varies.
    pub fn as_str(self) -> Option<&'static str> {
        use TokenKind::*;

        let s = match self {
            Eof | SyntaxError | NumericLiteral | Identifier => return None,

            Break => "break",
            Case => "case",
            Catch => "catch",
            Class => "class",
            Const => "const",
            Continue => "continue",
            Debugger => "debugger",
            Default => "default",
            Delete => "delete",
            Do => "do",
            Else => "else",
            Enum => "enum",
            Export => "export",
            Extends => "extends",
            False => "false",
            Finally => "finally",
            For => "for",
            Function => "function",
            If => "if",
            Import => "import",
            In => "in",
            Instanceof => "instanceof",
            New => "new",
            Null => "null",
            Return => "return",
            Super => "super",
            Switch => "switch",
            This => "this",
            Throw => "throw",
            True => "true",
            Try => "try",
            Typeof => "typeof",
            Var => "var",
            Void => "void",
            While => "while",
            With => "with",
            Implements => "implements",
            Interface => "interface",
            Let => "let",
            Package => "package",
            Private => "private",
            Protected => "protected",
            Public => "public",
            Static => "static",
            Yield => "yield",

            LeftBrace => "{",
            RightBrace => "}",
            LeftParen => "(",
            RightParen => ")",
            LeftBracket => "[",
            RightBracket => "]",
            Dot => ".",
            Ellipsis => "...",
            Semicolon => ";",
            Comma => ",",
            At => "@",
            LessThan => "<",
            GreaterThan => ">",
            LessThanEqual => "<=",
            GreaterThanEqual => ">=",
            EqualEqual => "==",
            NotEqual => "!=",
            StrictEqual => "===",
            StrictNotEqual => "!==",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Percent => "%",
            StarStar => "**",
            PlusPlus => "++",
            MinusMinus => "--",
            LeftShift => "<<",
            RightShift => ">>",
            UnsignedRightShift => ">>>",
            Ampersand => "&",
            Pipe => "|",
            Caret => "^",
            Bang => "!",
            Tilde => "~",
            AmpersandAmpersand => "&&",
            PipePipe => "||",
            QuestionQuestion => "??",
            Question => "?",
            QuestionDot => "?.",
            Colon => ":",
            Arrow => "=>",
            Equal => "=",
            PlusEqual => "+=",
            MinusEqual => "-=",
            StarEqual => "*=",
            SlashEqual => "/=",
            PercentEqual => "%=",
            StarStarEqual => "**=",
            LeftShiftEqual => "<<=",
            RightShiftEqual => ">>=",
            UnsignedRightShiftEqual => ">>>=",
            AmpersandEqual => "&=",
            PipeEqual => "|=",
            CaretEqual => "^=",
            AmpersandAmpersandEqual => "&&=",
            PipePipeEqual => "||=",
            QuestionQuestionEqual => "??=",
        };

        Some(s)
    }

    /// Returns true if this token is a reserved word, including the
    /// strict mode reserved words.
    pub fn is_keyword(self) -> bool {
        self.as_str()
            .is_some_and(|s| s.starts_with(|c: char| c.is_ascii_lowercase()))
    }

    /// Returns true if this token is only reserved in strict mode code.
    pub fn is_strict_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::Implements
                | TokenKind::Interface
                | TokenKind::Let
                | TokenKind::Package
                | TokenKind::Private
                | TokenKind::Protected
                | TokenKind::Public
                | TokenKind::Static
                | TokenKind::Yield
        )
    }

    /// Returns true if this token is a punctuator or operator.
    pub fn is_punctuator(self) -> bool {
        self.as_str().is_some() && !self.is_keyword()
    }

    /// Returns true if this token is an assignment operator.
    pub fn is_assignment(self) -> bool {
        matches!(
            self,
            TokenKind::Equal
                | TokenKind::PlusEqual
                | TokenKind::MinusEqual
                | TokenKind::StarEqual
                | TokenKind::SlashEqual
                | TokenKind::PercentEqual
                | TokenKind::StarStarEqual
                | TokenKind::LeftShiftEqual
                | TokenKind::RightShiftEqual
                | TokenKind::UnsignedRightShiftEqual
                | TokenKind::AmpersandEqual
                | TokenKind::PipeEqual
                | TokenKind::CaretEqual
                | TokenKind::AmpersandAmpersandEqual
                | TokenKind::PipePipeEqual
                | TokenKind::QuestionQuestionEqual
        )
    }

    /// Returns true if this token is a literal.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::NumericLiteral | TokenKind::True | TokenKind::False | TokenKind::Null
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => f.write_str(s),
            None => write!(f, "{self:?}"),
        }
    }
}
