//! The reserved word table.
//!
//! Built once on first use and never mutated afterwards, so lookups need
//! no synchronization.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::TokenKind;

/// Reserved words in declaration order.
const KEYWORDS: &[(&str, TokenKind)] = &[
    // Reserved words
    ("break", TokenKind::Break),
    ("case", TokenKind::Case),
    ("catch", TokenKind::Catch),
    ("class", TokenKind::Class),
    ("const", TokenKind::Const),
    ("continue", TokenKind::Continue),
    ("debugger", TokenKind::Debugger),
    ("default", TokenKind::Default),
    ("delete", TokenKind::Delete),
    ("do", TokenKind::Do),
    ("else", TokenKind::Else),
    ("enum", TokenKind::Enum),
    ("export", TokenKind::Export),
    ("extends", TokenKind::Extends),
    ("false", TokenKind::False),
    ("finally", TokenKind::Finally),
    ("for", TokenKind::For),
    ("function", TokenKind::Function),
    ("if", TokenKind::If),
    ("import", TokenKind::Import),
    ("in", TokenKind::In),
    ("instanceof", TokenKind::Instanceof),
    ("new", TokenKind::New),
    ("null", TokenKind::Null),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("switch", TokenKind::Switch),
    ("this", TokenKind::This),
    ("throw", TokenKind::Throw),
    ("true", TokenKind::True),
    ("try", TokenKind::Try),
    ("typeof", TokenKind::Typeof),
    ("var", TokenKind::Var),
    ("void", TokenKind::Void),
    ("while", TokenKind::While),
    ("with", TokenKind::With),
    // Strict mode reserved words
    ("implements", TokenKind::Implements),
    ("interface", TokenKind::Interface),
    ("let", TokenKind::Let),
    ("package", TokenKind::Package),
    ("private", TokenKind::Private),
    ("protected", TokenKind::Protected),
    ("public", TokenKind::Public),
    ("static", TokenKind::Static),
    ("yield", TokenKind::Yield),
];

static TABLE: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Looks up a reserved word. The match is exact and case-sensitive.
pub fn lookup(word: &str) -> Option<TokenKind> {
    TABLE.get(word).copied()
}

/// Iterates over every reserved word and its kind, in declaration order.
pub fn all() -> impl Iterator<Item = (&'static str, TokenKind)> {
    KEYWORDS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hits() {
        assert_eq!(lookup("const"), Some(TokenKind::Const));
        assert_eq!(lookup("instanceof"), Some(TokenKind::Instanceof));
        assert_eq!(lookup("yield"), Some(TokenKind::Yield));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup("Const"), None);
        assert_eq!(lookup("NULL"), None);
    }

    #[test]
    fn test_lookup_misses() {
        assert_eq!(lookup("async"), None);
        assert_eq!(lookup("await"), None);
        assert_eq!(lookup("undefined"), None);
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("consts"), None);
    }

    #[test]
    fn test_table_agrees_with_spelling() {
        for (word, kind) in all() {
            assert_eq!(kind.as_str(), Some(word));
            assert!(kind.is_keyword(), "{word} should be a keyword");
        }
    }

    #[test]
    fn test_table_has_no_duplicates() {
        assert_eq!(all().count(), TABLE.len());
        assert_eq!(all().count(), 45);
    }

    #[test]
    fn test_strict_words_are_last() {
        let strict: Vec<_> = all().filter(|(_, k)| k.is_strict_reserved()).collect();
        assert_eq!(strict.len(), 9);
        assert_eq!(strict[0].0, "implements");
    }
}
