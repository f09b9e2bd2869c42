//! Scanner options.

/// Knobs that change how the scanner treats source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Scan as strict mode code: legacy octal literals (`010`) and decimal
    /// literals with a redundant leading zero (`08`) are malformed.
    pub strict: bool,
}

impl ScanOptions {
    /// Options for strict mode code.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}
