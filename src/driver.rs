// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Drives a scanner over one input and records what it produced.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use jscan_lexer::{
    CharSource, ReaderSource, ScanError, ScanOptions, Scanner, StrSource, Token, TokenKind,
};
use tracing::{debug, info};

use crate::error::{CliError, Result};

/// One item of scanner output, in input order.
#[derive(Debug)]
pub enum Entry {
    Token(Token),
    Fault(ScanError),
}

/// Everything scanned from one input.
#[derive(Debug)]
pub struct Report {
    /// Display name of the input (a path, `<eval>` or `<repl>`)
    pub name: String,
    pub entries: Vec<Entry>,
}

impl Report {
    /// Number of faults recorded.
    pub fn faults(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, Entry::Fault(_)))
            .count()
    }

    /// Returns true if the input scanned without faults. Syntax error
    /// tokens count as faults too.
    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(|e| match e {
            Entry::Token(token) => token.kind != TokenKind::SyntaxError,
            Entry::Fault(_) => false,
        })
    }
}

/// How the driver reacts to scanner faults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverOptions {
    pub scan: ScanOptions,
    /// Resume at the next whitespace after a malformed token
    pub recover: bool,
}

/// Scans in-memory source text.
pub fn scan_str(name: &str, source: &str, options: DriverOptions) -> Report {
    let scanner = Scanner::with_options(StrSource::new(source), options.scan);
    drive(name, scanner, options.recover)
}

/// Scans a UTF-8 file, decoding it incrementally.
pub fn scan_file(path: &Path, options: DriverOptions) -> Result<Report> {
    let file = File::open(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let scanner = Scanner::with_options(ReaderSource::new(BufReader::new(file)), options.scan);
    Ok(drive(&path.display().to_string(), scanner, options.recover))
}

fn drive<S: CharSource>(name: &str, mut scanner: Scanner<S>, recover: bool) -> Report {
    let mut entries = Vec::new();

    loop {
        match scanner.next_token() {
            Ok(token) if token.is_eof() => break,
            Ok(token) => entries.push(Entry::Token(token)),
            Err(e) => {
                let resumable = recover && !e.is_io();
                entries.push(Entry::Fault(e));
                if !resumable {
                    break;
                }
                if let Err(e) = scanner.skip_to_whitespace() {
                    entries.push(Entry::Fault(e));
                    break;
                }
            }
        }
    }

    let report = Report {
        name: name.to_string(),
        entries,
    };
    info!(
        input = %report.name,
        entries = report.entries.len(),
        faults = report.faults(),
        "scanned"
    );
    if !report.is_clean() {
        debug!(input = %report.name, "input has faults");
    }
    report
}
