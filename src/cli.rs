// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! CLI argument parsing for jscan.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use jscan_lexer::ScanOptions;

/// jscan - dump the tokens of ECMAScript source files
#[derive(Parser, Debug)]
#[command(name = "jscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source files to scan. Starts the REPL when no input is given.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Scan inline source code
    #[arg(short, long, value_name = "CODE", conflicts_with = "files")]
    pub eval: Option<String>,

    /// Token output format
    #[arg(long, value_enum, default_value_t = Format::Pretty, env = "JSCAN_FORMAT")]
    pub format: Format,

    /// Scan as strict mode code (rejects legacy octal literals)
    #[arg(long)]
    pub strict: bool,

    /// Report malformed tokens and resume at the next whitespace
    #[arg(long)]
    pub recover: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Scanner options selected on the command line.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            strict: self.strict,
        }
    }

    /// Returns true if there is nothing to scan and the REPL should start.
    pub fn wants_repl(&self) -> bool {
        self.files.is_empty() && self.eval.is_none()
    }
}

/// How tokens are printed.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Colored, aligned columns
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}
