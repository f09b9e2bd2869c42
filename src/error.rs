// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the jscan binary.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using CliError
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that stop the driver. Malformed tokens are not among them; they
/// are collected into the scan report instead.
#[derive(Error, Debug)]
pub enum CliError {
    /// A source file could not be opened
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Line editor error
    #[error("REPL error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
