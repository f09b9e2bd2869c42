// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! jscan - dump the tokens of ECMAScript source
//!
//! This is the main entry point for the jscan CLI/REPL.
//!
//! ## Features
//!
//! - Token listings for files and inline code, pretty or as JSON lines
//! - Files are scanned in parallel with rayon and printed in argument order
//! - Interactive REPL with keyword completion and history

mod cli;
mod driver;
mod error;
mod output;
mod repl;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use rayon::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use driver::DriverOptions;
use error::Result;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with token output. `RUST_LOG`
/// overrides the level picked by `--verbose`.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Runs the selected mode. Returns false if any input had faults.
fn run(cli: &Cli) -> Result<bool> {
    let options = DriverOptions {
        scan: cli.scan_options(),
        recover: cli.recover,
    };

    if cli.wants_repl() {
        repl::Repl::new(options)?.run()?;
        return Ok(true);
    }

    let mut stdout = io::stdout().lock();

    if let Some(code) = &cli.eval {
        let report = driver::scan_str("<eval>", code, options);
        output::render(&report, cli.format, false, &mut stdout)?;
        return Ok(report.is_clean());
    }

    let reports: Vec<_> = cli
        .files
        .par_iter()
        .map(|path| driver::scan_file(path, options))
        .collect();

    let with_header = cli.files.len() > 1;
    let mut clean = true;

    for report in reports {
        match report {
            Ok(report) => {
                clean &= report.is_clean();
                output::render(&report, cli.format, with_header, &mut stdout)?;
            }
            Err(e) => {
                clean = false;
                stdout.flush()?;
                eprintln!("{}: {}", "Error".red().bold(), e);
            }
        }
    }

    Ok(clean)
}
