// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Rendering of scan reports.

use std::io::Write;

use jscan_lexer::{Token, TokenKind};
use owo_colors::OwoColorize;

use crate::cli::Format;
use crate::driver::{Entry, Report};
use crate::error::Result;

/// Writes `report` to `out` in the chosen format.
///
/// `with_header` prints the input name before the tokens; it only applies
/// to the pretty format since every JSON line carries the name.
pub fn render(
    report: &Report,
    format: Format,
    with_header: bool,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        Format::Pretty => render_pretty(report, with_header, out),
        Format::Json => render_json(report, out),
    }
}

fn render_pretty(report: &Report, with_header: bool, out: &mut impl Write) -> Result<()> {
    if with_header {
        writeln!(out, "{} {}", "──".dimmed(), report.name.white().bold())?;
    }

    for entry in &report.entries {
        match entry {
            Entry::Token(token) => writeln!(out, "  {}", format_token(token))?,
            Entry::Fault(e) => writeln!(out, "  {} {}", "error:".red().bold(), e)?,
        }
    }

    if report.faults() > 0 {
        writeln!(
            out,
            "  {}",
            format!("{} fault(s) in {}", report.faults(), report.name).dimmed()
        )?;
    }
    Ok(())
}

fn render_json(report: &Report, out: &mut impl Write) -> Result<()> {
    for entry in &report.entries {
        let line = match entry {
            Entry::Token(token) => {
                let mut value = serde_json::to_value(token)?;
                if let Some(object) = value.as_object_mut() {
                    object.insert("source".into(), report.name.clone().into());
                }
                value
            }
            Entry::Fault(e) => serde_json::json!({
                "source": report.name,
                "error": e.to_string(),
            }),
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Formats a token as an aligned, colored `kind  text` row.
pub fn format_token(token: &Token) -> String {
    let kind = format!("{:?}", token.kind);

    match token.kind {
        TokenKind::NumericLiteral => {
            let value = token.value.unwrap_or_default();
            format!("{:22} {}", kind.yellow(), value.yellow())
        }
        TokenKind::Identifier => format!("{:22} {}", kind.white(), token.text),
        TokenKind::SyntaxError => {
            format!("{:22} {}", kind.red().bold(), format!("{:?}", token.text).red())
        }
        kind if kind.is_keyword() => {
            format!("{:22} {}", format!("{kind:?}").magenta(), token.text.magenta().bold())
        }
        _ => format!("{:22} {}", kind.cyan(), token.text.cyan()),
    }
}
