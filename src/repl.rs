// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL that prints the tokens of each line entered.

use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

use jscan_lexer::keywords;
use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Config, Editor, Helper};
use tracing::{debug, warn};

use crate::cli::Format;
use crate::driver::{self, DriverOptions, Report};
use crate::output;

/// REPL configuration constants
const HISTORY_FILE: &str = ".jscan_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
    Strict,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let rest = input.trim().strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        let cmd = match cmd.as_str() {
            "help" | "h" | "?" => ReplCommand::Help,
            "exit" | "quit" | "q" => ReplCommand::Exit,
            "clear" | "cls" => ReplCommand::Clear,
            "version" | "v" => ReplCommand::Version,
            "load" | "l" => ReplCommand::Load,
            "strict" => ReplCommand::Strict,
            _ => return None,
        };
        Some((cmd, arg))
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Scan a file and print its tokens"),
            (".strict", "Toggle strict mode scanning"),
        ]
    }
}

/// Helper struct for rustyline that provides completion and hints
struct JscanHelper {
    /// Reserved words and REPL commands
    words: Vec<&'static str>,
}

impl JscanHelper {
    fn new() -> Self {
        let commands = ReplCommand::all_commands()
            .iter()
            .filter_map(|(cmd, _)| cmd.split_whitespace().next());

        Self {
            words: keywords::all().map(|(word, _)| word).chain(commands).collect(),
        }
    }

    fn matches<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.words
            .iter()
            .copied()
            .filter(move |w| w.starts_with(word) && w.len() > word.len())
    }
}

/// Byte offset where the word ending at `pos` starts.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .rfind(|c: char| !c.is_alphanumeric() && c != '_' && c != '$' && c != '.')
        .map(|i| i + 1)
        .unwrap_or(0)
}

impl Completer for JscanHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let word = &line[word_start(line, pos)..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let candidates = self
            .matches(word)
            .map(|w| Pair {
                display: w.to_string(),
                replacement: w[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, candidates))
    }
}

impl Hinter for JscanHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[word_start(line, pos)..];
        if word.len() < 2 {
            return None;
        }

        self.matches(word)
            .next()
            .map(|w| w[word.len()..].to_string().dimmed().to_string())
    }
}

impl Highlighter for JscanHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let mut result = String::with_capacity(line.len() * 2);
        let mut current_word = String::new();

        for c in line.chars() {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                current_word.push(c);
                continue;
            }
            if !current_word.is_empty() {
                result.push_str(&highlight_word(&current_word));
                current_word.clear();
            }
            let colored = match c {
                '(' | ')' | '[' | ']' | '{' | '}' => c.yellow().to_string(),
                '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '!' | '&' | '|' | '^' | '?'
                | '~' => c.cyan().to_string(),
                _ => c.to_string(),
            };
            result.push_str(&colored);
        }

        if !current_word.is_empty() {
            result.push_str(&highlight_word(&current_word));
        }

        Cow::Owned(result)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

fn highlight_word(word: &str) -> String {
    if keywords::lookup(word).is_some() {
        word.magenta().bold().to_string()
    } else if word.starts_with(|c: char| c.is_ascii_digit()) {
        word.yellow().to_string()
    } else {
        word.to_string()
    }
}

impl Validator for JscanHelper {}

impl Helper for JscanHelper {}

/// The interactive token dumper
pub struct Repl {
    editor: Editor<JscanHelper, DefaultHistory>,
    history_path: PathBuf,
    options: DriverOptions,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(options: DriverOptions) -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(JscanHelper::new()));

        // Determine history file path
        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jscan")
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                debug!(error = %e, "cannot create history directory");
            }
        }

        if let Err(e) = editor.load_history(&history_path) {
            debug!(error = %e, "no history loaded");
        }

        Ok(Self {
            editor,
            history_path,
            options: DriverOptions {
                recover: true,
                ..options
            },
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> rustyline::Result<()> {
        self.print_banner();

        loop {
            let prompt = self.format_prompt();

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();

                    if trimmed.is_empty() {
                        continue;
                    }

                    if let Some((cmd, arg)) = ReplCommand::parse(trimmed) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    let report = driver::scan_str("<repl>", trimmed, self.options);
                    print_report(&report, false);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break;
                }
                Err(err) => {
                    eprintln!("{}: {:?}", "Error".red().bold(), err);
                    break;
                }
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_path) {
            warn!(error = %e, path = %self.history_path.display(), "failed to save history");
        }

        println!();
        Ok(())
    }

    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!(
            "  {} {} {}",
            "jscan".bright_cyan().bold(),
            "v".dimmed(),
            version.bright_yellow()
        );
        println!(
            "  {}",
            "Type ECMAScript source to see its tokens".dimmed()
        );
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn format_prompt(&self) -> String {
        if self.options.scan.strict {
            format!("{} ", "jscan(strict)>".bright_green().bold())
        } else {
            format!("{} ", "jscan>".bright_green().bold())
        }
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => self.print_help(),
            ReplCommand::Exit => return CommandResult::Exit,
            ReplCommand::Clear => print!("\x1B[2J\x1B[H"),
            ReplCommand::Version => {
                println!(
                    "{} {}",
                    "jscan".bright_cyan().bold(),
                    env!("CARGO_PKG_VERSION").yellow()
                );
            }
            ReplCommand::Load => match arg {
                Some(path) => self.load_file(Path::new(path)),
                None => eprintln!(
                    "{}: {} {}",
                    "Error".red().bold(),
                    ".load".cyan(),
                    "requires a file path".dimmed()
                ),
            },
            ReplCommand::Strict => {
                self.options.scan.strict = !self.options.scan.strict;
                let state = if self.options.scan.strict { "on" } else { "off" };
                println!("{} {}", "strict mode".dimmed(), state.yellow());
            }
        }
        CommandResult::Continue
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:16} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Keyboard Shortcuts:".white().bold());
        println!();
        println!("  {:16} {}", "Ctrl+C".yellow(), "Cancel current input".dimmed());
        println!("  {:16} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
        println!("  {:16} {}", "Tab".yellow(), "Complete reserved words".dimmed());
        println!("  {:16} {}", "↑/↓".yellow(), "Navigate history".dimmed());
        println!();
    }

    fn load_file(&self, path: &Path) {
        match driver::scan_file(path, self.options) {
            Ok(report) => print_report(&report, true),
            Err(e) => eprintln!("{}: {}", "Error".red().bold(), e),
        }
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}

fn print_report(report: &Report, with_header: bool) {
    let mut stdout = io::stdout().lock();
    if let Err(e) = output::render(report, Format::Pretty, with_header, &mut stdout) {
        eprintln!("{}: {}", "Error".red().bold(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repl_command_parse() {
        assert!(matches!(
            ReplCommand::parse(".help"),
            Some((ReplCommand::Help, None))
        ));
        assert!(matches!(
            ReplCommand::parse(".exit"),
            Some((ReplCommand::Exit, None))
        ));
        assert!(matches!(
            ReplCommand::parse(".load test.js"),
            Some((ReplCommand::Load, Some("test.js")))
        ));
        assert!(matches!(
            ReplCommand::parse("  .STRICT  "),
            Some((ReplCommand::Strict, None))
        ));
        assert!(ReplCommand::parse("not a command").is_none());
        assert!(ReplCommand::parse(".5 + 1").is_none());
    }

    #[test]
    fn test_helper_words() {
        let helper = JscanHelper::new();
        assert!(helper.words.contains(&"instanceof"));
        assert!(helper.words.contains(&".strict"));
        assert!(helper.words.contains(&".load"));

        let found: Vec<_> = helper.matches("con").collect();
        assert_eq!(found, vec!["const", "continue"]);
        assert_eq!(helper.matches("const").count(), 0);
    }

    #[test]
    fn test_word_start() {
        assert_eq!(word_start("let x = ins", 11), 8);
        assert_eq!(word_start(".lo", 3), 0);
        assert_eq!(word_start("", 0), 0);
    }

    #[test]
    fn test_highlight_word() {
        assert!(highlight_word("const").contains("const"));
        assert_ne!(highlight_word("const"), "const");
        assert_eq!(highlight_word("foo"), "foo");
        assert_ne!(highlight_word("42"), "42");
    }
}
