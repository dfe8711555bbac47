//! vtsh REPL: the driver around the kernel's command set.
//!
//! This crate is thin glue: it splits input lines into a command name and
//! arguments, dispatches through [`Shell`], and renders the structured
//! outcome as text. The same line handling serves the interactive loop and
//! the start-script runner, so a command behaves identically wherever it
//! comes from. The kernel signals termination through the outcome's
//! `terminate` flag; only this crate ever stops reading input.

use std::path::Path;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use vtsh_kernel::{Shell, VfsError};

/// Result of feeding one input line to the shell.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Nothing to display (blank line, comment, or quiet success).
    Quiet,
    /// Text to display, payload and diagnostics alike.
    Output(String),
    /// The `exit` command ran; stop reading input.
    Exit,
}

/// Split a raw input line into a command name and argument tokens.
///
/// Blank lines and lines whose first non-whitespace character is `#` are
/// filtered out here, identically for interactive and scripted input.
pub fn split_line(line: &str) -> Option<(String, Vec<String>)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let mut tokens = trimmed.split_whitespace().map(str::to_string);
    let command = tokens.next()?;
    Some((command, tokens.collect()))
}

/// The interactive driver: a shell plus a prompt name.
pub struct Repl {
    shell: Shell,
    name: String,
}

impl Repl {
    /// Wrap a shell with the given prompt name.
    pub fn new(shell: Shell, name: impl Into<String>) -> Self {
        Self {
            shell,
            name: name.into(),
        }
    }

    /// The prompt for the current position, `name:/path$ `.
    pub fn prompt(&self) -> String {
        let tree = self.shell.tree();
        format!("{}:{}$ ", self.name, tree.path(tree.cursor()))
    }

    /// Feed one line through the dispatcher.
    ///
    /// Command-level errors come back as renderable output; they never
    /// abort the caller's loop.
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        let Some((command, args)) = split_line(line) else {
            return LineOutcome::Quiet;
        };
        match self.shell.dispatch(&command, &args) {
            Ok(outcome) => {
                if outcome.terminate {
                    return LineOutcome::Exit;
                }
                let mut lines = outcome.out;
                lines.extend(outcome.err);
                if lines.is_empty() {
                    LineOutcome::Quiet
                } else {
                    LineOutcome::Output(lines.join("\n"))
                }
            }
            // These two already name the offending command.
            Err(e @ (VfsError::UnknownCommand(_) | VfsError::Usage(_))) => {
                LineOutcome::Output(e.to_string())
            }
            Err(e) => LineOutcome::Output(format!("{command}: {e}")),
        }
    }

    /// Run a start script line by line.
    ///
    /// A failing line is reported and processing continues with the next
    /// one. Returns `true` if the script hit `exit`, in which case the
    /// caller should not enter the interactive loop.
    pub fn run_script(&mut self, path: &Path) -> Result<bool> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script: {}", path.display()))?;
        for line in source.lines() {
            match self.process_line(line) {
                LineOutcome::Quiet => {}
                LineOutcome::Output(output) => println!("{output}"),
                LineOutcome::Exit => return Ok(true),
            }
        }
        Ok(false)
    }

    /// Run the interactive read loop until `exit` or end of input.
    pub fn run_interactive(&mut self) -> Result<()> {
        let mut rl: Editor<(), DefaultHistory> =
            Editor::new().context("failed to create line editor")?;
        loop {
            match rl.readline(&self.prompt()) {
                Ok(line) => {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        tracing::warn!("failed to add history entry: {e}");
                    }
                    match self.process_line(&line) {
                        LineOutcome::Quiet => {}
                        LineOutcome::Output(output) => println!("{output}"),
                        LineOutcome::Exit => break,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    break;
                }
                Err(e) => return Err(e).context("read error"),
            }
        }
        Ok(())
    }
}
