//! Progress output for user-facing status updates.
//!
//! Progress lines go to stderr so stdout stays clean for the rename summary.
//! In verbose mode output is suppressed since tracing handles everything.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};

use crate::parser::ParsedGuess;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Progress {
    /// Create a progress reporter writing to stderr.
    /// When `verbose` is set, output is suppressed (tracing handles it).
    pub fn new(verbose: bool) -> Self {
        let colors_enabled = should_use_colors();
        if !colors_enabled {
            colored::control::set_override(false);
        }

        Self {
            writer: Box::new(io::stderr()),
            silent: verbose,
            colors_enabled,
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    /// Report what was read from the folder name
    pub fn parsed(&mut self, folder_name: &str, guess: &ParsedGuess) {
        if self.silent {
            return;
        }
        let year = guess.year().unwrap_or("unknown");
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "Folder:".bold(), folder_name);
            let _ = writeln!(
                self.writer,
                "{}",
                format!("Parsed title \"{}\", year {}", guess.title, year).dimmed()
            );
        } else {
            let _ = writeln!(self.writer, "Folder: {}", folder_name);
            let _ = writeln!(
                self.writer,
                "Parsed title \"{}\", year {}",
                guess.title, year
            );
        }
    }

    /// Report searching the provider (same line as the result)
    pub fn search_start(&mut self, guess: &ParsedGuess) {
        if self.silent {
            return;
        }
        let message = format!("Searching TMDB for {}...", guess.describe());
        if self.colors_enabled {
            let _ = write!(self.writer, "{}", message.dimmed());
        } else {
            let _ = write!(self.writer, "{}", message);
        }
        let _ = self.writer.flush();
    }

    /// Report the number of candidates found (same line)
    pub fn search_complete(&mut self, count: usize) {
        if self.silent {
            return;
        }
        let noun = if count == 1 { "match" } else { "matches" };
        if self.colors_enabled {
            let result = format!("{} {}", count, noun);
            let styled = if count == 0 { result.yellow() } else { result.green() };
            let _ = writeln!(self.writer, " {}", styled);
        } else {
            let _ = writeln!(self.writer, " {} {}", count, noun);
        }
    }

    /// Report fetching metadata from API
    pub fn fetch_start(&mut self, id: u64) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = write!(
                self.writer,
                "{}",
                format!("Fetching details for tmdb-{}...", id).dimmed()
            );
        } else {
            let _ = write!(self.writer, "Fetching details for tmdb-{}...", id);
        }
        let _ = self.writer.flush();
    }

    /// Report fetch complete (same line)
    pub fn fetch_complete(&mut self) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, " {}", "done".green());
        } else {
            let _ = writeln!(self.writer, " done");
        }
    }

    /// Report the canonical name that will be applied
    pub fn canonical_name(&mut self, name: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "New name:".bold(), name.cyan());
        } else {
            let _ = writeln!(self.writer, "New name: {}", name);
        }
    }

    /// Report an error during operation (non-fatal)
    pub fn warn(&mut self, message: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), message.yellow());
        } else {
            let _ = writeln!(self.writer, "Warning: {}", message);
        }
    }
}
