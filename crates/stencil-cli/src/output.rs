//! Decorated terminal output for human eyes.
//!
//! Everything glyph-prefixed and coloured goes through [`OutputManager`];
//! the `list` command writes bare machine-readable lines to stdout directly
//! so pipes stay clean.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on flags, config, and terminal state.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
    err_term: Term,
}

impl OutputManager {
    /// Resolve quiet/colour state from flags, config, and the terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Colour is off when any layer disables it, or stdout is not a
        // terminal (piped output must stay clean).
        let no_color = args.no_color || config.output.no_color || !io::stdout().is_terminal();

        Self {
            quiet: args.quiet,
            no_color,
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    /// `<glyph> <msg>`, glyph emphasised, both in the given colour.
    fn decorated(&self, glyph: char, style: Style, msg: &str) -> String {
        if self.no_color {
            format!("{glyph} {msg}")
        } else {
            format!("{} {}", glyph.style(style.bold()), msg.style(style))
        }
    }

    // ── write paths ───────────────────────────────────────────────────────

    /// Undecorated line; dropped in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ msg` in green; dropped in quiet mode.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term
            .write_line(&self.decorated('\u{2713}', Style::new().green(), msg))
    }

    /// `✗ msg` in red, on stderr.  Quiet mode never drops errors.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.err_term
            .write_line(&self.decorated('\u{2717}', Style::new().red(), msg))
    }

    /// `⚠ msg` in yellow; dropped in quiet mode.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term
            .write_line(&self.decorated('\u{26a0}', Style::new().yellow(), msg))
    }

    /// `ℹ msg` in blue; dropped in quiet mode.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term
            .write_line(&self.decorated('\u{2139}', Style::new().blue(), msg))
    }

    /// Bold underlined header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.bold().underline().to_string()
        };
        self.term.write_line(&line)
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// Whether ANSI styling is on.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// Whether quiet mode is in effect.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
