//! Terminal output: the deploy banner, step status markers, the settings
//! listing and error lines.

pub mod reporter;

use console::Term;
use owo_colors::{OwoColorize as _, Style};
pub use reporter::TerminalReporter;

/// Colors used on stdout/stderr. All plain when colors are off.
#[derive(Debug, Default, Clone, Copy)]
pub struct Palette {
    pub ok: Style,
    pub failed: Style,
    pub banner: Style,
    pub key: Style,
}

impl Palette {
    #[must_use]
    pub fn colored() -> Self {
        Self {
            ok: Style::new().green().bold(),
            failed: Style::new().red().bold(),
            banner: Style::new().cyan().bold(),
            key: Style::new().dimmed(),
        }
    }
}

/// Where operator-facing output goes and how it looks.
pub struct OutputContext {
    pub palette: Palette,
    /// Suppress everything except errors.
    pub quiet: bool,
}

impl OutputContext {
    /// Colors are used only on a TTY and without `--no-color` (which clap
    /// also reads from `NO_COLOR`).
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let use_colors = !no_color && Term::stdout().is_term();
        let palette = if use_colors {
            Palette::colored()
        } else {
            Palette::default()
        };
        Self { palette, quiet }
    }

    /// `##### {title} #####`
    pub fn banner(&self, title: &str) {
        if !self.quiet {
            println!("{}", format!("##### {title} #####").style(self.palette.banner));
        }
    }

    /// `OK` or `FAILED`, closing an inline step line.
    #[must_use]
    pub fn status_marker(&self, ok: bool) -> String {
        if ok {
            "OK".style(self.palette.ok).to_string()
        } else {
            "FAILED".style(self.palette.failed).to_string()
        }
    }

    /// Final line of a successful command.
    pub fn done(&self, msg: &str) {
        if !self.quiet {
            println!("{} {msg}", "✓".style(self.palette.ok));
        }
    }

    /// Error line on stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {msg}", "✗".style(self.palette.failed));
    }

    /// Print `key: value` lines in config-file syntax, values aligned on the
    /// longest key, under a `# {comment}` line.
    pub fn settings(&self, comment: &str, entries: &[(&str, String)]) {
        if self.quiet {
            return;
        }
        println!("{}", format!("# {comment}").style(self.palette.key));
        for line in settings_lines(entries) {
            println!("{line}");
        }
    }
}

fn settings_lines(entries: &[(&str, String)]) -> Vec<String> {
    let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    entries
        .iter()
        .map(|(key, value)| format!("{:<pad$} {value}", format!("{key}:"), pad = width + 1))
        .collect()
}
