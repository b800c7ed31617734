use std::io::{self, IsTerminal, Write};

pub struct OutputConfig {
    pub json: bool,
    pub verbose: bool,
    pub quiet: bool,
    pub no_color: bool,
}

impl OutputConfig {
    pub fn from_global(json: bool, verbose: bool, quiet: bool, no_color: bool) -> Self {
        let no_color = no_color || std::env::var("NO_COLOR").is_ok() || !io::stderr().is_terminal();
        Self {
            json,
            verbose,
            quiet,
            no_color,
        }
    }

    /// Log level used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }

    /// Print a status/confirmation message (suppressed in quiet and JSON mode).
    pub fn status(&self, msg: &str) {
        if !self.quiet && !self.json {
            println!("{msg}");
        }
    }

    /// Print extra detail (only shown in verbose mode, suppressed in quiet mode).
    pub fn detail(&self, msg: &str) {
        if self.verbose && !self.quiet && !self.json {
            println!("{msg}");
        }
    }

    pub fn print_json<T: serde::Serialize>(&self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}
