use std::fmt::Write;
use std::io::IsTerminal;

use crate::error::Result;

use super::{ColorMode, OutputFormatter, PrefsReport, ansi};

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::stdout().is_terminal()
            }
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &PrefsReport) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "Preferences: {}", report.prefs_file.display());

        let flag = if report.use_user_defined_path {
            self.paint(ansi::GREEN, "on")
        } else {
            self.paint(ansi::YELLOW, "off")
        };
        let _ = writeln!(out, "Use remembered directories: {flag}");

        if report.entries.is_empty() {
            let _ = writeln!(out, "\nNo output directories remembered yet.");
            return Ok(out);
        }

        out.push('\n');
        for entry in &report.entries {
            let _ = writeln!(
                out,
                "{}\n  → {}",
                entry.source,
                self.paint(ansi::CYAN, &entry.directory)
            );
        }
        let _ = writeln!(out, "\n{} source file(s)", report.entries.len());
        Ok(out)
    }
}
