//! Terminal output formatting for the appicons CLI.
//!
//! Progress goes to stdout: an emoji banner, one status line per icon and a
//! closing block of next steps. Colour is enabled when stdout is a terminal.

use std::io::{self, IsTerminal, Write};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// Terminal-aware progress printer.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stdout().is_terminal(),
        }
    }

    /// Print a headline prefixed with an emoji.
    /// e.g. "🎨 Generating app icons..."
    pub fn banner(&self, emoji: &str, message: &str) {
        let message = self.bold(message);
        self.write_line(&format!("{emoji} {message}"));
    }

    /// Print a per-item confirmation line.
    /// e.g. "✅ Generated: AppIcon-20x20.png"
    pub fn success(&self, verb: &str, message: &str) {
        let verb = self.paint(GREEN, &format!("{verb}:"));
        self.write_line(&format!("✅ {verb} {message}"));
    }

    /// Print a bold section heading.
    pub fn heading(&self, text: &str) {
        self.write_line(&self.bold(text));
    }

    /// Print an indented secondary line.
    pub fn note(&self, text: &str) {
        self.write_line(&format!("   {text}"));
    }

    /// Print a numbered follow-up step.
    pub fn step(&self, number: usize, message: &str) {
        self.write_line(&format!("{number}. {message}"));
    }

    /// Print an empty line.
    pub fn blank(&self) {
        self.write_line("");
    }

    /// Format a string as bold.
    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    /// Format a string as cyan (for paths, info).
    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn write_line(&self, line: &str) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{line}");
    }
}

/// Pluralize a count: `plural(1, "icon", "icons")` → "1 icon".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_singular() {
        assert_eq!(plural(1, "icon", "icons"), "1 icon");
    }

    #[test]
    fn test_plural_many() {
        assert_eq!(plural(13, "icon", "icons"), "13 icons");
        assert_eq!(plural(0, "icon", "icons"), "0 icons");
    }

    #[test]
    fn test_display_path_absolute() {
        use std::path::Path;
        let p = Path::new("/nonexistent/path/to/AppIcon-20x20.png");
        assert_eq!(display_path(p), "/nonexistent/path/to/AppIcon-20x20.png");
    }

    #[test]
    fn test_plain_formatting_without_colour() {
        let printer = Printer { color: false };
        assert_eq!(printer.bold("x"), "x");
        assert_eq!(printer.cyan("x"), "x");
    }

    #[test]
    fn test_colour_formatting() {
        let printer = Printer { color: true };
        assert_eq!(printer.bold("x"), "\x1b[1mx\x1b[0m");
        assert_eq!(printer.cyan("x"), "\x1b[36mx\x1b[0m");
    }
}
