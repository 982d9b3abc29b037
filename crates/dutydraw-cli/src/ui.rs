//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Whether stdout is an interactive terminal.
#[must_use]
pub fn is_interactive() -> bool {
    console::Term::stdout().is_term()
}

/// Header line around `text`.
#[must_use]
pub fn format_header(text: &str, plain: bool) -> String {
    let line = format!("=== {text} ===");
    if plain {
        line
    } else {
        style(line).bold().cyan().to_string()
    }
}

/// Status line kinds and their tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Warning,
    Error,
}

impl Status {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Success => "[OK]",
            Self::Warning => "[WARN]",
            Self::Error => "[ERROR]",
        }
    }
}

/// `text` behind its status tag; the tag is coloured unless `plain`.
#[must_use]
pub fn format_status(status: Status, text: &str, plain: bool) -> String {
    let tag = status.tag();
    if plain {
        return format!("{tag} {text}");
    }
    let tag = match status {
        Status::Success => style(tag).green(),
        Status::Warning => style(tag).yellow(),
        Status::Error => style(tag).red(),
    };
    format!("{} {text}", tag.bold())
}

/// Print a styled header.
pub fn print_header(text: &str) {
    println!("{}", format_header(text, is_color_disabled()));
}

/// Print a success message.
pub fn print_success(text: &str) {
    println!("{}", format_status(Status::Success, text, is_color_disabled()));
}

/// Print a warning to stderr.
pub fn print_warning(text: &str) {
    eprintln!("{}", format_status(Status::Warning, text, is_color_disabled()));
}

/// Print an error message.
pub fn print_error(text: &str) {
    eprintln!("{}", format_status(Status::Error, text, is_color_disabled()));
}
