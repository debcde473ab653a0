use colored::Colorize;
use std::fmt;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

/// Enables or disables ANSI styling for everything printed afterwards.
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "INFO",
        MessageKind::Success => "OK",
        MessageKind::Warning => "WARNING",
        MessageKind::Error => "ERROR",
        MessageKind::Section => "",
    }
}

pub fn format_message(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => format!("{}: {}", label(kind), text),
    };
    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info => base,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = format_message(kind, message);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        MessageKind::Error => eprintln!("{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_messages_carry_labels() {
        set_color_enabled(false);
        assert_eq!(format_message(MessageKind::Warning, "careful"), "WARNING: careful");
        assert_eq!(format_message(MessageKind::Section, " Inventory "), "=== Inventory ===");
    }
}
