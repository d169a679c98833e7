use colored::{ColoredString, Colorize};
use std::fmt::Display;

#[derive(Debug, PartialEq, Eq)]
pub enum Status {
    Info,
    Warning,
    Error,
}

impl Status {
    fn symbol(&self) -> ColoredString {
        match self {
            Self::Info => "~".cyan(),
            Self::Warning => "!".yellow(),
            Self::Error => "!".red(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn format_status(status: &Status, message: &impl Display) -> String {
    format!("[{status}] {message}")
}

/// Every status line goes to stderr so stdout only carries filter results
pub fn status(status: &Status, message: &impl Display, newline: bool) {
    let line = format_status(status, message);
    let newline = if newline { "\n" } else { "" };

    eprintln!("{newline}{line}");
}

#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::io::logger::status(
            &$crate::io::logger::Status::Info,
            &$message.to_string(),
            false,
        );
    };
    ($message:expr, $newline:expr) => {
        $crate::io::logger::status(
            &$crate::io::logger::Status::Info,
            &$message.to_string(),
            $newline,
        );
    };
}

#[macro_export]
macro_rules! log_warn {
    ($message:expr) => {
        $crate::io::logger::status(
            &$crate::io::logger::Status::Warning,
            &$message.to_string(),
            false,
        );
    };
    ($message:expr, $newline:expr) => {
        $crate::io::logger::status(
            &$crate::io::logger::Status::Warning,
            &$message.to_string(),
            $newline,
        );
    };
}

#[macro_export]
macro_rules! log_error {
    ($message:expr) => {
        $crate::io::logger::status(
            &$crate::io::logger::Status::Error,
            &$message.to_string(),
            false,
        );
    };
    ($message:expr, $newline:expr) => {
        $crate::io::logger::status(
            &$crate::io::logger::Status::Error,
            &$message.to_string(),
            $newline,
        );
    };
}
