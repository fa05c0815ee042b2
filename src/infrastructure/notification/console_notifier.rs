//! Terminal notification surface.

use super::service::Notifier;
use colored::*;

/// Prints notifications to the terminal.
///
/// Successes and warnings go to stdout, errors to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn ok(&self, message: &str) {
        println!("{} {}", "✔".green().bold(), message.green());
    }

    fn warning(&self, message: &str, detail: Option<&str>) {
        println!("{} {}", "!".yellow().bold(), message.yellow());
        if let Some(detail) = detail {
            for line in detail.lines() {
                println!("  {}", line);
            }
        }
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✖".red().bold(), message.red());
    }
}
