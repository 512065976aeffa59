//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - errors are always shown
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn usage_hint() {
    if !quiet::enabled() {
        eprintln!("Try 'segpass --help' for more information.");
    }
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(msg: &str) {
    if !quiet::enabled() {
        println!("*** {msg} ***");
    }
}

pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Ask whether to print instead when the clipboard is unavailable. Quiet or
/// non-interactive runs fall back to printing without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn settings_reset() {
    if !quiet::enabled() {
        eprintln!("Settings reset to defaults.");
    }
}
