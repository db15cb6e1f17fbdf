//! Colored terminal output helpers.
//!
//! Respects `NO_COLOR` and falls back to plain text when stdout is not
//! a terminal.

use std::io::IsTerminal;

const SUCCESS: &str = "\x1b[32m";
const ERROR: &str = "\x1b[31m";
const INFO: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

fn colors_enabled() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| !v.is_empty()) {
        return false;
    }
    std::io::stdout().is_terminal()
}

fn print_colored(code: &str, prefix: &str, message: &str) {
    if colors_enabled() {
        println!("{code}{prefix}{RESET} {message}");
    } else {
        println!("{prefix} {message}");
    }
}

pub fn print_success(message: &str) {
    print_colored(SUCCESS, "\u{2713}", message);
}

pub fn print_error(message: &str) {
    print_colored(ERROR, "\u{2717}", message);
}

pub fn print_info(message: &str) {
    print_colored(INFO, "\u{2139}", message);
}

pub fn print_dim(message: &str) {
    if colors_enabled() {
        println!("{DIM}{message}{RESET}");
    } else {
        println!("{message}");
    }
}
