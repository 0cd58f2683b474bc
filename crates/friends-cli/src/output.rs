//! Terminal output for one-shot commands.
//!
//! Results go to stdout so they can be piped; problems go to stderr.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use friends_core::FieldErrors;

use crate::router::Route;

pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print every failing form field, one per line.
pub fn field_errors(errors: &FieldErrors) {
    for line in field_error_lines(errors) {
        error(&line);
    }
}

fn field_error_lines(errors: &FieldErrors) -> Vec<String> {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect()
}

/// Print the route a browser session would now show.
pub fn page(route: &Route) {
    println!("{} {}", "Page:".dimmed(), route.path().cyan());
}

pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
