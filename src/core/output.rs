//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Release notes themselves are printed verbatim so they can be piped into a
//! file. Everything around them (status lines, errors, usage) goes through the
//! helpers here.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, blue for headings
//! - **Verbatim notes**: Rendered Markdown is never colored

use crate::core::category::Category;
use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Status line for commands whose stdout carries release notes; goes to stderr
///
/// # Format
/// ```text
/// ✓ <message>
/// ```
pub fn print_status(message: &str) {
    eprintln!("{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Print rendered release notes exactly as produced
pub fn print_notes(notes: &str) {
    println!("{notes}");
}

/// Usage block shown for invalid commands, categories or missing arguments
pub fn usage_text() -> String {
    let categories = Category::choices();
    format!(
        "Usage
  $ changelog new <{categories}> \"<content>\"
  $ changelog init
  $ changelog release <version>
  $ changelog unreleased

Options
  --root <PATH>  Project root containing the changelog folder
  --no-input     Never prompt for missing arguments
  --debug        Enable debug logging
  --help, -h     Help

Examples
  $ changelog new added \"Changed Layout\"
  $ changelog init
  $ changelog release 1.0.1
  $ changelog unreleased"
    )
}

pub fn print_usage() {
    eprintln!("{}", usage_text().blue());
}
