use colored::*;
use std::fmt::Display;

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let heading = format!(" {} ", text).bold().bright_white();
    let line = "=".repeat(50).bright_blue();

    println!("\n{}", line);
    println!("{}", heading);
    println!("{}\n", line);
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", label.bright_cyan(), value);
}

/// Print a success message in green
pub fn print_success(text: &str) {
    println!("{}", text.bright_green());
}

/// Print a warning message in yellow
pub fn print_warning(text: &str) {
    println!("{}", text.yellow());
}

/// Print an error message in bold red to stderr
pub fn print_error(text: &str) {
    eprintln!("{}", text.bright_red().bold());
}

/// Shortens a file name for display, keeping its head and tail.
pub fn truncate_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= 42 {
        return name.to_string();
    }
    let head: String = chars[..20].iter().collect();
    let tail: String = chars[chars.len() - 18..].iter().collect();
    format!("{head}...{tail}")
}
