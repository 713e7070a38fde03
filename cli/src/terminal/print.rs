//! Status output for the updater binary.
//!
//! The inventory binary never prints here; its stdout is reserved for
//! the JSON contract. Only the symbols and the header frame are colored,
//! so piped output stays grep-friendly.

use colored::*;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str) {
    let formatted = format!("⟦ {} ⟧", msg);
    let msg_len = formatted.chars().count();

    let dash_count = TOTAL_WIDTH.saturating_sub(msg_len);
    let left = dash_count / 2;
    let right = dash_count - left;

    let line = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{line}");
}

pub fn success(msg: &str) {
    println!("{} {}", "[+]".green().bold(), msg);
}

pub fn warn(msg: &str) {
    println!("{} {}", "[*]".yellow().bold(), msg);
}

pub fn fail(msg: &str) {
    println!("{} {}", "[-]".red().bold(), msg);
}
