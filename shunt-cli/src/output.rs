//! Console output helpers for the step's progress lines.

use owo_colors::OwoColorize;

/// Get an emoji by shortcode or fall back to a plain character
fn emoji_or(shortcode: &str, fallback: &str) -> String {
  match emojis::get_by_shortcode(shortcode) {
    Some(emoji) => emoji.to_string(),
    None => fallback.to_string(),
  }
}

/// Print a progress line for a network round-trip
pub fn print_step(message: &str) {
  let package = emoji_or("package", ">");
  println!("{package} {message}");
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = emoji_or("white_check_mark", "✓");
  println!("{} {}", check, message.green());
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = emoji_or("cross_mark", "✗");
  eprintln!("{} {}", cross.red().bold(), message);
}
