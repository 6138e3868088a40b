/* src/cli/core/src/ui.rs */

// Terminal output helpers. Log lines go through tracing; these are for the
// human-facing summary a command prints.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::IsTerminal;
use std::sync::OnceLock;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

fn color_enabled() -> bool {
  static ENABLED: OnceLock<bool> = OnceLock::new();
  *ENABLED.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal())
}

/// Drop escape codes when stdout is not a terminal.
fn paint(line: &str) -> String {
  if color_enabled() {
    return line.to_string();
  }
  let mut out = line.to_string();
  for code in [RESET, BOLD, DIM, RED, GREEN, YELLOW, CYAN] {
    out = out.replace(code, "");
  }
  out
}

pub fn banner(version: &str) {
  println!("{}", paint(&format!("\n  {BOLD}{CYAN}vitrine{RESET} {DIM}v{version}{RESET}\n")));
}

pub fn arrow(msg: &str) {
  println!("{}", paint(&format!("  {CYAN}>{RESET} {msg}")));
}

pub fn ok(msg: &str) {
  println!("{}", paint(&format!("  {GREEN}\u{2713}{RESET} {msg}")));
}

pub fn detail(msg: &str) {
  println!("{}", paint(&format!("    {msg}")));
}

pub fn detail_ok(msg: &str) {
  println!("{}", paint(&format!("    {GREEN}\u{2713}{RESET} {msg}")));
}

pub fn warn(msg: &str) {
  eprintln!("{}", paint(&format!("  {YELLOW}!{RESET} {msg}")));
}

pub fn error(msg: &str) {
  eprintln!("{}", paint(&format!("  {RED}\u{2717}{RESET} {msg}")));
}

/// Aligned `label  value` line.
pub fn kv(label: &str, value: &str) {
  println!("{}", paint(&format!("    {DIM}{label:<12}{RESET}{value}")));
}

/// Raw payload (JSON, HTML) without decoration.
pub fn raw(text: &str) {
  println!("{text}");
}
