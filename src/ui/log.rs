//! Unified logging system

use colored::*;
use rand::seq::IndexedRandom;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::ModelError;

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
    ____            
   / __ \__  ______ 
  / / / / / / / __ \
 / /_/ / /_/ / /_/ /
/_____/\__,_/\____/ "#;

const SLOGANS: &[&str] = &[
	"Two models walk into a terminal",
	"Is it a 7 or a 1? Let's find out",
	"Sentiment: cautiously POSITIVE",
	"Now with 100% fewer windows",
	"28 by 28 pixels of pure destiny",
	"I love this (Score: 1.00)",
	"Load first, ask questions later",
];

pub fn random_slogan() -> &'static str {
	SLOGANS.choose(&mut rand::rng()).copied().unwrap_or(SLOGANS[0])
}

pub fn print_logo() {
	println!("{}", LOGO.bright_blue().bold());
	println!("{}", random_slogan().dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	println!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	println!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		println!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}

/// Labelled model error, e.g. `✗ [decode error] Failed to open image ...`
pub fn model_error(err: &ModelError) {
	error(&format!("{} {}", format!("[{}]", err.label()).red(), err));
}

/// Clickable file path (OSC 8 terminal hyperlink)
pub fn path_link(path: &std::path::Path, max_len: usize) -> String {
	let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

	let uri = if cfg!(windows) {
		let path_str = absolute.to_string_lossy();
		let cleaned = path_str.strip_prefix(r"\\?\").unwrap_or(&path_str);
		format!("file:///{}", cleaned.replace('\\', "/"))
	} else {
		format!("file://{}", absolute.display())
	};

	let filename = path
		.file_name()
		.and_then(|n| n.to_str())
		.unwrap_or("unknown");

	format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", uri, shorten(filename, max_len))
}

/// Keep both ends of a long name, char-boundary safe
fn shorten(name: &str, max_len: usize) -> String {
	let chars: Vec<char> = name.chars().collect();
	if chars.len() <= max_len || max_len < 8 {
		return name.to_string();
	}

	let head = max_len / 2;
	let tail = max_len - head - 3;
	let start: String = chars[..head].iter().collect();
	let end: String = chars[chars.len() - tail..].iter().collect();
	format!("{}...{}", start, end)
}

/// First `max_chars` characters of an input, with `...` when cut
pub fn preview(input: &str, max_chars: usize) -> String {
	match input.char_indices().nth(max_chars) {
		Some((cut, _)) => format!("{}...", &input[..cut]),
		None => input.to_string(),
	}
}
