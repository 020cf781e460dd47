//! Info command - show the selected model

use colored::Colorize;

use crate::models::{Dispatcher, ModelInfo};

pub fn run(dispatcher: &mut Dispatcher, name: &str) -> anyhow::Result<()> {
	let info = dispatcher.select(name);
	print(&info);
	Ok(())
}

pub fn print(info: &ModelInfo) {
	println!("{}", "Selected Model Info:".bright_blue().bold());
	for line in lines(info) {
		println!("  {}", line);
	}
}

/// Display lines, N/A for unknown models. A failed load adds its reason.
pub fn lines(info: &ModelInfo) -> Vec<String> {
	let mut lines = vec![
		format!("• Model Name: {}", info.name),
		format!("• Category: {}", info.category_label()),
		format!("• Short Description: {}", info.description),
	];
	if let Some(reason) = &info.last_error {
		lines.push(format!("• Last Error: {}", reason));
	}
	lines
}
