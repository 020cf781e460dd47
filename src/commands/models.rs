//! Models command - list what can be loaded

use colored::Colorize;

use crate::models::{Dispatcher, ModelInfo};
use crate::ui;

pub fn run(dispatcher: &Dispatcher) -> anyhow::Result<()> {
	let infos = dispatcher.infos();
	ui::header(&format!("{} models", infos.len()));

	for info in &infos {
		println!("{}", format_row(info));
	}
	println!();

	Ok(())
}

pub fn format_row(info: &ModelInfo) -> String {
	let status = if info.loaded { "loaded".green() } else { "not loaded".dimmed() };
	format!(
		"  {} {} {:<7} {} {}",
		format!("{:<10}", info.id).yellow(),
		format!("{:<24}", info.name).bright_white(),
		info.category_label(),
		info.description.dimmed(),
		format!("[{}]", status),
	)
}
