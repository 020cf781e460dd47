//! Load command - initialise a model and report how

use std::time::Instant;

use crate::error::ModelError;
use crate::models::Dispatcher;
use crate::ui;

/// Load `name`, printing progress. Errors are printed and handed back.
pub fn load(dispatcher: &mut Dispatcher, name: &str) -> Result<(), ModelError> {
	let display = dispatcher
		.info(name)
		.map(|info| info.name)
		.unwrap_or_else(|| name.to_string());
	ui::info(&format!("Attempting to load: {}...", display));

	let start = Instant::now();
	match dispatcher.load(name) {
		Ok(status) => {
			ui::success(&status.message(&display));
			ui::debug(&format!("Ready in {:.2}s", start.elapsed().as_secs_f32()));
			Ok(())
		}
		Err(e) => {
			ui::model_error(&e);
			Err(e)
		}
	}
}

pub fn run(dispatcher: &mut Dispatcher, name: &str) -> anyhow::Result<()> {
	load(dispatcher, name)?;
	Ok(())
}
