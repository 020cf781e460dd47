//! Run command - load a model and predict once

use std::path::Path;
use std::time::Instant;

use crate::core::{Category, Prediction};
use crate::error::ModelError;
use crate::models::Dispatcher;
use crate::ui;

const INPUT_PREVIEW_CHARS: usize = 30;

/// Run a prediction and print the result or the labelled error
pub fn predict(
	dispatcher: &mut Dispatcher,
	name: &str,
	declared: Category,
	payload: &str,
) -> Result<Prediction, ModelError> {
	let display = dispatcher
		.info(name)
		.map(|info| info.name)
		.unwrap_or_else(|| name.to_string());
	ui::header(&format!("--- Running {} ---", display));

	if declared == Category::Vision && !payload.is_empty() {
		let path = Path::new(payload);
		ui::info(&format!("Image: {}", ui::path_link(path, 60)));
		if Category::detect(path).is_none() {
			ui::warn("Unrecognized image extension, trying anyway");
		}
	}

	let start = Instant::now();
	match dispatcher.run(name, declared, payload) {
		Ok(prediction) => {
			ui::info(&format!("Input: '{}'", ui::preview(payload, INPUT_PREVIEW_CHARS)));
			ui::success(&prediction.to_string());
			ui::debug(&format!("Predicted in {}ms", start.elapsed().as_millis()));
			Ok(prediction)
		}
		Err(e) => {
			ui::model_error(&e);
			Err(e)
		}
	}
}

pub fn run(
	dispatcher: &mut Dispatcher,
	name: &str,
	text: Option<&str>,
	image: Option<&Path>,
) -> anyhow::Result<()> {
	let (declared, payload) = match (text, image) {
		(Some(t), _) => (Category::Text, t.to_string()),
		(None, Some(p)) => (Category::Vision, p.to_string_lossy().into_owned()),
		(None, None) => anyhow::bail!("Provide --text or --image"),
	};

	// A mismatched or unknown model is rejected by the dispatcher without loading
	let category = dispatcher.info(name).and_then(|info| info.category);
	if category == Some(declared) {
		super::load::load(dispatcher, name)?;
	}
	predict(dispatcher, name, declared, &payload)?;
	Ok(())
}
