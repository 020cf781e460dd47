//! Sentiment Analyzer

use super::{Descriptor, EngineState, LoadStatus};
use crate::core::{Category, Prediction};
use crate::engine::{SentimentEngine, SentimentLoader};
use crate::error::{ModelError, Result};

pub struct TextModel {
	descriptor: Descriptor,
	loader: Box<dyn SentimentLoader>,
	state: EngineState<Box<dyn SentimentEngine>>,
}

impl TextModel {
	pub fn new(loader: Box<dyn SentimentLoader>) -> Self {
		Self {
			descriptor: Descriptor::new(
				"sentiment",
				"Sentiment Analyzer",
				"Classifies text as Positive/Negative.",
			),
			loader,
			state: EngineState::Uninitialized,
		}
	}

	pub fn descriptor(&self) -> &Descriptor {
		&self.descriptor
	}

	pub fn is_loaded(&self) -> bool {
		self.state.is_ready()
	}

	/// Reason of the last failed load, cleared by a successful one
	pub fn last_error(&self) -> Option<&str> {
		self.state.failure()
	}

	fn not_loaded(&self) -> ModelError {
		ModelError::NotLoaded {
			model: self.descriptor.name().to_string(),
			last_error: self.last_error().map(str::to_string),
		}
	}

	pub fn load(&mut self) -> Result<LoadStatus> {
		if self.state.is_ready() {
			return Ok(LoadStatus::AlreadyLoaded);
		}

		crate::ui::debug(&format!("Loading {}", self.descriptor.name()));
		match self.loader.load() {
			Ok(engine) => {
				self.state = EngineState::Ready(engine);
				Ok(LoadStatus::Loaded)
			}
			Err(e) => {
				let reason = format!("{:#}", e);
				self.state = EngineState::Failed(reason.clone());
				Err(ModelError::LoadFailed {
					model: self.descriptor.name().to_string(),
					reason,
				})
			}
		}
	}

	pub fn predict(&mut self, text: &str) -> Result<Prediction> {
		let Some(engine) = self.state.engine_mut() else {
			return Err(self.not_loaded());
		};

		if text.trim().is_empty() {
			return Err(ModelError::EmptyInput { category: Category::Text });
		}

		let sentiment = engine
			.classify(text)
			.map_err(|e| ModelError::Inference { reason: format!("{:#}", e) })?;

		Ok(Prediction::Sentiment(sentiment))
	}
}
