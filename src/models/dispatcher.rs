//! Routes run requests to the model they name

use std::path::Path;

use super::{ImageModel, LoadStatus, Model, ModelInfo, TextModel};
use crate::core::{Category, Prediction};
use crate::engine::mock::{LoadCounter, MockDigitLoader, MockSentimentLoader};
use crate::engine::{ArtifactDigitLoader, OnnxSentimentLoader, Provenance};
use crate::error::{ModelError, Result};

/// Owns the models it was built with; the set never changes afterwards.
pub struct Dispatcher {
	models: Vec<Model>,
	selected: Option<usize>,
	current: Option<usize>,
}

impl Dispatcher {
	pub fn new(models: Vec<Model>) -> Self {
		Self {
			models,
			selected: None,
			current: None,
		}
	}

	/// Both models backed by ONNX Runtime, paths from [`crate::config`]
	pub fn with_onnx() -> Self {
		Self::new(vec![
			TextModel::new(Box::new(OnnxSentimentLoader::from_config())).into(),
			ImageModel::new(Box::new(ArtifactDigitLoader::from_config())).into(),
		])
	}

	/// Both models backed by mock engines
	pub fn with_mocks() -> Self {
		Self::new(vec![
			TextModel::new(Box::new(MockSentimentLoader::new(LoadCounter::new()))).into(),
			ImageModel::new(Box::new(MockDigitLoader::new(
				LoadCounter::new(),
				Provenance::Artifact,
			)))
			.into(),
		])
	}

	fn position(&self, name: &str) -> Option<usize> {
		self.models.iter().position(|m| m.descriptor().matches(name))
	}

	fn resolve(&self, name: &str) -> Result<usize> {
		self.position(name).ok_or_else(|| ModelError::UnknownModelName {
			name: name.trim().to_string(),
		})
	}

	/// Snapshot of `name` without touching the selection
	pub fn info(&self, name: &str) -> Option<ModelInfo> {
		self.position(name).map(|idx| self.models[idx].info())
	}

	pub fn infos(&self) -> Vec<ModelInfo> {
		self.models.iter().map(Model::info).collect()
	}

	/// Descriptor of `name` for display, or the N/A snapshot. Never fails.
	pub fn select(&mut self, name: &str) -> ModelInfo {
		match self.position(name) {
			Some(idx) => {
				self.selected = Some(idx);
				self.models[idx].info()
			}
			None => {
				crate::ui::debug(&format!("No model named '{}'", name));
				ModelInfo::not_available()
			}
		}
	}

	pub fn selected(&self) -> Option<ModelInfo> {
		self.selected.map(|idx| self.models[idx].info())
	}

	/// Last model loaded successfully
	pub fn current(&self) -> Option<ModelInfo> {
		self.current.map(|idx| self.models[idx].info())
	}

	pub fn is_loaded(&self, name: &str) -> bool {
		self.position(name)
			.map(|idx| self.models[idx].is_loaded())
			.unwrap_or(false)
	}

	pub fn load(&mut self, name: &str) -> Result<LoadStatus> {
		let idx = self.resolve(name)?;
		let status = self.models[idx].load()?;

		self.selected = Some(idx);
		self.current = Some(idx);
		Ok(status)
	}

	/// Checks that `declared` matches the model before predicting
	pub fn run(&mut self, name: &str, declared: Category, payload: &str) -> Result<Prediction> {
		let idx = self.resolve(name)?;
		dispatch(&mut self.models[idx], declared, payload)
	}

	pub fn run_current(&mut self, declared: Category, payload: &str) -> Result<Prediction> {
		let idx = self.current.ok_or_else(|| ModelError::NotLoaded {
			model: "Current model".to_string(),
			last_error: None,
		})?;
		dispatch(&mut self.models[idx], declared, payload)
	}
}

fn dispatch(model: &mut Model, declared: Category, payload: &str) -> Result<Prediction> {
	match (model, declared) {
		(Model::Text(m), Category::Text) => m.predict(payload),
		(Model::Vision(m), Category::Vision) => m.predict(Path::new(payload)),
		(model, got) => Err(ModelError::CategoryMismatch {
			model: model.name().to_string(),
			expected: model.category(),
			got,
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_select_tracks_selection() {
		let mut d = Dispatcher::with_mocks();
		assert!(d.selected().is_none());

		let info = d.select("sentiment");
		assert_eq!(info.name, "Sentiment Analyzer");
		assert_eq!(info.category, Some(Category::Text));
		assert!(!info.loaded);

		let info = d.select("Nope");
		assert!(!info.is_available());
		assert_eq!(d.selected().map(|i| i.id), Some("sentiment".to_string()));
	}

	#[test]
	fn test_load_sets_current() {
		let mut d = Dispatcher::with_mocks();
		assert!(d.current().is_none());

		assert_eq!(d.load("digits").unwrap(), LoadStatus::LoadedFromArtifact);
		assert!(d.is_loaded("MNIST Digit Recognizer"));
		assert_eq!(d.current().map(|i| i.id), Some("digits".to_string()));
		assert!(!d.is_loaded("sentiment"));
	}

	#[test]
	fn test_unknown_name_on_load_and_run() {
		let mut d = Dispatcher::with_mocks();
		assert!(matches!(d.load("gpt"), Err(ModelError::UnknownModelName { .. })));
		assert!(matches!(
			d.run("gpt", Category::Text, "hi"),
			Err(ModelError::UnknownModelName { .. })
		));
	}

	#[test]
	fn test_run_current_requires_load() {
		let mut d = Dispatcher::with_mocks();
		assert!(matches!(
			d.run_current(Category::Text, "I love this"),
			Err(ModelError::NotLoaded { .. })
		));

		d.load("sentiment").unwrap();
		let prediction = d.run_current(Category::Text, "I love this").unwrap();
		assert_eq!(prediction.label(), "POSITIVE");
	}
}
