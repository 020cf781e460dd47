//! # Models
//!
//! The two selectable models and the dispatcher that routes requests to them.
//! Category comes from the variant, so it cannot drift after construction.

pub mod dispatcher;
pub mod state;
pub mod text;
pub mod vision;

use std::fmt;

use crate::core::Category;
use crate::error::Result;

pub use dispatcher::Dispatcher;
pub use state::EngineState;
pub use text::TextModel;
pub use vision::ImageModel;

const NOT_AVAILABLE: &str = "N/A";

/// Static metadata of a model
#[derive(Debug, Clone)]
pub struct Descriptor {
	id: String,
	name: String,
	description: String,
}

impl Descriptor {
	pub(crate) fn new(id: &str, name: &str, description: &str) -> Self {
		Self {
			id: id.to_string(),
			name: name.to_string(),
			description: description.to_string(),
		}
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn description(&self) -> &str {
		&self.description
	}

	/// Case-insensitive match on id or display name
	pub fn matches(&self, key: &str) -> bool {
		let key = key.trim();
		self.id.eq_ignore_ascii_case(key) || self.name.eq_ignore_ascii_case(key)
	}
}

/// Snapshot of a model for display. Unknown names give the N/A snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
	pub id: String,
	pub name: String,
	pub category: Option<Category>,
	pub description: String,
	pub loaded: bool,
	pub last_error: Option<String>,
}

impl ModelInfo {
	pub fn not_available() -> Self {
		Self {
			id: NOT_AVAILABLE.to_string(),
			name: NOT_AVAILABLE.to_string(),
			category: None,
			description: NOT_AVAILABLE.to_string(),
			loaded: false,
			last_error: None,
		}
	}

	pub fn is_available(&self) -> bool {
		self.category.is_some()
	}

	pub fn category_label(&self) -> &'static str {
		self.category.map(|c| c.as_str()).unwrap_or(NOT_AVAILABLE)
	}
}

/// Outcome of a successful `load`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
	Loaded,
	LoadedFromArtifact,
	Trained,
	AlreadyLoaded,
}

impl LoadStatus {
	pub fn message(&self, model: &str) -> String {
		match self {
			LoadStatus::Loaded => format!("{} loaded successfully.", model),
			LoadStatus::LoadedFromArtifact => format!("{} loaded from file.", model),
			LoadStatus::Trained => format!("{} trained and loaded.", model),
			LoadStatus::AlreadyLoaded => format!("{} already loaded.", model),
		}
	}
}

pub enum Model {
	Text(TextModel),
	Vision(ImageModel),
}

impl Model {
	pub fn descriptor(&self) -> &Descriptor {
		match self {
			Model::Text(m) => m.descriptor(),
			Model::Vision(m) => m.descriptor(),
		}
	}

	pub fn name(&self) -> &str {
		self.descriptor().name()
	}

	pub fn category(&self) -> Category {
		match self {
			Model::Text(_) => Category::Text,
			Model::Vision(_) => Category::Vision,
		}
	}

	pub fn is_loaded(&self) -> bool {
		match self {
			Model::Text(m) => m.is_loaded(),
			Model::Vision(m) => m.is_loaded(),
		}
	}

	pub fn last_error(&self) -> Option<&str> {
		match self {
			Model::Text(m) => m.last_error(),
			Model::Vision(m) => m.last_error(),
		}
	}

	pub fn load(&mut self) -> Result<LoadStatus> {
		match self {
			Model::Text(m) => m.load(),
			Model::Vision(m) => m.load(),
		}
	}

	pub fn info(&self) -> ModelInfo {
		let d = self.descriptor();
		ModelInfo {
			id: d.id().to_string(),
			name: d.name().to_string(),
			category: Some(self.category()),
			description: d.description().to_string(),
			loaded: self.is_loaded(),
			last_error: self.last_error().map(str::to_string),
		}
	}
}

impl fmt::Debug for Model {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Model")
			.field("id", &self.descriptor().id())
			.field("category", &self.category())
			.field("loaded", &self.is_loaded())
			.finish()
	}
}

impl From<TextModel> for Model {
	fn from(m: TextModel) -> Self {
		Model::Text(m)
	}
}

impl From<ImageModel> for Model {
	fn from(m: ImageModel) -> Self {
		Model::Vision(m)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_descriptor_matches_id_or_name() {
		let d = Descriptor::new("digits", "MNIST Digit Recognizer", "Recognizes digits");
		assert!(d.matches("digits"));
		assert!(d.matches(" mnist digit recognizer "));
		assert!(!d.matches("mnist"));
	}

	#[test]
	fn test_not_available_info() {
		let info = ModelInfo::not_available();
		assert!(!info.is_available());
		assert_eq!(info.name, "N/A");
		assert_eq!(info.category_label(), "N/A");
	}

	#[test]
	fn test_status_messages() {
		assert_eq!(
			LoadStatus::AlreadyLoaded.message("Sentiment Analyzer"),
			"Sentiment Analyzer already loaded."
		);
		assert_eq!(
			LoadStatus::Trained.message("MNIST Digit Recognizer"),
			"MNIST Digit Recognizer trained and loaded."
		);
	}
}
