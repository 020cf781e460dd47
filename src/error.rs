//! Error taxonomy for model loading and prediction
//!
//! Every variant is recoverable: callers print it and carry on.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::Category;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
	#[error("{model} is not loaded{}", not_loaded_hint(.last_error))]
	NotLoaded {
		model: String,
		last_error: Option<String>,
	},

	#[error("{}", empty_input_hint(.category))]
	EmptyInput { category: Category },

	#[error("{model} requires {expected} input, got {got}")]
	CategoryMismatch {
		model: String,
		expected: Category,
		got: Category,
	},

	#[error("Failed to open image {}: {reason}", .path.display())]
	FileDecode { path: PathBuf, reason: String },

	#[error("Unknown model: {name}")]
	UnknownModelName { name: String },

	#[error("Failed to load {model}: {reason}")]
	LoadFailed { model: String, reason: String },

	#[error("Error during prediction: {reason}")]
	Inference { reason: String },
}

fn not_loaded_hint(last_error: &Option<String>) -> String {
	match last_error {
		Some(reason) => format!(". Last load failed: {}", reason),
		None => ". Run `load` first".to_string(),
	}
}

fn empty_input_hint(category: &Category) -> &'static str {
	match category {
		Category::Text => "Please enter text for analysis",
		Category::Vision => "Please select an image file",
	}
}

impl ModelError {
	/// Short label shown in front of the message
	pub fn label(&self) -> &'static str {
		match self {
			Self::NotLoaded { .. } => "not loaded",
			Self::EmptyInput { .. } => "empty input",
			Self::CategoryMismatch { .. } => "category mismatch",
			Self::FileDecode { .. } => "decode error",
			Self::UnknownModelName { .. } => "unknown model",
			Self::LoadFailed { .. } => "load failed",
			Self::Inference { .. } => "prediction failed",
		}
	}
}
