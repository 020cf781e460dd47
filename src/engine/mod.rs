//! # Inference Engines
//!
//! Traits at the seam between models and the runtime that actually classifies.
//! Loaders build engines; models own the resulting handle.

pub mod digits;
pub mod mock;
pub mod sentiment;
pub mod trainer;

use anyhow::Result;
use ndarray::Array4;

use crate::core::Sentiment;

pub use digits::{ArtifactDigitLoader, OnnxDigits};
pub use sentiment::{OnnxSentiment, OnnxSentimentLoader};
pub use trainer::{CommandTrainer, NoTrainer, Trainer};

/// Text in, top label out
pub trait SentimentEngine {
	fn classify(&mut self, text: &str) -> Result<Sentiment>;
}

/// `[1, 28, 28, 1]` pixels in, one score per digit out
pub trait DigitEngine {
	fn classify(&mut self, pixels: Array4<f32>) -> Result<Vec<f32>>;
}

/// How a digit engine came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
	/// Read from an existing artifact
	Artifact,
	/// Artifact was missing and had to be trained first
	Trained,
}

pub trait SentimentLoader {
	fn load(&self) -> Result<Box<dyn SentimentEngine>>;
}

pub trait DigitLoader {
	fn load(&self) -> Result<(Box<dyn DigitEngine>, Provenance)>;
}
