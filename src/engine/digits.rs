//! Digit classifier (MNIST CNN) on ONNX Runtime

use anyhow::{Context, Result};
use ndarray::Array4;
use ort::session::Session;
use ort::value::Value;
use std::path::{Path, PathBuf};

use super::trainer::{self, Trainer};
use super::{DigitEngine, DigitLoader, Provenance};
use crate::config;

pub struct OnnxDigits {
	session: Session,
}

impl OnnxDigits {
	pub fn load(artifact: &Path) -> Result<Self> {
		let session = crate::runtime::create_session("MNIST Digit Recognizer", artifact)
			.context("Failed to load digit model")?;
		Ok(Self { session })
	}
}

impl DigitEngine for OnnxDigits {
	fn classify(&mut self, pixels: Array4<f32>) -> Result<Vec<f32>> {
		let input = Value::from_array(pixels)?;
		let outputs = self.session.run(ort::inputs![input])?;

		let (_, scores) = outputs.iter().next().context("Digit model has no outputs")?;
		let (shape, data) = scores.try_extract_tensor::<f32>()?;
		let dims: Vec<usize> = shape.iter().map(|&x| x as usize).collect();

		match dims.as_slice() {
			[1, n] | [n] if *n == config::DIGIT_CLASSES => Ok(data.to_vec()),
			other => anyhow::bail!(
				"Unexpected output shape {:?}, expected [1, {}]",
				other,
				config::DIGIT_CLASSES
			),
		}
	}
}

/// Loads the artifact, training it first when absent
pub struct ArtifactDigitLoader {
	artifact: PathBuf,
	trainer: Box<dyn Trainer>,
}

impl ArtifactDigitLoader {
	pub fn new(artifact: PathBuf, trainer: Box<dyn Trainer>) -> Self {
		Self { artifact, trainer }
	}

	pub fn from_config() -> Self {
		Self::new(config::digit_artifact_path(), trainer::from_config())
	}

	/// Make sure the artifact exists, training if needed
	pub fn ensure_artifact(&self) -> Result<Provenance> {
		if self.artifact.exists() {
			crate::ui::debug(&format!("Found artifact: {}", self.artifact.display()));
			return Ok(Provenance::Artifact);
		}

		self.trainer
			.train(&self.artifact)
			.context("Failed to train digit model")?;
		Ok(Provenance::Trained)
	}
}

impl DigitLoader for ArtifactDigitLoader {
	fn load(&self) -> Result<(Box<dyn DigitEngine>, Provenance)> {
		let provenance = self.ensure_artifact()?;
		let engine = OnnxDigits::load(&self.artifact)?;
		Ok((Box::new(engine), provenance))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::Cell;
	use std::rc::Rc;

	struct CountingTrainer {
		calls: Rc<Cell<usize>>,
		write: bool,
	}

	impl Trainer for CountingTrainer {
		fn train(&self, artifact: &Path) -> Result<()> {
			self.calls.set(self.calls.get() + 1);
			if self.write {
				std::fs::write(artifact, b"onnx")?;
				Ok(())
			} else {
				anyhow::bail!("dataset unavailable")
			}
		}
	}

	#[test]
	fn test_existing_artifact_skips_training() {
		let dir = tempfile::tempdir().unwrap();
		let artifact = dir.path().join("mnist_cnn.onnx");
		std::fs::write(&artifact, b"onnx").unwrap();

		let calls = Rc::new(Cell::new(0));
		let loader = ArtifactDigitLoader::new(
			artifact,
			Box::new(CountingTrainer { calls: calls.clone(), write: true }),
		);

		assert_eq!(loader.ensure_artifact().unwrap(), Provenance::Artifact);
		assert_eq!(calls.get(), 0);
	}

	#[test]
	fn test_missing_artifact_trains_once() {
		let dir = tempfile::tempdir().unwrap();
		let artifact = dir.path().join("mnist_cnn.onnx");

		let calls = Rc::new(Cell::new(0));
		let loader = ArtifactDigitLoader::new(
			artifact.clone(),
			Box::new(CountingTrainer { calls: calls.clone(), write: true }),
		);

		assert_eq!(loader.ensure_artifact().unwrap(), Provenance::Trained);
		assert!(artifact.exists());
		assert_eq!(loader.ensure_artifact().unwrap(), Provenance::Artifact);
		assert_eq!(calls.get(), 1);
	}

	#[test]
	fn test_training_failure_surfaces() {
		let dir = tempfile::tempdir().unwrap();
		let loader = ArtifactDigitLoader::new(
			dir.path().join("mnist_cnn.onnx"),
			Box::new(CountingTrainer { calls: Rc::new(Cell::new(0)), write: false }),
		);

		let err = loader.load().err().unwrap();
		assert!(format!("{:#}", err).contains("dataset unavailable"));
	}
}
