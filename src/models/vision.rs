//! MNIST Digit Recognizer and its image pipeline

use image::{imageops::FilterType, DynamicImage, ImageReader};
use ndarray::Array4;
use std::path::Path;

use super::{Descriptor, EngineState, LoadStatus};
use crate::config::DIGIT_INPUT_SIZE;
use crate::core::{prediction::is_distribution, softmax, top_class, Category, Prediction};
use crate::engine::{DigitEngine, DigitLoader, Provenance};
use crate::error::{ModelError, Result};

pub struct ImageModel {
	descriptor: Descriptor,
	loader: Box<dyn DigitLoader>,
	state: EngineState<Box<dyn DigitEngine>>,
}

impl ImageModel {
	pub fn new(loader: Box<dyn DigitLoader>) -> Self {
		Self {
			descriptor: Descriptor::new(
				"digits",
				"MNIST Digit Recognizer",
				"Recognizes handwritten digits (0-9).",
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
			Ok((engine, provenance)) => {
				self.state = EngineState::Ready(engine);
				Ok(match provenance {
					Provenance::Artifact => LoadStatus::LoadedFromArtifact,
					Provenance::Trained => LoadStatus::Trained,
				})
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

	pub fn predict(&mut self, path: &Path) -> Result<Prediction> {
		let Some(engine) = self.state.engine_mut() else {
			return Err(self.not_loaded());
		};

		if path.to_string_lossy().trim().is_empty() {
			return Err(ModelError::EmptyInput { category: Category::Vision });
		}

		let img = open_image(path)?;
		let pixels = preprocess(&img);

		let raw = engine
			.classify(pixels)
			.map_err(|e| ModelError::Inference { reason: format!("{:#}", e) })?;
		let probs = if is_distribution(&raw) { raw } else { softmax(&raw) };

		let (digit, confidence) = top_class(&probs).ok_or_else(|| ModelError::Inference {
			reason: "classifier returned no scores".to_string(),
		})?;

		crate::ui::debug(&format!("Digit scores: {:?}", probs));
		Ok(Prediction::Digit { digit, confidence })
	}
}

/// Decode an image file, guessing the format from its content
pub fn open_image(path: &Path) -> Result<DynamicImage> {
	let decode_error = |reason: String| ModelError::FileDecode {
		path: path.to_path_buf(),
		reason,
	};

	ImageReader::open(path)
		.map_err(|e| decode_error(e.to_string()))?
		.with_guessed_format()
		.map_err(|e| decode_error(e.to_string()))?
		.decode()
		.map_err(|e| decode_error(e.to_string()))
}

/// Grayscale, resize to 28×28 and scale to [0, 1] as a `[1, 28, 28, 1]` tensor
pub fn preprocess(img: &DynamicImage) -> Array4<f32> {
	let size = DIGIT_INPUT_SIZE;
	let gray = img
		.grayscale()
		.resize_exact(size, size, FilterType::Triangle)
		.to_luma8();

	let size = size as usize;
	Array4::from_shape_fn((1, size, size, 1), |(_, y, x, _)| {
		gray.get_pixel(x as u32, y as u32)[0] as f32 / 255.0
	})
}
