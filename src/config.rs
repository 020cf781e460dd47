//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

static CUSTOM_MODEL_DIR: OnceLock<PathBuf> = OnceLock::new();
static CUSTOM_TRAIN_CMD: OnceLock<String> = OnceLock::new();

// === Model Files ===
pub const SENTIMENT_MODEL: &str = "sentiment_model.onnx";
pub const SENTIMENT_CONFIG: &str = "config.json";
pub const TOKENIZER: &str = "tokenizer.json";
pub const DIGIT_ARTIFACT: &str = "mnist_cnn.onnx";

// === Environment ===
pub const MODELS_DIR_ENV: &str = "DUO_MODELS_DIR";
pub const TRAIN_CMD_ENV: &str = "DUO_TRAIN_CMD";

// === Model Parameters ===
pub const DIGIT_INPUT_SIZE: u32 = 28;
pub const DIGIT_CLASSES: usize = 10;
pub const MAX_SEQUENCE_LEN: usize = 512;
pub const DEFAULT_LABELS: &[&str] = &["NEGATIVE", "POSITIVE"];

// === File Extensions ===
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "webp", "tiff", "tif"];

pub fn set_model_dir(path: PathBuf) {
	let _ = CUSTOM_MODEL_DIR.set(path);
}

pub fn set_train_cmd(cmd: String) {
	let _ = CUSTOM_TRAIN_CMD.set(cmd);
}

/// Get models directory (--models-dir, DUO_MODELS_DIR, or `models/` next to the executable)
pub fn models_dir() -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_MODEL_DIR.get() {
		crate::ui::debug(&format!("Using custom model dir: {}", custom.display()));
		return Some(custom.clone());
	}

	if let Ok(env_path) = std::env::var(MODELS_DIR_ENV) {
		let path = PathBuf::from(&env_path);
		if path.is_dir() {
			crate::ui::debug(&format!("Using {}: {}", MODELS_DIR_ENV, env_path));
			return Some(path);
		}
	}

	if let Ok(exe) = std::env::current_exe() {
		if let Some(dir) = exe.parent() {
			let models = dir.join("models");
			if models.is_dir() {
				crate::ui::debug(&format!("Found models at: {}", models.display()));
				return Some(models);
			}
		}
	}

	None
}

/// Resolve a model file, falling back to the working directory
fn model_file(name: &str) -> PathBuf {
	models_dir()
		.map(|d| d.join(name))
		.unwrap_or_else(|| PathBuf::from(name))
}

pub fn sentiment_model_path() -> PathBuf {
	model_file(SENTIMENT_MODEL)
}

pub fn sentiment_config_path() -> PathBuf {
	model_file(SENTIMENT_CONFIG)
}

pub fn tokenizer_path() -> PathBuf {
	model_file(TOKENIZER)
}

/// Where the digit classifier is read from, and written to after training
pub fn digit_artifact_path() -> PathBuf {
	model_file(DIGIT_ARTIFACT)
}

/// External training command (--train-cmd or DUO_TRAIN_CMD)
pub fn train_cmd() -> Option<String> {
	if let Some(custom) = CUSTOM_TRAIN_CMD.get() {
		return Some(custom.clone());
	}
	std::env::var(TRAIN_CMD_ENV)
		.ok()
		.filter(|cmd| !cmd.trim().is_empty())
}
