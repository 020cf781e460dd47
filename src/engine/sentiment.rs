//! Sentiment classifier (DistilBERT SST-2) on ONNX Runtime

use anyhow::{Context, Result};
use ort::session::Session;
use ort::value::Value;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tokenizers::{Tokenizer, TruncationParams};

use super::{SentimentEngine, SentimentLoader};
use crate::config::{self, DEFAULT_LABELS, MAX_SEQUENCE_LEN};
use crate::core::{softmax, top_class, Sentiment};

pub struct OnnxSentiment {
	session: Session,
	tokenizer: Tokenizer,
	labels: Vec<String>,
}

impl OnnxSentiment {
	pub fn load(model_path: &Path, tokenizer_path: &Path, config_path: &Path) -> Result<Self> {
		let session = crate::runtime::create_session("Sentiment Analyzer", model_path)
			.context("Failed to load sentiment model")?;

		let mut tokenizer = Tokenizer::from_file(tokenizer_path)
			.map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;
		tokenizer
			.with_truncation(Some(TruncationParams {
				max_length: MAX_SEQUENCE_LEN,
				..Default::default()
			}))
			.map_err(|e| anyhow::anyhow!("Failed to configure truncation: {}", e))?;

		let labels = read_labels(config_path)?;
		crate::ui::debug(&format!("Sentiment labels: {}", labels.join(", ")));

		Ok(Self { session, tokenizer, labels })
	}
}

impl SentimentEngine for OnnxSentiment {
	fn classify(&mut self, text: &str) -> Result<Sentiment> {
		let encoding = self
			.tokenizer
			.encode(text, true)
			.map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))?;

		let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&x| x as i64).collect();
		let mask: Vec<i64> = encoding.get_attention_mask().iter().map(|&x| x as i64).collect();
		let shape = vec![1, input_ids.len()];

		let ids = Value::from_array((shape.clone(), input_ids))?;
		let mask = Value::from_array((shape, mask))?;

		let outputs = self.session.run(ort::inputs![
			"input_ids" => ids,
			"attention_mask" => mask
		])?;

		let logits: Vec<f32> = if let Some(value) = outputs.get("logits") {
			let (_, data) = value.try_extract_tensor::<f32>()?;
			data.to_vec()
		} else {
			let (_, value) = outputs.iter().next().context("Sentiment model has no outputs")?;
			let (_, data) = value.try_extract_tensor::<f32>()?;
			data.to_vec()
		};

		let probs = softmax(&logits);
		let (idx, score) = top_class(&probs).context("Sentiment model returned no scores")?;
		let label = self
			.labels
			.get(idx)
			.cloned()
			.unwrap_or_else(|| format!("LABEL_{}", idx));

		Ok(Sentiment { label, score })
	}
}

#[derive(Debug, Deserialize)]
struct LabelConfig {
	#[serde(default)]
	id2label: BTreeMap<String, String>,
}

/// Read `id2label` from a Hugging Face `config.json`, or fall back to SST-2 labels
fn read_labels(path: &Path) -> Result<Vec<String>> {
	if !path.exists() {
		return Ok(DEFAULT_LABELS.iter().map(|s| s.to_string()).collect());
	}

	let raw = fs::read_to_string(path)
		.with_context(|| format!("Failed to read {}", path.display()))?;
	parse_labels(&raw).with_context(|| format!("Invalid label config: {}", path.display()))
}

fn parse_labels(raw: &str) -> Result<Vec<String>> {
	let config: LabelConfig = serde_json::from_str(raw)?;
	if config.id2label.is_empty() {
		return Ok(DEFAULT_LABELS.iter().map(|s| s.to_string()).collect());
	}

	let mut indexed = Vec::with_capacity(config.id2label.len());
	for (id, label) in config.id2label {
		let id: usize = id
			.parse()
			.with_context(|| format!("Label id '{}' is not a number", id))?;
		indexed.push((id, label));
	}
	indexed.sort_by_key(|(id, _)| *id);

	Ok(indexed.into_iter().map(|(_, label)| label).collect())
}

/// Builds the engine from the configured model directory
pub struct OnnxSentimentLoader {
	model_path: PathBuf,
	tokenizer_path: PathBuf,
	config_path: PathBuf,
}

impl OnnxSentimentLoader {
	pub fn from_config() -> Self {
		Self {
			model_path: config::sentiment_model_path(),
			tokenizer_path: config::tokenizer_path(),
			config_path: config::sentiment_config_path(),
		}
	}
}

impl SentimentLoader for OnnxSentimentLoader {
	fn load(&self) -> Result<Box<dyn SentimentEngine>> {
		if !self.tokenizer_path.exists() {
			anyhow::bail!("Tokenizer file does not exist: {}", self.tokenizer_path.display());
		}
		let engine = OnnxSentiment::load(&self.model_path, &self.tokenizer_path, &self.config_path)?;
		Ok(Box::new(engine))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_labels_sorted_by_numeric_id() {
		let raw = r#"{"id2label": {"10": "TEN", "2": "TWO", "0": "ZERO"}, "model_type": "distilbert"}"#;
		assert_eq!(parse_labels(raw).unwrap(), vec!["ZERO", "TWO", "TEN"]);
	}

	#[test]
	fn test_missing_id2label_uses_defaults() {
		assert_eq!(parse_labels("{}").unwrap(), vec!["NEGATIVE", "POSITIVE"]);
	}

	#[test]
	fn test_non_numeric_id_is_rejected() {
		assert!(parse_labels(r#"{"id2label": {"pos": "POSITIVE"}}"#).is_err());
	}

	#[test]
	fn test_absent_config_file_uses_defaults() {
		let labels = read_labels(Path::new("definitely/not/here/config.json")).unwrap();
		assert_eq!(labels, vec!["NEGATIVE", "POSITIVE"]);
	}

	#[test]
	fn test_loader_reports_missing_tokenizer() {
		let loader = OnnxSentimentLoader {
			model_path: PathBuf::from("missing.onnx"),
			tokenizer_path: PathBuf::from("missing_tokenizer.json"),
			config_path: PathBuf::from("missing_config.json"),
		};
		let err = loader.load().err().unwrap();
		assert!(err.to_string().contains("Tokenizer file does not exist"));
	}
}
