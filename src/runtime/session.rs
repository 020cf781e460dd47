//! Session setup shared by the sentiment and digit engines

use anyhow::{Context, Result};
use ort::session::{builder::GraphOptimizationLevel, Session};
use std::path::Path;

use super::providers;
use crate::ui;

const INTRA_THREADS: usize = 4;

/// Build a session for `model` and report which provider it runs on
pub fn create_session(model: &str, model_path: &Path) -> Result<Session> {
	if !model_path.exists() {
		anyhow::bail!("Model file does not exist: {}", model_path.display());
	}

	let mut builder = Session::builder().context("Failed to create session builder")?;
	let provider = providers::register(&mut builder, providers::preferred());

	ui::debug(&format!("Creating session: {}", model_path.display()));
	let session = builder
		.with_optimization_level(GraphOptimizationLevel::Level3)?
		.with_intra_threads(INTRA_THREADS)?
		.commit_from_file(model_path)
		.with_context(|| format!("Failed to load model: {}", model_path.display()))?;

	ui::info(&format!("{} running on {}", model, provider.label()));
	Ok(session)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_missing_model_file() {
		let err = create_session("Sentiment Analyzer", Path::new("nowhere/model.onnx")).unwrap_err();
		assert!(err.to_string().contains("does not exist"));
	}
}
