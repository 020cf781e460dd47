//! Producing the digit artifact when none is on disk
//!
//! Training is delegated to an external program. It receives the artifact path
//! as its last argument and must leave an ONNX file there.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

pub trait Trainer {
	fn train(&self, artifact: &Path) -> Result<()>;
}

/// Used when no training command is configured
pub struct NoTrainer;

impl Trainer for NoTrainer {
	fn train(&self, artifact: &Path) -> Result<()> {
		anyhow::bail!(
			"No model artifact at {} and no training command configured (set --train-cmd or {})",
			artifact.display(),
			crate::config::TRAIN_CMD_ENV
		)
	}
}

/// Runs `program args... <artifact>`
#[derive(Debug, Clone)]
pub struct CommandTrainer {
	program: String,
	args: Vec<String>,
}

impl CommandTrainer {
	/// Split a command line with shell quoting rules
	pub fn parse(cmd: &str) -> Result<Self> {
		let mut parts = shell_words::split(cmd)
			.with_context(|| format!("Invalid training command `{}`", cmd))?
			.into_iter();
		let program = parts.next().context("Training command is empty")?;
		Ok(Self { program, args: parts.collect() })
	}

	pub fn program(&self) -> &str {
		&self.program
	}

	pub fn args(&self) -> &[String] {
		&self.args
	}
}

impl Trainer for CommandTrainer {
	fn train(&self, artifact: &Path) -> Result<()> {
		crate::ui::info(&format!(
			"Model file not found. Training with `{}`...",
			self.program
		));

		if let Some(parent) = artifact.parent().filter(|p| !p.as_os_str().is_empty()) {
			std::fs::create_dir_all(parent)
				.with_context(|| format!("Failed to create {}", parent.display()))?;
		}

		let status = Command::new(&self.program)
			.args(&self.args)
			.arg(artifact)
			.status()
			.with_context(|| format!("Failed to start training command `{}`", self.program))?;

		if !status.success() {
			anyhow::bail!("Training command exited with {}", status);
		}
		if !artifact.exists() {
			anyhow::bail!(
				"Training finished but no artifact was written to {}",
				artifact.display()
			);
		}

		crate::ui::success(&format!("Saved trained model to {}", artifact.display()));
		Ok(())
	}
}

/// Trainer configured for this process
pub fn from_config() -> Box<dyn Trainer> {
	let Some(cmd) = crate::config::train_cmd() else {
		return Box::new(NoTrainer);
	};

	match CommandTrainer::parse(&cmd) {
		Ok(trainer) => Box::new(trainer),
		Err(e) => {
			crate::ui::warn(&format!("{:#}", e));
			Box::new(NoTrainer)
		}
	}
}
