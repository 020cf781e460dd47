//! Execution provider selection
//!
//! A preference expands into an ordered list of candidates. The first one that
//! registers wins; CPU is always the fallback and never needs registering.

use ort::ep::ExecutionProvider;
use ort::session::builder::SessionBuilder;
use std::sync::OnceLock;

use crate::ui;

pub use crate::cli::Provider;

static PREFERRED: OnceLock<Provider> = OnceLock::new();

pub fn set_provider(p: Provider) {
	let _ = PREFERRED.set(p);
}

pub fn preferred() -> Provider {
	PREFERRED.get().copied().unwrap_or_default()
}

impl Provider {
	pub fn label(&self) -> &'static str {
		match self {
			Provider::Auto => "auto",
			Provider::Cpu => "CPU",
			Provider::Cuda => "CUDA",
			Provider::Tensorrt => "TensorRT",
			Provider::Coreml => "CoreML",
			Provider::Xnnpack => "XNNPACK",
		}
	}
}

/// Accelerators to try for a preference, best first
pub fn candidates(preferred: Provider) -> Vec<Provider> {
	match preferred {
		Provider::Auto => {
			let mut list = vec![Provider::Tensorrt, Provider::Cuda];
			if cfg!(target_os = "macos") {
				list.push(Provider::Coreml);
			}
			list.push(Provider::Xnnpack);
			list
		}
		Provider::Cpu => Vec::new(),
		explicit => vec![explicit],
	}
}

/// Register the first working candidate and return the provider in use
pub fn register(builder: &mut SessionBuilder, preferred: Provider) -> Provider {
	for candidate in candidates(preferred) {
		if try_register(builder, candidate) {
			return candidate;
		}
		if !matches!(preferred, Provider::Auto) {
			ui::warn(&format!(
				"{} requested but unavailable, falling back to CPU",
				candidate.label()
			));
		}
	}
	Provider::Cpu
}

fn try_register(builder: &mut SessionBuilder, provider: Provider) -> bool {
	use ort::ep;

	match provider {
		Provider::Tensorrt => attach(builder, ep::TensorRT::default(), provider),
		Provider::Cuda => attach(builder, ep::CUDA::default(), provider),
		#[cfg(target_os = "macos")]
		Provider::Coreml => attach(builder, ep::CoreML::default(), provider),
		Provider::Xnnpack => attach(builder, ep::XNNPACK::default(), provider),
		_ => false,
	}
}

fn attach<E: ExecutionProvider>(builder: &mut SessionBuilder, ep: E, provider: Provider) -> bool {
	if !ep.is_available().unwrap_or(false) {
		ui::debug(&format!("{} not available", provider.label()));
		return false;
	}

	match ep.register(builder) {
		Ok(_) => true,
		Err(e) => {
			ui::debug(&format!("{} registration failed: {}", provider.label(), e));
			false
		}
	}
}
