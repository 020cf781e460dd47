//! Input modality accepted by a model

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::config::IMAGE_EXTENSIONS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
	Text,
	Vision,
}

impl Category {
	pub fn as_str(&self) -> &'static str {
		match self {
			Category::Text => "Text",
			Category::Vision => "Vision",
		}
	}

	/// `Vision` for a known image extension. Text never comes from a file.
	pub fn detect(path: &Path) -> Option<Self> {
		let ext = path.extension()?.to_str()?;
		IMAGE_EXTENSIONS
			.iter()
			.any(|e| e.eq_ignore_ascii_case(ext))
			.then_some(Category::Vision)
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Category {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"text" => Ok(Category::Text),
			"image" | "vision" => Ok(Category::Vision),
			other => Err(format!("'{}' is not an input type (text, image)", other)),
		}
	}
}
