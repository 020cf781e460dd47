//! Mock engines for offline runs and tests
//!
//! They do no real inference. Sentiment is keyword based; digits are derived from
//! mean brightness so a predictable image gives a predictable class. Every loader
//! carries a [`LoadCounter`] counting how often it was asked to build an engine.

use anyhow::Result;
use ndarray::Array4;
use std::cell::Cell;
use std::rc::Rc;

use super::{DigitEngine, DigitLoader, Provenance, SentimentEngine, SentimentLoader};
use crate::config::{DEFAULT_LABELS, DIGIT_CLASSES};
use crate::core::{top_class, Sentiment};

const POSITIVE_WORDS: &[&str] = &[
	"love", "great", "good", "excellent", "amazing", "happy", "like", "wonderful", "best", "enjoy",
];
const NEGATIVE_WORDS: &[&str] = &[
	"hate", "bad", "terrible", "awful", "worst", "sad", "boring", "poor", "dislike", "horrible",
];

/// Shared load counter
#[derive(Debug, Clone, Default)]
pub struct LoadCounter(Rc<Cell<usize>>);

impl LoadCounter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn hit(&self) {
		self.0.set(self.0.get() + 1);
	}

	pub fn count(&self) -> usize {
		self.0.get()
	}
}

pub struct KeywordSentiment;

impl SentimentEngine for KeywordSentiment {
	fn classify(&mut self, text: &str) -> Result<Sentiment> {
		let lower = text.to_lowercase();
		let words: Vec<&str> = lower
			.split(|c: char| !c.is_alphanumeric())
			.filter(|w| !w.is_empty())
			.collect();

		let pos = words.iter().filter(|w| POSITIVE_WORDS.contains(w)).count() as f32;
		let neg = words.iter().filter(|w| NEGATIVE_WORDS.contains(w)).count() as f32;

		// Laplace smoothed share of positive hits
		let positive = (pos + 1.0) / (pos + neg + 2.0);
		let scores = [1.0 - positive, positive];
		let (idx, score) = top_class(&scores).unwrap_or((0, 0.5));

		Ok(Sentiment {
			label: DEFAULT_LABELS[idx].to_string(),
			score,
		})
	}
}

pub struct BrightnessDigits;

impl DigitEngine for BrightnessDigits {
	fn classify(&mut self, pixels: Array4<f32>) -> Result<Vec<f32>> {
		let mean = pixels.mean().unwrap_or(0.0).clamp(0.0, 1.0);
		let digit = ((mean * DIGIT_CLASSES as f32) as usize).min(DIGIT_CLASSES - 1);

		let rest = 0.1 / (DIGIT_CLASSES - 1) as f32;
		let mut scores = vec![rest; DIGIT_CLASSES];
		scores[digit] = 0.9;
		Ok(scores)
	}
}

#[derive(Default)]
pub struct MockSentimentLoader {
	loads: LoadCounter,
	failure: Option<String>,
}

impl MockSentimentLoader {
	pub fn new(loads: LoadCounter) -> Self {
		Self { loads, failure: None }
	}

	/// Every load fails with `reason`
	pub fn failing(loads: LoadCounter, reason: &str) -> Self {
		Self { loads, failure: Some(reason.to_string()) }
	}
}

impl SentimentLoader for MockSentimentLoader {
	fn load(&self) -> Result<Box<dyn SentimentEngine>> {
		self.loads.hit();
		if let Some(reason) = &self.failure {
			anyhow::bail!("{}", reason);
		}
		Ok(Box::new(KeywordSentiment))
	}
}

pub struct MockDigitLoader {
	loads: LoadCounter,
	provenance: Provenance,
	failure: Option<String>,
}

impl MockDigitLoader {
	pub fn new(loads: LoadCounter, provenance: Provenance) -> Self {
		Self { loads, provenance, failure: None }
	}

	/// Every load fails with `reason`
	pub fn failing(loads: LoadCounter, reason: &str) -> Self {
		Self {
			loads,
			provenance: Provenance::Artifact,
			failure: Some(reason.to_string()),
		}
	}
}

impl Default for MockDigitLoader {
	fn default() -> Self {
		Self::new(LoadCounter::new(), Provenance::Artifact)
	}
}

impl DigitLoader for MockDigitLoader {
	fn load(&self) -> Result<(Box<dyn DigitEngine>, Provenance)> {
		self.loads.hit();
		if let Some(reason) = &self.failure {
			anyhow::bail!("{}", reason);
		}
		Ok((Box::new(BrightnessDigits), self.provenance))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_keyword_sentiment() {
		let mut engine = KeywordSentiment;

		let s = engine.classify("I love this").unwrap();
		assert_eq!(s.label, "POSITIVE");
		assert!(s.score > 0.5 && s.score <= 1.0);

		let s = engine.classify("Awful. I HATE it, worst purchase").unwrap();
		assert_eq!(s.label, "NEGATIVE");
		assert!(s.score > 0.5);
	}

	#[test]
	fn test_brightness_digits() {
		let mut engine = BrightnessDigits;

		let dark = Array4::<f32>::zeros((1, 28, 28, 1));
		let scores = engine.classify(dark).unwrap();
		assert_eq!(top_class(&scores).map(|(i, _)| i), Some(0));

		let bright = Array4::<f32>::ones((1, 28, 28, 1));
		let scores = engine.classify(bright).unwrap();
		assert_eq!(top_class(&scores).map(|(i, _)| i), Some(9));
	}

	#[test]
	fn test_counter_tracks_loads() {
		let loads = LoadCounter::new();
		let loader = MockSentimentLoader::new(loads.clone());
		assert_eq!(loads.count(), 0);
		loader.load().unwrap();
		loader.load().unwrap();
		assert_eq!(loads.count(), 2);
	}
}
