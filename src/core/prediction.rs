//! Prediction results and the scoring helpers shared by both engines

use std::fmt;

/// Top label of the sentiment classifier
#[derive(Debug, Clone, PartialEq)]
pub struct Sentiment {
	pub label: String,
	pub score: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
	Sentiment(Sentiment),
	Digit { digit: usize, confidence: f32 },
}

impl Prediction {
	/// Score of the winning class [0.0, 1.0]
	pub fn score(&self) -> f32 {
		match self {
			Prediction::Sentiment(s) => s.score,
			Prediction::Digit { confidence, .. } => *confidence,
		}
	}

	pub fn label(&self) -> String {
		match self {
			Prediction::Sentiment(s) => s.label.clone(),
			Prediction::Digit { digit, .. } => digit.to_string(),
		}
	}
}

impl fmt::Display for Prediction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Prediction::Sentiment(s) => {
				write!(f, "Prediction: {} (Score: {:.2})", s.label, s.score)
			}
			Prediction::Digit { digit, confidence } => {
				write!(f, "Predicted Digit: {} (Confidence: {:.2})", digit, confidence)
			}
		}
	}
}

/// Numerically stable softmax
pub fn softmax(logits: &[f32]) -> Vec<f32> {
	let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
	let exps: Vec<f32> = logits.iter().map(|&x| (x - max).exp()).collect();
	let sum: f32 = exps.iter().sum();
	if sum > 0.0 {
		exps.iter().map(|e| e / sum).collect()
	} else {
		exps
	}
}

/// Index and value of the highest score. Ties go to the first maximum.
pub fn top_class(scores: &[f32]) -> Option<(usize, f32)> {
	let mut best: Option<(usize, f32)> = None;
	for (i, &s) in scores.iter().enumerate() {
		if s.is_nan() {
			continue;
		}
		match best {
			Some((_, b)) if s <= b => {}
			_ => best = Some((i, s)),
		}
	}
	best
}

/// True when the values already form a probability distribution
pub fn is_distribution(scores: &[f32]) -> bool {
	let sum: f32 = scores.iter().sum();
	scores.iter().all(|s| (0.0..=1.0).contains(s)) && (sum - 1.0).abs() < 1e-3
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	#[test]
	fn test_top_class_first_max_wins() {
		assert_eq!(top_class(&[0.1, 0.4, 0.4, 0.1]), Some((1, 0.4)));
		assert_eq!(top_class(&[0.9]), Some((0, 0.9)));
		assert_eq!(top_class(&[]), None);
	}

	#[test]
	fn test_top_class_skips_nan() {
		assert_eq!(top_class(&[f32::NAN, 0.2, 0.1]), Some((1, 0.2)));
	}

	#[test]
	fn test_softmax_sums_to_one() {
		let p = softmax(&[-2.3, 4.1, 0.0]);
		assert_relative_eq!(p.iter().sum::<f32>(), 1.0, epsilon = 1e-6);
		assert_eq!(top_class(&p).map(|(i, _)| i), Some(1));
		assert!(is_distribution(&p));
		assert!(!is_distribution(&[-2.3, 4.1, 0.0]));
	}

	#[test]
	fn test_display_rounds_to_two_decimals() {
		let sentiment = Prediction::Sentiment(Sentiment {
			label: "POSITIVE".into(),
			score: 0.99871,
		});
		assert_eq!(sentiment.to_string(), "Prediction: POSITIVE (Score: 1.00)");

		let digit = Prediction::Digit { digit: 7, confidence: 0.8349 };
		assert_eq!(digit.to_string(), "Predicted Digit: 7 (Confidence: 0.83)");
		assert_eq!(digit.label(), "7");
	}
}
