//! Core domain types

pub mod category;
pub mod prediction;

pub use category::Category;
pub use prediction::{softmax, top_class, Prediction, Sentiment};
