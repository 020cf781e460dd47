//! # Duo Library
//!
//! Two pretrained classifiers behind one dispatcher: sentiment for text and
//! handwritten digits for images. Models load once, validate their input
//! category and report predictions as text.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod models;
pub mod runtime;
pub mod ui;

pub use crate::core::{Category, Prediction};
pub use error::ModelError;
pub use models::{Dispatcher, LoadStatus, ModelInfo};
