//! # User Interface
//!
//! Colored terminal output with clickable file links.

pub mod log;

pub use log::{debug, error, header, info, model_error, path_link, preview, print_logo, success, warn, Log};
