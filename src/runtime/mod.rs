//! # ONNX Runtime
//!
//! One session setup shared by both engines, plus execution provider selection.

pub mod providers;
pub mod session;

pub use providers::{set_provider, Provider};
pub use session::create_session;
