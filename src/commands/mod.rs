//! # Command Implementations
//!
//! Each submodule handles one CLI command (models, info, run, repl, etc.).

pub mod info;
pub mod load;
pub mod models;
pub mod repl;
pub mod run;
