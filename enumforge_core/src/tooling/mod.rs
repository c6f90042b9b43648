//! Build-time tooling for turning typed constants into enum companion files.
//!
//! This module provides utilities for:
//! - Loading `enumforge.toml`
//! - Scanning Rust sources for annotated type aliases and their constants
//! - Emitting `<stem>_enums.rs` companions to `include!` next to them
//!
//! ## Quick Start (in build.rs)
//!
//! ```rust,ignore
//! fn main() {
//!     enumforge_core::tooling::generate(&["src/status.rs".into()]).expect("enum generation failed");
//!     println!("cargo:rerun-if-changed=src/status.rs");
//! }
//! ```

mod annotation;
mod config;
mod generator;
mod model;
mod parser;
mod source;
mod writer;

pub use annotation::*;
pub use config::*;
pub use generator::*;
pub use model::*;
pub use parser::*;
pub use source::*;
pub use writer::*;

use crate::error::EnumforgeError;
use std::path::PathBuf;

/// Generates companions for `inputs` using the nearest `enumforge.toml`.
///
/// With no inputs, the `filenames` listed in the configuration are used.
pub fn generate(inputs: &[PathBuf]) -> Result<GenerationReport, EnumforgeError> {
    let config = Configuration::load(None)?;
    generate_with_config(config, inputs)
}

/// Generates companions with a custom configuration.
pub fn generate_with_config(
    config: Configuration,
    inputs: &[PathBuf],
) -> Result<GenerationReport, EnumforgeError> {
    let inputs = if inputs.is_empty() {
        config.filenames.iter().map(PathBuf::from).collect()
    } else {
        inputs.to_vec()
    };
    EnumGenerator::new(config).generate_all(&inputs)
}
