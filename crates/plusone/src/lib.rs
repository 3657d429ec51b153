//! plusone: read integer lists, increment them, keep the positive results.
//!
//! This library holds everything the `plusone` binary does besides argument
//! parsing: configuration, input discovery, parsing and rendering.

pub mod config;
pub mod inputs;
pub mod source;

pub use config::{Config, ConfigError, Separator};
pub use inputs::{Input, collect_inputs};
pub use source::{Outcome, ParseError, parse_integers, process_source};

pub use plusone_core::{OverflowPolicy, TransformError};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, RunError>;
