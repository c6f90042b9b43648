use crate::primitive::RawKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnumforgeError {
    #[error("cannot parse {input:?} as {kind}: {reason}")]
    Parse {
        input: String,
        kind: RawKind,
        reason: String,
    },

    #[error("insufficient data for {kind}: need {needed} bytes, got {got}")]
    InsufficientData {
        kind: RawKind,
        needed: usize,
        got: usize,
    },

    #[error("empty binary data for {kind}")]
    EmptyData { kind: RawKind },

    #[error("cannot convert {from} to {to}")]
    UnsupportedConversion { from: String, to: RawKind },

    #[error("unsupported target kind: {0}")]
    UnsupportedTargetKind(String),

    #[error("value {value} overflows {kind}")]
    Overflow { value: String, kind: RawKind },

    #[error("unknown constants {input}")]
    UnknownConstant { input: String },

    #[error("nil value")]
    NilValue,

    #[error("structured node error: {0}")]
    Node(String),

    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<EnumforgeError>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in file {file}: {message}")]
    ParseSource { file: PathBuf, message: String },

    #[error("Syn parse error: {0}")]
    SynParse(String),

    #[error("Invalid annotation: {0}")]
    InvalidAnnotation(String),

    #[error("No enums found in {file}")]
    NoEnumsFound { file: PathBuf },

    #[error("Invalid output path: {path}")]
    InvalidPath { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Invalid regex pattern: {0}")]
    Regex(String),
}

#[cfg(feature = "tooling")]
impl From<syn::Error> for EnumforgeError {
    fn from(err: syn::Error) -> Self {
        EnumforgeError::SynParse(err.to_string())
    }
}

#[cfg(feature = "tooling")]
impl From<regex::Error> for EnumforgeError {
    fn from(err: regex::Error) -> Self {
        EnumforgeError::Regex(err.to_string())
    }
}

#[cfg(feature = "tooling")]
impl From<toml::de::Error> for EnumforgeError {
    fn from(err: toml::de::Error) -> Self {
        EnumforgeError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EnumforgeError>;

impl EnumforgeError {
    pub fn parse(input: impl Into<String>, kind: RawKind, reason: impl ToString) -> Self {
        EnumforgeError::Parse {
            input: input.into(),
            kind,
            reason: reason.to_string(),
        }
    }

    pub fn insufficient_data(kind: RawKind, needed: usize, got: usize) -> Self {
        EnumforgeError::InsufficientData { kind, needed, got }
    }

    pub fn unsupported_conversion(from: impl Into<String>, to: RawKind) -> Self {
        EnumforgeError::UnsupportedConversion {
            from: from.into(),
            to,
        }
    }

    pub fn overflow(value: impl ToString, kind: RawKind) -> Self {
        EnumforgeError::Overflow {
            value: value.to_string(),
            kind,
        }
    }

    pub fn unknown_constant(input: impl Into<String>) -> Self {
        EnumforgeError::UnknownConstant {
            input: input.into(),
        }
    }

    pub fn node(message: impl ToString) -> Self {
        EnumforgeError::Node(message.to_string())
    }

    pub fn parse_source(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        EnumforgeError::ParseSource {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn invalid_annotation(message: impl Into<String>) -> Self {
        EnumforgeError::InvalidAnnotation(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        EnumforgeError::Config(message.into())
    }

    /// Wraps the error with a short description of the operation that failed.
    pub fn context(self, context: impl Into<String>) -> Self {
        EnumforgeError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, looking through any context wrappers.
    pub fn root(&self) -> &EnumforgeError {
        match self {
            EnumforgeError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_unknown_constant(&self) -> bool {
        matches!(self.root(), EnumforgeError::UnknownConstant { .. })
    }
}
