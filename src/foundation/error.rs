/// Convenience result type used across kbanim.
pub type KbanimResult<T> = Result<T, KbanimError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum KbanimError {
    /// Invalid engine input (color lists, step counts, geometry).
    #[error("validation error: {0}")]
    Validation(String),

    /// Generator parameters of the wrong arity or type.
    #[error("parameter error: {0}")]
    Params(String),

    /// Inconsistent batch configuration or configurator document.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KbanimError {
    /// Build a [`KbanimError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KbanimError::Params`] value.
    pub fn params(msg: impl Into<String>) -> Self {
        Self::Params(msg.into())
    }

    /// Build a [`KbanimError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`KbanimError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for KbanimError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
