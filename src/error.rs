use thiserror::Error;

/// Placeholder results produced instead of a URL when the form cannot be composed.
///
/// These are not failures of the engine: the presentation layer displays the
/// message in place of the link.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    #[error("Please fill all required fields")]
    IncompleteFields,

    #[error("Invalid URL format")]
    MalformedDestination,
}

/// Errors raised by a clipboard backend when a write is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard is unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur when resolving a field by its external name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Unknown form field '{0}'")]
    UnknownField(String),
}

/// Errors that can occur when parsing an existing campaign code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("'{0}' is not a campaign code of the form cpm-XXXXXXXX-afbf08")]
    InvalidFormat(String),
}

/// Errors that can occur when loading or checking a variant configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read variant config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse variant config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid variant config: {0}")]
    Invalid(String),
}

/// Errors that can occur when loading form data from JSON.
#[derive(Error, Debug)]
pub enum FormDataError {
    #[error("Failed to read form data '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse form data JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Field(#[from] FieldError),
}
