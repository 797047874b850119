use thiserror::Error;

/// Errors returned while parsing wim info output.
#[derive(Debug, Error)]
pub enum WimInfoError {
    /// A required numeric field is absent or does not parse as an integer.
    /// `value` is `None` when the key was not present at all.
    #[error("missing or invalid '{field}' field: {value:?}")]
    MissingField {
        field: &'static str,
        value: Option<String>,
    },

    /// The header declares zero images.
    #[error("Failed to parse wim info")]
    Empty,

    #[error("Failed to parse wim info: {got} != {want}")]
    IndexMismatch { got: usize, want: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
