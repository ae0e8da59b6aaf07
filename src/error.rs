use thiserror::Error;

/// Errors raised at the boundaries of the crate (settings, recipe files, CLI).
///
/// The link-injection core itself never fails: malformed recipe content is
/// passed through unchanged instead of producing an error.
#[derive(Error, Debug)]
pub enum AffiliateError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Recipe data could not be parsed or serialized
    #[error("Invalid recipe JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Failed to read an input file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Input file parsed as JSON but holds neither a recipe nor a list of recipes
    #[error("Unsupported recipe document: {0}")]
    UnsupportedDocument(String),
}
