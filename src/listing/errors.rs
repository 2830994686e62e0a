use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("Parse error: {0}.")]
    ParseError(String),

    #[error("Unsupported listing format: {0}.")]
    UnsupportedFormat(String),
}
