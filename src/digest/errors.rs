use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DigestError {
    #[error("Digest has odd length: {0}.")]
    OddLength(usize),

    #[error("Invalid hex digit '{found}' at position {position}.")]
    InvalidDigit { position: usize, found: char },
}
