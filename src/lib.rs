pub mod args;
pub mod commands;
pub mod digest;
pub mod display;
pub mod error;
pub mod listing;
pub mod number;
pub mod size;

pub use digest::{decode_digest, decode_digest_strict, encode_digest};
pub use number::{format_number, format_number_with};
pub use size::format_size;
