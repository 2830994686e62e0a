pub mod errors;

use errors::DigestError;

/// Decode a hex digest string into bytes, two characters per byte.
///
/// Returns `None` when the string length is odd. A pair containing a
/// non-hex character decodes as `0x00`; callers that want malformed input
/// rejected should use [`decode_digest_strict`] instead.
pub fn decode_digest(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return None;
    }

    let mut buf = Vec::with_capacity(hex.len() / 2);
    for pair in hex.as_bytes().chunks_exact(2) {
        let byte = match (hex_digit(pair[0]), hex_digit(pair[1])) {
            (Some(hi), Some(lo)) => (hi << 4) | lo,
            _ => 0,
        };
        buf.push(byte);
    }
    Some(buf)
}

/// Strict variant of [`decode_digest`]: odd length and non-hex characters
/// are reported as errors instead of being coerced.
pub fn decode_digest_strict(hex: &str) -> Result<Vec<u8>, DigestError> {
    if hex.len() % 2 != 0 {
        return Err(DigestError::OddLength(hex.len()));
    }

    let mut buf = Vec::with_capacity(hex.len() / 2);
    for (i, pair) in hex.as_bytes().chunks_exact(2).enumerate() {
        let hi = hex_digit(pair[0]).ok_or(DigestError::InvalidDigit {
            position: i * 2,
            found: pair[0] as char,
        })?;
        let lo = hex_digit(pair[1]).ok_or(DigestError::InvalidDigit {
            position: i * 2 + 1,
            found: pair[1] as char,
        })?;
        buf.push((hi << 4) | lo);
    }
    Ok(buf)
}

/// Re-encode a digest as a lower-case hex string, two digits per byte.
pub fn encode_digest(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn hex_digit(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}
