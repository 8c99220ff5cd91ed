use sha2::Digest;

use crate::errors::IdenticonError;

/// Hashes the input and returns the digest as a lowercase hex string
pub fn hex_digest<D: Digest>(input: &str) -> String {
    let digest = D::digest(input.as_bytes());
    hex::encode(digest)
}

/// Reads the byte encoded by two hex characters starting at `offset`
pub(crate) fn read_hex_byte(
    digest: &str,
    offset: usize,
) -> Result<u8, IdenticonError> {
    let pair = offset.checked_add(2)
        .and_then(|end| digest.get(offset..end))
        .ok_or(IdenticonError::InvalidInput("digest is too short"))?;
    let mut byte = [0; 1];
    hex::decode_to_slice(pair, &mut byte)
        .map_err(|_| IdenticonError::InvalidInput("invalid hex string"))?;
    Ok(byte[0])
}
