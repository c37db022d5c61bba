use sha3::{Digest, Keccak256};

/// A deterministic content hash with a fixed-width hex digest.
///
/// Address checksums only look at the first 40 nibbles of the digest, so
/// implementations must produce at least 20 bytes.
pub trait ContentHasher {
    /// Returns the digest of `data` as lowercase hex, without a `0x` prefix.
    fn hex_digest(&self, data: &[u8]) -> String;
}

/// Keccak-256, the hash used for EIP-55 and TRON address checksums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256Hasher;

impl ContentHasher for Keccak256Hasher {
    fn hex_digest(&self, data: &[u8]) -> String {
        hex::encode(Keccak256::digest(data))
    }
}

/// Keccak-256 of the UTF-8 bytes of `value`, as `0x`-prefixed lowercase hex.
pub fn sha3(value: &str) -> String {
    format!("0x{}", Keccak256Hasher.hex_digest(value.as_bytes()))
}
