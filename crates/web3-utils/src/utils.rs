use crate::address;
use crate::error::UtilsError;
use crate::hash::{ContentHasher, Keccak256Hasher};

/// Address helpers bound to a specific content hash.
///
/// The free functions in [`crate::address`] use [`Keccak256Hasher`]; this
/// type lets callers substitute another hash, e.g. in tests.
#[derive(Debug, Clone, Default)]
pub struct Web3Utils<H = Keccak256Hasher> {
    hasher: H,
}

impl<H: ContentHasher> Web3Utils<H> {
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// See [`address::is_address`].
    pub fn is_address(&self, address: &str) -> bool {
        address::is_address_with(&self.hasher, address)
    }

    /// See [`address::check_address_checksum`].
    pub fn check_address_checksum(&self, address: &str) -> bool {
        address::check_address_checksum_with(&self.hasher, address)
    }

    /// See [`address::to_checksum_address`].
    pub fn to_checksum_address(&self, address: &str) -> Result<String, UtilsError> {
        address::to_checksum_address_with(&self.hasher, address)
    }

    /// Hashes the UTF-8 bytes of `value`, returning `0x`-prefixed hex.
    pub fn sha3(&self, value: &str) -> String {
        format!("0x{}", self.hasher.hex_digest(value.as_bytes()))
    }
}
