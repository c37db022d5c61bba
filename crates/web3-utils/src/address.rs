use crate::error::UtilsError;
use crate::hash::{ContentHasher, Keccak256Hasher};

/// Number of hex digits in an address body.
pub const ADDRESS_HEX_LEN: usize = 40;

/// Network prefix of hex-encoded TRON addresses.
pub const TRON_ADDRESS_PREFIX: &str = "41";

/// Splits an address into its optional prefix and its 40-digit body.
///
/// Accepts `0x`, `0X` or `41` as prefix. Returns `None` unless the body is
/// exactly 40 hex digits.
fn split_address(address: &str) -> Option<(&str, &str)> {
    let (prefix, body) = match address.len() {
        ADDRESS_HEX_LEN => ("", address),
        len if len == ADDRESS_HEX_LEN + 2 && address.is_char_boundary(2) => {
            let (prefix, body) = address.split_at(2);
            match prefix {
                "0x" | "0X" | TRON_ADDRESS_PREFIX => (prefix, body),
                _ => return None,
            }
        }
        _ => return None,
    };

    if body.chars().all(|c| c.is_ascii_hexdigit()) {
        Some((prefix, body))
    } else {
        None
    }
}

/// Returns `true` if `address` is a well-formed address.
///
/// The address is 40 hex digits with an optional `0x` or `41` prefix. If the
/// digits are all lowercase or all uppercase no checksum is encoded and the
/// address is accepted; mixed case must match the Keccak-256 checksum.
pub fn is_address(address: &str) -> bool {
    is_address_with(&Keccak256Hasher, address)
}

pub(crate) fn is_address_with<H: ContentHasher + ?Sized>(hasher: &H, address: &str) -> bool {
    let Some((_, body)) = split_address(address) else {
        tracing::trace!(len = address.len(), "rejected malformed address");
        return false;
    };

    // All-lowercase or all-uppercase addresses carry no checksum.
    let is_all_lower = body.chars().all(|c| !c.is_ascii_uppercase());
    let is_all_upper = body.chars().all(|c| !c.is_ascii_lowercase());

    if is_all_lower || is_all_upper {
        return true;
    }

    check_address_checksum_with(hasher, address)
}

/// Verifies the mixed-case checksum of an address.
///
/// A leading `0x` is removed, and if 42 characters remain a leading `41` is
/// removed too. The lowercased digits are hashed; every digit whose hash
/// nibble is above 7 must be uppercase, every other digit lowercase.
pub fn check_address_checksum(address: &str) -> bool {
    check_address_checksum_with(&Keccak256Hasher, address)
}

pub(crate) fn check_address_checksum_with<H: ContentHasher + ?Sized>(
    hasher: &H,
    address: &str,
) -> bool {
    let mut body = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);
    // A 42-character remainder still carries the TRON network prefix.
    if body.len() == ADDRESS_HEX_LEN + 2 {
        body = body.strip_prefix(TRON_ADDRESS_PREFIX).unwrap_or(body);
    }

    if body.len() < ADDRESS_HEX_LEN || !body.is_ascii() {
        return false;
    }

    // Hash the lowercase digits, without any prefix.
    let hash_hex = hasher.hex_digest(body.to_ascii_lowercase().as_bytes());
    let hash_hex = hash_hex.as_bytes();
    if hash_hex.len() < ADDRESS_HEX_LEN {
        return false;
    }

    for (i, c) in body.bytes().take(ADDRESS_HEX_LEN).enumerate() {
        let Some(nibble) = (hash_hex[i] as char).to_digit(16) else {
            return false;
        };
        // Nibble >= 8 means uppercase; digits 0-9 satisfy either case.
        let matches = if nibble > 7 {
            c.to_ascii_uppercase() == c
        } else {
            c.to_ascii_lowercase() == c
        };
        if !matches {
            tracing::debug!(position = i, "address checksum mismatch");
            return false;
        }
    }

    true
}

/// Applies the mixed-case checksum to an address.
///
/// The prefix is kept (`0X` is normalized to `0x`) and the digits are cased
/// according to the Keccak-256 hash of their lowercase form.
pub fn to_checksum_address(address: &str) -> Result<String, UtilsError> {
    to_checksum_address_with(&Keccak256Hasher, address)
}

pub(crate) fn to_checksum_address_with<H: ContentHasher + ?Sized>(
    hasher: &H,
    address: &str,
) -> Result<String, UtilsError> {
    let (prefix, body) = split_address(address).ok_or_else(|| {
        UtilsError::InvalidAddress(format!(
            "expected {ADDRESS_HEX_LEN} hex characters with optional 0x or 41 prefix, got {address:?}"
        ))
    })?;

    let lower = body.to_ascii_lowercase();
    let hash_hex = hasher.hex_digest(lower.as_bytes());
    if hash_hex.len() < ADDRESS_HEX_LEN {
        return Err(UtilsError::InvalidAddress(format!(
            "hash digest too short for checksum: {} nibbles",
            hash_hex.len()
        )));
    }

    let mut checksummed = String::with_capacity(prefix.len() + ADDRESS_HEX_LEN);
    checksummed.push_str(&prefix.to_ascii_lowercase());

    // Uppercase every letter whose hash nibble is >= 8.
    for (c, h) in lower.chars().zip(hash_hex.chars()) {
        let nibble = h.to_digit(16).ok_or_else(|| {
            UtilsError::InvalidAddress(format!("hash digest is not hex: {h:?}"))
        })?;
        if nibble > 7 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }

    Ok(checksummed)
}
