//! Hex string checks, padding and UTF-8 conversions.

use crate::error::UtilsError;
use crate::number::NumberLike;

fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

fn has_hex_prefix(value: &str) -> bool {
    value.starts_with("0x") || value.starts_with("0X")
}

/// Returns `true` if `value` is a `0x`-prefixed hex string, optionally
/// negative.
///
/// The prefix is mandatory, the digits are not: `"0x"` is strict hex.
/// Numbers are checked through their decimal rendering, so they never match.
pub fn is_hex_strict(value: impl Into<NumberLike>) -> bool {
    let rendered = match value.into() {
        NumberLike::Str(s) => s,
        NumberLike::Int(n) => n.to_string(),
        NumberLike::Big(_) => return false,
    };

    // At most one leading minus, then a mandatory 0x.
    let unsigned = rendered.strip_prefix('-').unwrap_or(&rendered);
    has_hex_prefix(unsigned) && unsigned[2..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Right-pads a hex value so its digits are `chars` long.
///
/// Numbers are rendered in base 16 and gain a `0x` prefix; strings keep a
/// `0x` prefix if they had one. Each missing digit is filled with one copy
/// of `sign`, which defaults to `"0"`. Values that are already long enough
/// are returned without padding.
pub fn right_pad(value: impl Into<NumberLike>, chars: usize, sign: Option<&str>) -> String {
    let (has_prefix, rendered) = match value.into() {
        NumberLike::Str(s) => (has_hex_prefix(&s), s),
        NumberLike::Int(n) if n < 0 => (true, format!("-{:x}", n.unsigned_abs())),
        NumberLike::Int(n) => (true, format!("{n:x}")),
        NumberLike::Big(n) => (false, n.to_str_radix(16)),
    };
    let digits = strip_hex_prefix(&rendered);

    // An empty sign falls back to "0".
    let sign = match sign {
        Some(s) if !s.is_empty() => s,
        _ => "0",
    };
    // One copy of `sign` per missing digit.
    let padding = sign.repeat(chars.saturating_sub(digits.chars().count()));

    format!("{}{digits}{padding}", if has_prefix { "0x" } else { "" })
}

/// Alias of [`right_pad`].
pub fn pad_right(value: impl Into<NumberLike>, chars: usize, sign: Option<&str>) -> String {
    right_pad(value, chars, sign)
}

/// Hex-encodes the UTF-8 bytes of `value` with a `0x` prefix.
pub fn from_utf8(value: &str) -> String {
    format!("0x{}", hex::encode(value.as_bytes()))
}

/// Decodes a hex string (optional `0x` prefix) into UTF-8 text.
pub fn to_utf8(value: &str) -> Result<String, UtilsError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    let bytes = hex::decode(digits).map_err(|e| UtilsError::InvalidHex(format!("{value:?}: {e}")))?;
    String::from_utf8(bytes).map_err(|e| UtilsError::InvalidUtf8(e.to_string()))
}

/// Alias of [`from_utf8`].
pub fn utf8_to_hex(value: &str) -> String {
    from_utf8(value)
}

/// Alias of [`to_utf8`].
pub fn hex_to_utf8(value: &str) -> Result<String, UtilsError> {
    to_utf8(value)
}
