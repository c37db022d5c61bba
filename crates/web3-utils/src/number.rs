use alloy_primitives::U256;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, One};

use crate::error::UtilsError;

/// Width of the two's-complement words produced by [`to_twos_complement`].
pub const TWOS_COMPLEMENT_BITS: u64 = 256;

/// A loosely-typed numeric input: a string, a machine integer or an
/// arbitrary-precision integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberLike {
    Str(String),
    Int(i128),
    Big(BigInt),
}

impl NumberLike {
    pub fn is_string(&self) -> bool {
        matches!(self, NumberLike::Str(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, NumberLike::Int(_))
    }

    pub fn is_big_number(&self) -> bool {
        matches!(self, NumberLike::Big(_))
    }
}

impl Default for NumberLike {
    fn default() -> Self {
        NumberLike::Int(0)
    }
}

impl From<&str> for NumberLike {
    fn from(value: &str) -> Self {
        NumberLike::Str(value.to_owned())
    }
}

impl From<String> for NumberLike {
    fn from(value: String) -> Self {
        NumberLike::Str(value)
    }
}

impl From<BigInt> for NumberLike {
    fn from(value: BigInt) -> Self {
        NumberLike::Big(value)
    }
}

macro_rules! number_like_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumberLike {
                fn from(value: $t) -> Self {
                    NumberLike::Int(i128::from(value))
                }
            }
        )*
    };
}

number_like_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

/// Normalizes a numeric input into a [`BigInt`].
///
/// Strings starting with `0x` or `-0x` are parsed in base 16 (keeping the
/// sign), every other string in base 10. Big integers pass through.
pub fn to_big_number(value: impl Into<NumberLike>) -> Result<BigInt, UtilsError> {
    match value.into() {
        NumberLike::Big(n) => Ok(n),
        NumberLike::Int(n) => Ok(BigInt::from(n)),
        NumberLike::Str(s) => {
            let (digits, radix) = if let Some(rest) = s.strip_prefix("0x") {
                (rest.to_owned(), 16)
            } else if let Some(rest) = s.strip_prefix("-0x") {
                (format!("-{rest}"), 16)
            } else {
                (s.clone(), 10)
            };

            // from_str_radix skips `_` separators.
            if digits.contains('_') {
                return Err(UtilsError::InvalidNumber(format!(
                    "{s:?} in base {radix}: digit separators are not allowed"
                )));
            }

            BigInt::from_str_radix(&digits, radix)
                .map_err(|e| UtilsError::InvalidNumber(format!("{s:?} in base {radix}: {e}")))
        }
    }
}

/// Encodes a value as a 256-bit two's-complement word.
///
/// Returns `0x` followed by 64 lowercase hex digits. Accepts values in
/// `[-2^255, 2^256)`.
pub fn to_twos_complement(value: impl Into<NumberLike>) -> Result<String, UtilsError> {
    let n = to_big_number(value)?;
    let word = twos_complement_word(&n)?;
    Ok(format!("0x{}", hex::encode(word.to_be_bytes::<32>())))
}

fn twos_complement_word(n: &BigInt) -> Result<U256, UtilsError> {
    let magnitude = n.magnitude();

    let fits = match n.sign() {
        Sign::Minus => *magnitude <= BigUint::one() << (TWOS_COMPLEMENT_BITS - 1),
        _ => magnitude.bits() <= TWOS_COMPLEMENT_BITS,
    };
    if !fits {
        return Err(UtilsError::OutOfRange(format!(
            "{n} does not fit in {TWOS_COMPLEMENT_BITS}-bit two's complement"
        )));
    }

    let word = U256::try_from_be_slice(&magnitude.to_bytes_be()).ok_or_else(|| {
        UtilsError::OutOfRange(format!("{n} exceeds {TWOS_COMPLEMENT_BITS} bits"))
    })?;

    if n.sign() == Sign::Minus {
        Ok(word.wrapping_neg())
    } else {
        Ok(word)
    }
}
