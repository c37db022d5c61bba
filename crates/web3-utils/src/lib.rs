//! Address and hex formatting helpers for TRON/EVM tooling.
//!
//! This crate provides:
//! - Address validation with mixed-case (EIP-55 style) checksums, accepting
//!   `0x` and TRON `41` prefixes
//! - Strict hex checks, right padding and UTF-8/hex conversion
//! - Big-number normalization and 256-bit two's-complement encoding
//! - Canonical signature strings for JSON ABI entries
//!
//! Everything is re-exported at the crate root as a flat namespace.

pub mod abi;
pub mod address;
pub mod error;
pub mod format;
pub mod hash;
pub mod number;
pub mod utils;

pub use abi::{json_interface_method_to_string, AbiEntry, AbiInput};
pub use address::{check_address_checksum, is_address, to_checksum_address};
pub use error::UtilsError;
pub use format::{from_utf8, hex_to_utf8, is_hex_strict, pad_right, right_pad, to_utf8, utf8_to_hex};
pub use hash::{sha3, ContentHasher, Keccak256Hasher};
pub use number::{to_big_number, to_twos_complement, NumberLike};
pub use num_bigint::BigInt;
pub use utils::Web3Utils;
