//! Fake wallet primitives: deposit addresses, transaction ids, and the
//! shape check applied to user-submitted withdrawal addresses.
//!
//! All generated strings are decorative. They are never validated against a
//! chain and must not be treated as cryptographically meaningful.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::error::AddressError;

/// `0x` prefix plus 40 address characters.
pub const ADDRESS_LEN: usize = 42;

const TX_ID_HEX_CHARS: usize = 64;
const HEX_CHARSET: &[u8] = b"0123456789abcdef";

/// Returns a fresh fake deposit address: `0x` + 40 random alphanumerics.
pub fn generate_address() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ADDRESS_LEN - 2)
        .map(char::from)
        .collect();
    format!("0x{}", suffix)
}

/// Returns a fresh fake transaction id: `0x` + 64 random lowercase hex chars.
pub fn generate_tx_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..TX_ID_HEX_CHARS)
        .map(|_| HEX_CHARSET[rng.gen_range(0..HEX_CHARSET.len())] as char)
        .collect();
    format!("0x{}", suffix)
}

/// Shape check for withdrawal addresses: `0x` prefix and exactly 42
/// characters. No charset check beyond the prefix.
pub fn validate_address(address: &str) -> Result<(), AddressError> {
    if !address.starts_with("0x") {
        return Err(AddressError::MissingPrefix);
    }

    let len = address.chars().count();
    if len != ADDRESS_LEN {
        return Err(AddressError::BadLength {
            expected: ADDRESS_LEN,
            actual: len,
        });
    }

    Ok(())
}
