//! Identity hashing
//!
//! Pod and host names are assigned by people and schedulers, not by a
//! coordinator, so the machine ID is derived from them by hashing. Two
//! different identities can map to the same machine ID. That only weakens
//! uniqueness across those two instances: their IDs still differ unless they
//! are minted in the same tick with the same sequence.

use sha2::{Digest, Sha256};

/// Hash `identity` into the range selected by `mask`.
///
/// Takes the first 16 bits of the SHA-256 digest as a big-endian integer and
/// keeps the bits set in `mask`. Empty input is hashed like any other string.
pub fn hash(identity: &str, mask: u16) -> u16 {
    let digest = Sha256::digest(identity.as_bytes());
    u16::from_be_bytes([digest[0], digest[1]]) & mask
}
