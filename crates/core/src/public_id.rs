//! Opaque external identifiers.
//!
//! Entities exposed outside the backend are addressed by a fixed-length
//! lowercase alphanumeric token instead of their internal numeric id.

use rand::Rng;

/// Characters a public id is drawn from.
pub const PUBLIC_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of every generated public id.
pub const PUBLIC_ID_LENGTH: usize = 16;

/// Generate a new random public id.
pub fn generate_public_id() -> String {
    let mut rng = rand::rng();
    (0..PUBLIC_ID_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..PUBLIC_ID_ALPHABET.len());
            char::from(PUBLIC_ID_ALPHABET[idx])
        })
        .collect()
}

/// Whether `value` has the exact shape of a generated public id.
pub fn is_public_id(value: &str) -> bool {
    value.len() == PUBLIC_ID_LENGTH && value.bytes().all(|b| PUBLIC_ID_ALPHABET.contains(&b))
}
