//! Identifier Generation

use rand::Rng;

/// Characters used in generated ids
pub const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated ids
pub const ID_LENGTH: usize = 10;

/// Random id for an element or form.
///
/// Uniqueness is probabilistic; collisions are not detected.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
