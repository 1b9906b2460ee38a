//! Random token generation, exposed to templates as `random_token`.

use rand::Rng;

/// Token length used when a template calls `random_token()` without arguments.
pub const DEFAULT_TOKEN_LENGTH: usize = 32;

/// The 68 characters a token is drawn from.
pub const TOKEN_ALPHABET: &[u8; 68] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^";

/// Generate a random string of exactly `length` characters.
///
/// Each character is picked uniformly and independently from [`TOKEN_ALPHABET`].
/// Not suitable for secrets that need cryptographic guarantees.
pub fn random_token(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}
