// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const DEFAULT_SECRET_BYTES: usize = 32;

/// Generate a random shared secret using the OS RNG. Used at startup when
/// no CRON_SECRET is configured.
pub fn generate_secret_default() -> String {
    let mut rng = OsRng;
    generate_secret(&mut rng, DEFAULT_SECRET_BYTES)
}

/// Generate a URL-safe secret from random bytes.
/// Base64 URL-safe, no padding; 32 bytes -> ~43 char string.
pub fn generate_secret<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

/// SHA-256 of a secret. Comparing digests instead of the raw strings keeps
/// the comparison fixed-length.
pub fn hash_secret(secret: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    let out = hasher.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}

/// Constant-time compare for equal-length digests.
pub fn hashes_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
