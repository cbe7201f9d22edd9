//! Cryptographic utilities

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::constants::TOKEN_BYTES;

/// Generate a cryptographically secure, URL-safe bearer token
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Compare two secrets without short-circuiting on the first differing byte.
///
/// Both sides are hashed first so the comparison length never depends on input.
pub fn secrets_match(supplied: &str, expected: &str) -> bool {
    let supplied = Sha256::digest(supplied.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());

    supplied
        .iter()
        .zip(expected.iter())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token() {
        let token1 = generate_token();
        let token2 = generate_token();

        // 32 bytes of base64 without padding
        assert_eq!(token1.len(), 43);
        assert_ne!(token1, token2);
        assert!(
            token1
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_secrets_match() {
        assert!(secrets_match("chtcoder@prehsg", "chtcoder@prehsg"));
        assert!(!secrets_match("chtcoder@prehs", "chtcoder@prehsg"));
        assert!(!secrets_match("", "chtcoder@prehsg"));
    }
}
