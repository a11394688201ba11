use rand::{rngs::OsRng, RngCore};

/// 128 random bytes, hex-encoded to 256 chars on the wire.
pub const ACCESS_TOKEN_BYTES: usize = 128;

/// Generate a fresh opaque access token. Issued exactly once, at account
/// creation; never rotated or expired.
pub fn generate_access_token() -> String {
    let mut bytes = [0u8; ACCESS_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_hex_of_expected_length() {
        let token = generate_access_token();
        assert_eq!(token.len(), ACCESS_TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tokens_are_unique() {
        assert_ne!(generate_access_token(), generate_access_token());
    }
}
