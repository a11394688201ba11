use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_hash_verifies_original_password() {
        let password = "letmein-but-with-entropy-7x";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(hash.starts_with("$argon2"), "hash should be a PHC string");
        assert!(verify_password(password, &hash).expect("verify should succeed"));
    }

    #[test]
    fn near_miss_passwords_do_not_verify() {
        let hash = hash_password("authbox-admin-2024").expect("hashing should succeed");
        for attempt in ["authbox-admin-2025", "authbox-admin-2024 ", ""] {
            assert!(!verify_password(attempt, &hash).expect("verify should not error"));
        }
    }

    #[test]
    fn hash_is_salted_per_user() {
        let password = "two-users-same-password";
        let a = hash_password(password).expect("hash a");
        let b = hash_password(password).expect("hash b");
        assert_ne!(a, b, "two hashes of the same password must differ");
        assert!(verify_password(password, &a).unwrap());
        assert!(verify_password(password, &b).unwrap());
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        let err = verify_password("anything", "plaintext-snuck-into-the-column").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
