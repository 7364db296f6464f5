//! Password hashing and verification with Argon2.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::Error;

/// Hashes a password with Argon2 under a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|err| Error::InternalError(format!("Failed to hash password: {err}")))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored hash.
///
/// A mismatch is Ok(false); only a malformed stored hash is an error.
pub fn verify_password(plain: &str, stored_hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|err| Error::InternalError(format!("Stored password hash is invalid: {err}")))?;

    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    mod secret_tests {
        use crate::server::util::secret::{hash_password, verify_password};

        /// Expect a hashed password to verify against itself
        #[test]
        fn test_hash_then_verify() {
            let hash = hash_password("correct horse battery").unwrap();

            assert!(verify_password("correct horse battery", &hash).unwrap());
        }

        /// Expect a wrong password to fail verification without erroring
        #[test]
        fn test_verify_wrong_password() {
            let hash = hash_password("correct horse battery").unwrap();

            assert!(!verify_password("incorrect goat battery", &hash).unwrap());
        }

        /// Expect the same password to hash differently each time
        #[test]
        fn test_salted_hashes_differ() {
            let first = hash_password("correct horse battery").unwrap();
            let second = hash_password("correct horse battery").unwrap();

            assert_ne!(first, second);
        }

        /// Expect a malformed stored hash to be reported as an error
        #[test]
        fn test_verify_malformed_hash() {
            assert!(verify_password("anything", "not-a-phc-string").is_err());
        }
    }
}
