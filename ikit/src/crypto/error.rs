//! Error types for the crypto helpers.
//!
//! Every fallible operation in [`crate::crypto`] returns a [`CryptoError`].
//! Messages describe which stage failed, never the key material involved.

use std::io;

use thiserror::Error;

/// Failures from the symmetric, keyed-hash and RSA helpers.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// A key file could not be read or written.
    #[error("key file I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Input that should have been standard base64 wasn't.
    #[error("invalid base64 input: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// The key material is not well-formed PEM, its payload does not
    /// decode as the declared key structure, or a PKCS#8 document holds
    /// something other than an RSA key.
    #[error("failed to parse key: {0}")]
    KeyParse(String),

    /// Block cipher rejected the key, the padding, or the ciphertext length.
    #[error("cipher error: {0}")]
    Cipher(String),

    /// RSA key generation failed (usually a modulus that is too small).
    #[error("key generation failed: {0}")]
    Keygen(String),

    /// One of the RSA encryption chunks could not be encrypted.
    #[error("encryption failed: {0}")]
    Encrypt(String),

    /// One of the RSA ciphertext chunks could not be decrypted.
    #[error("decryption failed -- wrong key or corrupted ciphertext")]
    Decrypt,

    /// The private key could not produce a signature, e.g. a modulus too
    /// small for the chosen digest.
    #[error("signing failed: {0}")]
    Sign(String),

    /// A signature did not verify against the message and public key.
    #[error("signature error: {0}")]
    Signature(String),
}

impl CryptoError {
    /// True when the error is an expected verification mismatch rather
    /// than a problem loading keys or decoding input.
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, CryptoError::Signature(_))
    }
}

/// Shorthand used across the crypto helpers.
pub type Result<T> = std::result::Result<T, CryptoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_signature_errors_are_verification_failures() {
        assert!(CryptoError::Signature("mismatch".into()).is_verification_failure());
        assert!(!CryptoError::Decrypt.is_verification_failure());
        assert!(!CryptoError::KeyParse("bad".into()).is_verification_failure());
        assert!(!CryptoError::Sign("message too long".into()).is_verification_failure());
        let io_err = CryptoError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(!io_err.is_verification_failure());
    }

    #[test]
    fn test_messages_name_the_stage() {
        let err = CryptoError::KeyParse("key is not RSA (algorithm 1.2.840.10045.2.1)".into());
        assert_eq!(
            err.to_string(),
            "failed to parse key: key is not RSA (algorithm 1.2.840.10045.2.1)"
        );
        assert_eq!(
            CryptoError::Sign("message too long".into()).to_string(),
            "signing failed: message too long"
        );
        assert_eq!(
            CryptoError::Cipher("bad padding".into()).to_string(),
            "cipher error: bad padding"
        );
    }
}
