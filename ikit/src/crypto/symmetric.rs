//! # Triple-DES (ECB, PKCS7)
//!
//! Legacy symmetric encryption for talking to systems that still speak
//! 3DES. Payloads travel as standard base64 text.
//!
//! ## Read this before using it
//!
//! This is ECB mode: no IV, no chaining. Every 8-byte block is encrypted on
//! its own, so identical plaintext blocks produce identical ciphertext
//! blocks and block order can be shuffled without detection. There is no
//! authentication either. Use it for interop with an existing peer, not for
//! anything new.
//!
//! The key is taken as a string and used byte-for-byte. It must be exactly
//! [`DES_KEY_LENGTH`] (24) bytes: three independent DES keys, EDE3.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use des::TdesEde3;
use ecb::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyInit};

use super::error::{CryptoError, Result};
use crate::config::{DES_BLOCK_SIZE, DES_KEY_LENGTH};

type TdesEcbEncryptor = ecb::Encryptor<TdesEde3>;
type TdesEcbDecryptor = ecb::Decryptor<TdesEde3>;

/// Encrypt `plaintext` with 3DES-ECB and PKCS7 padding, returning base64.
///
/// Output length is always a whole number of blocks: a plaintext that is
/// already block-aligned gains one full block of padding.
///
/// # Errors
///
/// [`CryptoError::Cipher`] if `key` is not 24 bytes long.
///
/// # Example
///
/// ```
/// use ikit::crypto::symmetric::{decrypt, encrypt};
///
/// let key = "0123456789abcdefghijklmn";
/// let sealed = encrypt(b"order #1042 shipped", key).unwrap();
/// assert_eq!(decrypt(&sealed, key).unwrap(), b"order #1042 shipped");
/// ```
pub fn encrypt(plaintext: &[u8], key: &str) -> Result<String> {
    let ciphertext = encrypt_raw(plaintext, key.as_bytes())?;
    Ok(STANDARD.encode(ciphertext))
}

/// Decrypt base64 text produced by [`encrypt`].
///
/// # Errors
///
/// - [`CryptoError::Encoding`] if `ciphertext_b64` is not valid base64.
/// - [`CryptoError::Cipher`] if the key is not 24 bytes, the decoded
///   ciphertext is not a multiple of 8 bytes, or the padding is invalid
///   (which is also what a wrong key usually looks like).
pub fn decrypt(ciphertext_b64: &str, key: &str) -> Result<Vec<u8>> {
    let ciphertext = STANDARD.decode(ciphertext_b64)?;
    decrypt_raw(&ciphertext, key.as_bytes())
}

/// [`encrypt`] without the base64 step.
pub fn encrypt_raw(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let cipher = TdesEcbEncryptor::new_from_slice(key).map_err(|_| invalid_key(key))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// [`decrypt`] without the base64 step.
pub fn decrypt_raw(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let cipher = TdesEcbDecryptor::new_from_slice(key).map_err(|_| invalid_key(key))?;

    if ciphertext.is_empty() || ciphertext.len() % DES_BLOCK_SIZE != 0 {
        return Err(CryptoError::Cipher(format!(
            "ciphertext length {} is not a positive multiple of {DES_BLOCK_SIZE}",
            ciphertext.len()
        )));
    }

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::Cipher("invalid PKCS7 padding".into()))
}

fn invalid_key(key: &[u8]) -> CryptoError {
    CryptoError::Cipher(format!(
        "invalid 3DES key length: expected {DES_KEY_LENGTH} bytes, got {}",
        key.len()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0123456789abcdefghijklmn";

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let plaintext = b"the quick brown fox jumps over the lazy dog";
        let sealed = encrypt(plaintext, KEY).unwrap();
        assert_eq!(decrypt(&sealed, KEY).unwrap(), plaintext);
    }

    #[test]
    fn test_empty_plaintext_is_one_padding_block() {
        let raw = encrypt_raw(b"", KEY.as_bytes()).unwrap();
        assert_eq!(raw.len(), DES_BLOCK_SIZE);
        assert!(decrypt_raw(&raw, KEY.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_block_aligned_plaintext_gains_full_padding_block() {
        let raw = encrypt_raw(b"8 bytes!", KEY.as_bytes()).unwrap();
        assert_eq!(raw.len(), 2 * DES_BLOCK_SIZE);
    }

    #[test]
    fn test_ecb_repeats_identical_blocks() {
        // Known weakness of ECB, pinned so nobody "fixes" it into a
        // different mode and breaks interop.
        let raw = encrypt_raw(b"AAAAAAAAAAAAAAAA", KEY.as_bytes()).unwrap();
        assert_eq!(&raw[..8], &raw[8..16]);
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        assert_eq!(encrypt(b"same", KEY).unwrap(), encrypt(b"same", KEY).unwrap());
    }

    #[test]
    fn test_short_key_rejected() {
        let err = encrypt(b"data", "too short").unwrap_err();
        assert!(matches!(err, CryptoError::Cipher(_)));
        let err = decrypt("AAAAAAAAAAA=", "too short").unwrap_err();
        assert!(matches!(err, CryptoError::Cipher(_)));
    }

    #[test]
    fn test_invalid_base64_is_encoding_error() {
        let err = decrypt("not base64 !!", KEY).unwrap_err();
        assert!(matches!(err, CryptoError::Encoding(_)));
    }

    #[test]
    fn test_unaligned_ciphertext_rejected() {
        let err = decrypt_raw(&[0u8; 7], KEY.as_bytes()).unwrap_err();
        assert!(matches!(err, CryptoError::Cipher(_)));
        let err = decrypt_raw(&[], KEY.as_bytes()).unwrap_err();
        assert!(matches!(err, CryptoError::Cipher(_)));
    }

    #[test]
    fn test_wrong_key_does_not_recover_plaintext() {
        let plaintext = b"payroll batch 2024-11";
        let sealed = encrypt(plaintext, KEY).unwrap();
        // A wrong key almost always trips the padding check. On the rare
        // occasion it doesn't, the output is still garbage.
        match decrypt(&sealed, "nmlkjihgfedcba9876543210") {
            Ok(recovered) => assert_ne!(recovered, plaintext),
            Err(err) => assert!(matches!(err, CryptoError::Cipher(_))),
        }
    }
}
