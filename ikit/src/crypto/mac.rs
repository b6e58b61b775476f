//! # Keyed Hashing (HMAC)
//!
//! HMAC-SHA256 and HMAC-SHA1 for request signing against third-party APIs.
//! Most of those APIs want a specific text encoding of the tag, so the
//! helpers come pre-encoded: SHA256 as lowercase hex, SHA1 as base64.
//!
//! Everything here is pure and infallible. HMAC accepts keys of any length
//! (long keys are hashed down, short ones zero-padded), so there is no
//! error path to report.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::digest::{CtOutput, KeyInit};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;
type HmacSha1 = Hmac<Sha1>;

/// HMAC-SHA256 of `data` under `secret`, as 64 lowercase hex characters.
///
/// # Example
///
/// ```
/// use ikit::crypto::mac::hmac_sha256_hex;
///
/// let tag = hmac_sha256_hex("what do ya want for nothing?", "Jefe");
/// assert_eq!(
///     tag,
///     "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
/// );
/// ```
pub fn hmac_sha256_hex(data: &str, secret: &str) -> String {
    hex::encode(hmac_sha256(data.as_bytes(), secret.as_bytes()))
}

/// HMAC-SHA1 of `data` under `secret`, standard base64 (28 characters).
pub fn hmac_sha1_base64(data: &str, secret: &str) -> String {
    STANDARD.encode(hmac_sha1(data.as_bytes(), secret.as_bytes()))
}

/// Raw 32-byte HMAC-SHA256 tag.
pub fn hmac_sha256(data: &[u8], secret: &[u8]) -> [u8; 32] {
    keyed::<HmacSha256>(data, secret).into_bytes().into()
}

/// Raw 20-byte HMAC-SHA1 tag.
pub fn hmac_sha1(data: &[u8], secret: &[u8]) -> [u8; 20] {
    keyed::<HmacSha1>(data, secret).into_bytes().into()
}

fn keyed<M: Mac + KeyInit>(data: &[u8], secret: &[u8]) -> CtOutput<M> {
    let mut mac = match <M as KeyInit>::new_from_slice(secret) {
        Ok(mac) => mac,
        // Hmac pads or hashes the key, so no length is rejected.
        Err(_) => unreachable!("HMAC key of {} bytes rejected", secret.len()),
    };
    mac.update(data);
    mac.finalize()
}
