//! # Cryptographic Helpers
//!
//! Thin, typed wrappers over RustCrypto primitives for the formats partner
//! systems actually send us:
//!
//! - **3DES-ECB** with PKCS7 padding, base64 on the wire ([`symmetric`]).
//! - **HMAC-SHA256 / HMAC-SHA1** with hex or base64 output ([`mac`]).
//! - **RSA PKCS#1 v1.5** chunked encryption, signatures, and PEM key
//!   handling ([`asymmetric`]).
//!
//! None of this is novel cryptography and none of it should be. Each call is
//! stateless: keys are loaded, used, and dropped within a single call.

pub mod asymmetric;
pub mod error;
pub mod mac;
pub mod symmetric;

pub use asymmetric::{HashAlgorithm, KeySource, PemKeyPair, PrivateKeyFormat};
pub use error::{CryptoError, Result};
pub use mac::{hmac_sha1_base64, hmac_sha256_hex};
