//! # Constants & Configuration
//!
//! Every magic number in ikit lives here. Block sizes, padding overhead,
//! default key file names: if you find one hardcoded elsewhere, move it.
//!
//! The only runtime-configurable piece is [`KeygenConfig`], which controls
//! where [`generate_key_pair_with`](crate::crypto::asymmetric::generate_key_pair_with)
//! writes its PEM files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Triple-DES
// ---------------------------------------------------------------------------

/// 3DES-EDE3 key length in bytes. Three independent 8-byte DES keys.
pub const DES_KEY_LENGTH: usize = 24;

/// DES block size in bytes. Ciphertext is always a multiple of this.
pub const DES_BLOCK_SIZE: usize = 8;

// ---------------------------------------------------------------------------
// RSA
// ---------------------------------------------------------------------------

/// Bytes of framing PKCS#1 v1.5 encryption padding eats out of every block:
/// `0x00 0x02 <at least 8 random non-zero bytes> 0x00`.
pub const PKCS1V15_PADDING_OVERHEAD: usize = 11;

/// Modulus size used when the caller doesn't pick one.
pub const DEFAULT_RSA_BITS: usize = 2048;

/// File the generated private key is written to.
pub const DEFAULT_PRIVATE_KEY_FILE: &str = "private.pem";

/// File the generated public key is written to.
pub const DEFAULT_PUBLIC_KEY_FILE: &str = "public.pem";

/// PEM label for generated private keys. Used for both PKCS#1 and PKCS#8
/// payloads, matching the key files existing deployments already carry.
pub const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";

/// PEM label for SubjectPublicKeyInfo (PKIX) public keys.
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

// ---------------------------------------------------------------------------
// Key generation
// ---------------------------------------------------------------------------

/// DER encoding used for the private half of a generated key pair.
///
/// Also selects the parser when loading a private key back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivateKeyFormat {
    /// `RSAPrivateKey` structure from PKCS#1.
    #[default]
    Pkcs1,
    /// `PrivateKeyInfo` wrapper from PKCS#8. Must carry an RSA key.
    Pkcs8,
}

/// Where and how to write a freshly generated RSA key pair.
///
/// Missing fields fall back to [`KeygenConfig::default`] when deserialized,
/// so a config file only needs to mention what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeygenConfig {
    /// Modulus length in bits.
    pub bits: usize,
    /// Destination of the PEM-encoded private key.
    pub private_key_path: PathBuf,
    /// Destination of the PEM-encoded PKIX public key.
    pub public_key_path: PathBuf,
    /// DER structure wrapped inside the private key PEM block.
    pub private_key_format: PrivateKeyFormat,
}

impl Default for KeygenConfig {
    fn default() -> Self {
        Self {
            bits: DEFAULT_RSA_BITS,
            private_key_path: PathBuf::from(DEFAULT_PRIVATE_KEY_FILE),
            public_key_path: PathBuf::from(DEFAULT_PUBLIC_KEY_FILE),
            private_key_format: PrivateKeyFormat::Pkcs1,
        }
    }
}

impl KeygenConfig {
    /// Default file names with a custom modulus size.
    pub fn with_bits(bits: usize) -> Self {
        Self {
            bits,
            ..Self::default()
        }
    }

    /// Put both key files under `dir`, keeping their default names.
    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.private_key_path = dir.join(DEFAULT_PRIVATE_KEY_FILE);
        self.public_key_path = dir.join(DEFAULT_PUBLIC_KEY_FILE);
        self
    }

    pub fn private_key_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.private_key_path = path.into();
        self
    }

    pub fn public_key_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.public_key_path = path.into();
        self
    }

    pub fn private_key_format(mut self, format: PrivateKeyFormat) -> Self {
        self.private_key_format = format;
        self
    }
}
