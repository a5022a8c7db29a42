//! Server key material and its key file
//!
//! One key per deployment, generated on first run and read back afterwards.
//! Its secrecy is the only thing stopping players from forging a state or
//! reading their secret word out of a token.

use crate::error::KeyError;
use rand::Rng;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Total key length: 32 bytes for AES-256 followed by 32 bytes for HMAC-SHA256
pub const KEY_LEN: usize = 64;

const CIPHER_KEY_LEN: usize = 32;

/// Secret key material for the session codec
#[derive(Clone, PartialEq, Eq)]
pub struct SessionKey([u8; KEY_LEN]);

impl SessionKey {
    /// Generate a fresh random key
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rand::rng().fill(&mut bytes[..]);
        Self(bytes)
    }

    /// Build a key from raw bytes
    ///
    /// # Errors
    /// Returns `KeyError::InvalidLength` unless exactly `KEY_LEN` bytes are given.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; KEY_LEN] = bytes.try_into().map_err(|_| KeyError::InvalidLength {
            expected: KEY_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(bytes))
    }

    pub(crate) fn cipher_key(&self) -> [u8; CIPHER_KEY_LEN] {
        let mut key = [0u8; CIPHER_KEY_LEN];
        key.copy_from_slice(&self.0[..CIPHER_KEY_LEN]);
        key
    }

    pub(crate) fn mac_key(&self) -> &[u8] {
        &self.0[CIPHER_KEY_LEN..]
    }

    /// Deployment-specific seed for shuffling the solution list
    ///
    /// Derived from the key so the order is stable for a deployment and
    /// unknown to players.
    #[must_use]
    pub fn ordering_seed(&self) -> u64 {
        let digest = Sha256::new()
            .chain_update(b"solution-order")
            .chain_update(self.0)
            .finalize();
        let mut seed = [0u8; 8];
        seed.copy_from_slice(&digest[..8]);
        u64::from_le_bytes(seed)
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionKey(..)")
    }
}

/// Loads the key file, creating it on first run
pub struct KeyStore;

impl KeyStore {
    /// Read the key at `path`, or create it if it does not exist yet
    ///
    /// Creation writes a private temporary file and hard-links it into place,
    /// which fails if another process or thread got there first. Every caller
    /// then reads back whichever key won, so racing first requests can never
    /// end up using different keys.
    ///
    /// # Errors
    /// Returns `KeyError` if the file cannot be read or written, or holds the
    /// wrong number of bytes.
    pub fn load_or_create(path: &Path) -> Result<SessionKey, KeyError> {
        match fs::read(path) {
            Ok(bytes) => return SessionKey::from_bytes(&bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(KeyError::io(path, e)),
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| KeyError::io(parent, e))?;
        }

        let key = SessionKey::generate();
        let temp = path.with_extension(format!("{:016x}.tmp", rand::random::<u64>()));
        fs::write(&temp, key.0).map_err(|e| KeyError::io(&temp, e))?;

        let linked = fs::hard_link(&temp, path);
        let _ = fs::remove_file(&temp);

        match linked {
            Ok(()) => log::info!("created new server key at {}", path.display()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                log::debug!("server key at {} was created concurrently", path.display());
            }
            Err(e) => return Err(KeyError::io(path, e)),
        }

        let bytes = fs::read(path).map_err(|e| KeyError::io(path, e))?;
        SessionKey::from_bytes(&bytes)
    }
}
