use std::fmt;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::OnceLock;

use super::errors::JwtError;

/// Symmetric key material used to sign and verify tokens.
///
/// Immutable once loaded and safe to share between concurrent requests.
pub enum SigningKey {
    /// Key bytes held in memory.
    Static(Arc<[u8]>),

    /// Key read from a file on first use and cached afterwards.
    ///
    /// A failed read is not cached; the next call tries again.
    File {
        path: PathBuf,
        cached: OnceLock<Arc<[u8]>>,
    },
}

impl SigningKey {
    /// Use the given bytes as the signing secret.
    pub fn from_secret(secret: &[u8]) -> Self {
        SigningKey::Static(Arc::from(secret))
    }

    /// Read the signing secret from `path` when first needed.
    ///
    /// The raw file bytes are the secret, trailing newline included.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        SigningKey::File {
            path: path.into(),
            cached: OnceLock::new(),
        }
    }

    /// Obtain the key bytes.
    ///
    /// # Errors
    /// * `KeyUnavailable` - The key file cannot be read or the key is empty
    pub fn material(&self) -> Result<Arc<[u8]>, JwtError> {
        match self {
            SigningKey::Static(secret) => Self::non_empty(Arc::clone(secret)),
            SigningKey::File { path, cached } => {
                if let Some(secret) = cached.get() {
                    return Ok(Arc::clone(secret));
                }

                let secret = Self::non_empty(Self::read(path)?)?;
                // A concurrent caller may have won the race; both read the same file.
                let _ = cached.set(Arc::clone(&secret));
                Ok(secret)
            }
        }
    }

    fn read(path: &Path) -> Result<Arc<[u8]>, JwtError> {
        fs::read(path).map(Arc::from).map_err(|e| {
            JwtError::KeyUnavailable(format!("could not open jwt key {}: {}", path.display(), e))
        })
    }

    fn non_empty(secret: Arc<[u8]>) -> Result<Arc<[u8]>, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::KeyUnavailable("jwt key is empty".to_string()));
        }
        Ok(secret)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigningKey::Static(_) => f.write_str("SigningKey::Static(<redacted>)"),
            SigningKey::File { path, cached } => f
                .debug_struct("SigningKey::File")
                .field("path", path)
                .field("loaded", &cached.get().is_some())
                .finish(),
        }
    }
}
