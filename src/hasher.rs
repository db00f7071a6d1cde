//! Digest value object built from a literal string or a file's contents.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::algorithm::Algorithm;
use crate::error::HashError;
use crate::paths::expand_user;

/// An immutable digest plus the algorithm that produced it.
///
/// Equality compares the digest strings only; the algorithm field is carried
/// for display but never checked, so a sha256 digest pasted next to an md5
/// one simply compares unequal.
#[derive(Debug, Clone)]
pub(crate) struct Hasher {
    hash: String,
    algorithm: Algorithm,
}

impl Hasher {
    /// Hold `hash` verbatim, without validating it against anything.
    pub(crate) fn new(hash: impl Into<String>, algorithm: Algorithm) -> Self {
        Self {
            hash: hash.into(),
            algorithm,
        }
    }

    /// Digest the full contents of `path` with `algorithm`.
    ///
    /// A leading `~` in `path` is expanded first. The whole file is read into
    /// memory, so this is only suitable for the small downloads the tool
    /// targets.
    pub(crate) fn from_file(path: &Path, algorithm: Algorithm) -> Result<Self, HashError> {
        let expanded = expand_user(path);
        let contents = fs::read(&expanded).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                eprintln!("File not found: {}", path.display());
                HashError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                HashError::Io {
                    path: path.to_path_buf(),
                    source: err,
                }
            }
        })?;
        Ok(Self {
            hash: algorithm.digest_hex(&contents),
            algorithm,
        })
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl PartialEq for Hasher {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl fmt::Display for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash)
    }
}
