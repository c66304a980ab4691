use std::path::{Path, PathBuf};

/// Why a byte buffer could not be decoded as a manifest.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),
    #[error("top-level value is {0}, expected an object")]
    NotAnObject(&'static str),
}

/// Reasons a located `package.json` could not be turned into a [`Manifest`].
///
/// [`Manifest`]: crate::manifest::Manifest
#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl ManifestError {
    pub fn path(&self) -> &Path {
        match self {
            ManifestError::Read { path, .. } | ManifestError::Decode { path, .. } => path,
        }
    }
}
