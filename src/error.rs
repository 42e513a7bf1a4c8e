use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    NotFound {
        path: PathBuf,
        source: image::ImageError,
    },
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl Error {
    /// Classifies a failure from `image::open`.
    pub(crate) fn from_load(path: PathBuf, source: image::ImageError) -> Self {
        match &source {
            image::ImageError::IoError(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Error::NotFound { path, source }
            }
            _ => Error::Decode { path, source },
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound { path, .. } => write!(f, "Sprite sheet not found: {}", path.display()),
            Error::Decode { path, source } => {
                write!(f, "Failed to decode {}: {}", path.display(), source)
            }
            Error::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NotFound { source, .. }
            | Error::Decode { source, .. }
            | Error::Write { source, .. } => Some(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
