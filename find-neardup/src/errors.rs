//! Error definitions.
use std::error::Error;
use std::{fmt, io, result};

/// A specialized Result type for this library.
pub type Result<T, E = FindNeardupError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Debug)]
pub enum FindNeardupError {
    /// Contains [`InputError`].
    Input(InputError),
    /// Contains [`std::io::Error`].
    Io(io::Error),
    /// Contains an error from an index.
    Index(anyhow::Error),
}

impl fmt::Display for FindNeardupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Input(e) => e.fmt(f),
            Self::Io(e) => write!(f, "IoError: {e}"),
            Self::Index(e) => write!(f, "IndexError: {e}"),
        }
    }
}

impl Error for FindNeardupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(_) => None,
            Self::Io(e) => Some(e),
            Self::Index(e) => Some(&**e),
        }
    }
}

impl From<io::Error> for FindNeardupError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<anyhow::Error> for FindNeardupError {
    fn from(e: anyhow::Error) -> Self {
        Self::Index(e)
    }
}

impl FindNeardupError {
    pub(crate) const fn input(msg: &'static str) -> Self {
        Self::Input(InputError { msg })
    }
}

/// Error used when the input argument is invalid.
#[derive(Debug)]
pub struct InputError {
    msg: &'static str,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InputError: {}", self.msg)
    }
}
