//! Error types shared by configuration, output and rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input: bad command-line tokens or missing text to print.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("cannot access '{}': No such directory", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The root itself is hidden while hidden entries are not shown.
    #[error("'{}' is hidden; pass -h to show hidden entries", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("cannot read '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::ReadDir {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_displays_bare_message() {
        let err = Error::invalid_argument("Filepath missing.");
        assert_eq!(err.to_string(), "Filepath missing.");
    }

    #[test]
    fn test_directory_errors_name_the_path() {
        let err = Error::DirectoryNotFound(PathBuf::from("/no/such/dir"));
        assert!(err.to_string().contains("/no/such/dir"));

        let err = Error::InvalidDirectory(PathBuf::from(".secret"));
        assert!(err.to_string().contains(".secret"));
    }

    #[test]
    fn test_read_dir_keeps_source() {
        use std::error::Error as _;

        let err = Error::read_dir(
            "locked",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("locked"));
        assert!(err.source().is_some());
    }
}
