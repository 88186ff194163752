//! Render configuration and command-line token parsing

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const SHOW_HIDDEN_FLAG: &str = "-h";
const NO_COLOR_FLAG: &str = "-nc";

/// Configuration for a single render.
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    root: PathBuf,
    show_hidden: bool,
    use_color: bool,
}

impl Config {
    /// Build a configuration from explicit values without validation.
    ///
    /// The caller guarantees that `root` is an existing directory.
    pub fn new(root: impl Into<PathBuf>, show_hidden: bool, use_color: bool) -> Self {
        Self {
            root: root.into(),
            show_hidden,
            use_color,
        }
    }

    /// Like [`Config::new`], but fails with `DirectoryNotFound` unless `root`
    /// is an existing directory.
    pub fn try_new(root: impl Into<PathBuf>, show_hidden: bool, use_color: bool) -> Result<Self> {
        let root = root.into();
        ensure_directory(&root)?;
        Ok(Self::new(root, show_hidden, use_color))
    }

    /// Parse command-line tokens.
    ///
    /// `-h` shows hidden entries and `-nc` disables color. Any other token
    /// starting with `-` is rejected; every remaining token is taken as the
    /// root path, the last one winning.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut show_hidden = false;
        let mut use_color = true;
        let mut root: Option<PathBuf> = None;

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                SHOW_HIDDEN_FLAG => show_hidden = true,
                NO_COLOR_FLAG => use_color = false,
                flag if flag.starts_with('-') => {
                    return Err(Error::invalid_argument(format!("Unknown flag: {}", flag)));
                }
                path => root = Some(PathBuf::from(path)),
            }
        }

        let root = root.ok_or_else(|| Error::invalid_argument("Filepath missing."))?;
        Self::try_new(root, show_hidden, use_color)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }
}

fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::DirectoryNotFound(path.to_path_buf()))
    }
}
