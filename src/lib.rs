//! ctree - print a directory tree, one palette color per depth

pub mod config;
pub mod error;
pub mod file_utils;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use error::{Error, Result};
pub use file_utils::Entry;
pub use output::ColorEmitter;
pub use tree::{TreeRenderer, compare_names, render_to_string};
