//! TreeRenderer - depth-first walk that prints one line per visible entry

use std::io::Write;
use std::path::Path;

use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::file_utils::{Entry, display_name, is_hidden, read_entries};
use crate::output::{ColorEmitter, palette_color};

use super::sort::sort_entries;

const INDENT: &str = "   ";

/// Renders the tree under `config.root()` into a sink.
///
/// Each renderer owns its emitter, so color state never leaks between renders.
pub struct TreeRenderer<W: Write> {
    config: Config,
    out: ColorEmitter<W>,
}

impl<W: Write> TreeRenderer<W> {
    pub fn new(config: Config, sink: W) -> Self {
        Self {
            config,
            out: ColorEmitter::new(sink),
        }
    }

    /// Walk the tree and write every line.
    ///
    /// Fails with `InvalidDirectory` when the root is hidden and hidden entries
    /// are not shown. A directory that cannot be listed aborts the render;
    /// lines written before that point stay written.
    pub fn render(&mut self) -> Result<()> {
        let root = self.config.root().to_path_buf();
        if !root.is_dir() {
            return Err(Error::DirectoryNotFound(root));
        }
        if !self.config.show_hidden() && is_hidden(&root) {
            return Err(Error::InvalidDirectory(root));
        }

        debug!(
            root = %root.display(),
            show_hidden = self.config.show_hidden(),
            use_color = self.config.use_color(),
            "rendering tree"
        );

        self.emit_line(0, &dir_label(&display_name(&root)))?;
        for child in self.sorted_children(&root)? {
            self.visit(&child, 1)?;
        }

        debug!(root = %root.display(), "render finished");
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn visit(&mut self, entry: &Entry, depth: usize) -> Result<()> {
        if !self.config.show_hidden() && entry.is_hidden() {
            trace!(path = %entry.path.display(), "skipping hidden entry");
            return Ok(());
        }

        let indent = INDENT.repeat(depth);
        if !entry.is_dir {
            return self.emit_line(depth, &format!("{}{}", indent, entry.name));
        }

        self.emit_line(depth, &format!("{}{}", indent, dir_label(&entry.name)))?;
        for child in self.sorted_children(&entry.path)? {
            self.visit(&child, depth + 1)?;
        }
        Ok(())
    }

    fn sorted_children(&self, dir: &Path) -> Result<Vec<Entry>> {
        trace!(dir = %dir.display(), "listing directory");
        let mut entries = read_entries(dir)?;
        sort_entries(&mut entries);
        Ok(entries)
    }

    fn emit_line(&mut self, depth: usize, line: &str) -> Result<()> {
        let color = self.config.use_color().then(|| palette_color(depth));
        self.out.set_color(color);
        self.out.println(line)
    }
}

/// Render into a `String` instead of a stream.
pub fn render_to_string(config: &Config) -> Result<String> {
    let mut renderer = TreeRenderer::new(config.clone(), Vec::new());
    renderer.render()?;
    Ok(String::from_utf8_lossy(&renderer.into_inner()).into_owned())
}

fn dir_label(name: &str) -> String {
    if name.ends_with('/') {
        name.to_string()
    } else {
        format!("{}/", name)
    }
}
