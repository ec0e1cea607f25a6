//! Plot rendering seam.
//!
//! Drawing is left to whatever plotting library the caller uses. The facade
//! only asks a [`PlotRenderer`] to write the current figure as a PNG at a path
//! it chooses.

use crate::error::{CoreError, CoreResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the current figure to a PNG file.
pub trait PlotRenderer {
    fn render_to_file(&self, path: &Path) -> CoreResult<()>;
}

impl<F> PlotRenderer for F
where
    F: Fn(&Path) -> CoreResult<()>,
{
    fn render_to_file(&self, path: &Path) -> CoreResult<()> {
        self(path)
    }
}

/// Renderer for an image that already exists on disk; "rendering" copies it.
#[derive(Debug, Clone)]
pub struct ImageFileRenderer {
    source: PathBuf,
}

impl ImageFileRenderer {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl PlotRenderer for ImageFileRenderer {
    fn render_to_file(&self, path: &Path) -> CoreResult<()> {
        if !self.source.is_file() {
            return Err(CoreError::PlotRender(format!(
                "image '{}' does not exist",
                self.source.display()
            )));
        }
        fs::copy(&self.source, path)?;
        Ok(())
    }
}
