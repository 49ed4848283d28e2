use crate::error::Result;
use crate::figure::Figure;

use super::RenderSurface;

/// Keeps shown figures in memory, applying the same clear rules as a
/// notebook cell. Useful for headless runs and tests.
#[derive(Debug, Default)]
pub struct MemorySurface {
    frames: Vec<Figure>,
    pending_clear: bool,
    show_count: usize,
    clear_count: usize,
    closed: bool,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame a viewer would currently see.
    pub fn current(&self) -> Option<&Figure> {
        self.frames.last()
    }

    /// Frames still visible, oldest first.
    pub fn frames(&self) -> &[Figure] {
        &self.frames
    }

    pub fn show_count(&self) -> usize {
        self.show_count
    }

    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl RenderSurface for MemorySurface {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        if std::mem::take(&mut self.pending_clear) {
            self.frames.clear();
        }
        self.frames.push(figure.clone());
        self.show_count += 1;
        Ok(())
    }

    fn clear_output(&mut self, wait: bool) -> Result<()> {
        self.clear_count += 1;
        if wait {
            self.pending_clear = true;
        } else {
            self.frames.clear();
            self.pending_clear = false;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}
