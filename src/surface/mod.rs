//! Render surfaces: where a figure ends up after each redraw.
//!
//! A surface shows one figure at a time. [`RenderSurface::clear_output`] with
//! `wait = true` follows notebook semantics: the frame currently shown is
//! removed only when the next one arrives, so a sequence of
//! `show`/`clear_output(true)` calls looks like a single frame updating in
//! place.

mod file;
mod memory;
mod notebook;

pub use file::{FileSurface, FrameFormat};
pub use memory::MemorySurface;
pub use notebook::NotebookSurface;

use crate::error::Result;
use crate::figure::Figure;

pub trait RenderSurface {
    /// Display `figure`.
    fn show(&mut self, figure: &Figure) -> Result<()>;

    /// Remove previously shown output, either now or (`wait`) when the next
    /// frame is shown.
    fn clear_output(&mut self, wait: bool) -> Result<()>;

    /// Release the surface. Called when the owning plot is closed.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        (**self).show(figure)
    }

    fn clear_output(&mut self, wait: bool) -> Result<()> {
        (**self).clear_output(wait)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        (**self).show(figure)
    }

    fn clear_output(&mut self, wait: bool) -> Result<()> {
        (**self).clear_output(wait)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}
