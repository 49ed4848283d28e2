use std::io::{Stdout, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;
use crate::figure::Figure;
use crate::render;

use super::RenderSurface;

static NEXT_SURFACE: AtomicU64 = AtomicU64::new(0);

/// Emits frames using the evcxr Jupyter kernel's display protocol:
///
/// ```text
/// EVCXR_BEGIN_CONTENT text/html
/// <div data-liveplot="liveplot-..."><svg ...></div>
/// EVCXR_END_CONTENT
/// ```
///
/// The kernel only appends to a cell, so clearing is done in the page: every
/// frame is tagged with this surface's id, and after a clear the next frame
/// carries a script that removes the older tagged frames. The cell therefore
/// shows one figure that updates in place.
pub struct NotebookSurface<W: Write = Stdout> {
    out: W,
    id: String,
    pending_clear: bool,
}

impl NotebookSurface<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> NotebookSurface<W> {
    pub fn new(out: W) -> Self {
        let id = format!(
            "liveplot-{}-{}-{}",
            std::process::id(),
            chrono::Utc::now().timestamp_millis(),
            NEXT_SURFACE.fetch_add(1, Ordering::Relaxed)
        );
        Self {
            out,
            id,
            pending_clear: false,
        }
    }

    /// Value of the `data-liveplot` attribute on this surface's frames.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Script removing this surface's frames, sparing the last `keep`.
    fn removal_script(&self, keep: usize) -> String {
        format!(
            "<script>(function(){{var f=document.querySelectorAll('[data-liveplot=\"{id}\"]');\
             for(var i=0;i<f.length-{keep};i++){{f[i].remove();}}}})();</script>",
            id = self.id,
        )
    }

    fn write_frame(&mut self, html: &str) -> Result<()> {
        writeln!(self.out, "EVCXR_BEGIN_CONTENT text/html")?;
        self.out.write_all(html.as_bytes())?;
        writeln!(self.out)?;
        writeln!(self.out, "EVCXR_END_CONTENT")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> RenderSurface for NotebookSurface<W> {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let svg = render::figure_to_svg(figure)?;
        let mut html = format!("<div data-liveplot=\"{}\">{svg}</div>", self.id);
        if std::mem::take(&mut self.pending_clear) {
            html.push_str(&self.removal_script(1));
        }
        self.write_frame(&html)
    }

    fn clear_output(&mut self, wait: bool) -> Result<()> {
        if wait {
            self.pending_clear = true;
            return Ok(());
        }
        self.pending_clear = false;
        let script = self.removal_script(0);
        self.write_frame(&script)
    }
}
