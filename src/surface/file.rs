use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::figure::Figure;
use crate::render;

use super::RenderSurface;

/// Image encoding used by [`FileSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    Svg,
    Png,
}

impl FrameFormat {
    /// `.png` selects PNG; anything else is written as SVG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => FrameFormat::Png,
            _ => FrameFormat::Svg,
        }
    }

    fn encode(&self, figure: &Figure) -> Result<Vec<u8>> {
        match self {
            FrameFormat::Svg => Ok(render::figure_to_svg(figure)?.into_bytes()),
            FrameFormat::Png => render::figure_to_png(figure),
        }
    }
}

/// Keeps the latest frame in a single image file, e.g. for an IDE preview
/// pane or a browser with auto-reload.
///
/// Frames are written to a sibling temp file and renamed over the target, so
/// readers never see a half-written image.
#[derive(Debug)]
pub struct FileSurface {
    path: PathBuf,
    format: FrameFormat,
    frames_written: u64,
}

impl FileSurface {
    /// Write frames to `path`, choosing the format from its extension.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let format = FrameFormat::from_path(&path);
        Self::with_format(path, format)
    }

    pub fn with_format<P: Into<PathBuf>>(path: P, format: FrameFormat) -> Self {
        Self {
            path: path.into(),
            format,
            frames_written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FrameFormat {
        self.format
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let Some(name) = self.path.file_name() else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("frame path `{}` has no file name", self.path.display()),
            )
            .into());
        };
        let mut name = name.to_os_string();
        name.push(".tmp");
        Ok(self.path.with_file_name(name))
    }
}

impl RenderSurface for FileSurface {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let tmp = self.temp_path()?;
        let bytes = self.format.encode(figure)?;
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(&tmp, &self.path)?;
        self.frames_written += 1;
        log::trace!("wrote frame {} to {}", self.frames_written, self.path.display());
        Ok(())
    }

    /// With `wait` the next frame overwrites the file anyway; otherwise the
    /// file is removed now.
    fn clear_output(&mut self, wait: bool) -> Result<()> {
        if wait {
            return Ok(());
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
