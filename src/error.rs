//! Error type shared by the accumulator, renderers and surfaces.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LivePlotError {
    /// An update or restore referenced a group that was not declared at construction.
    #[error("unknown group `{0}`")]
    UnknownGroup(String),
    #[error("failed to draw figure: {0}")]
    Render(String),
    #[error("failed to parse SVG: {0}")]
    Svg(String),
    #[error("failed to rasterize figure: {0}")]
    Raster(String),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    /// The receiving end of a surface (e.g. the viewer window) has gone away.
    #[error("render surface is closed")]
    SurfaceClosed,
}

pub type Result<T> = std::result::Result<T, LivePlotError>;
