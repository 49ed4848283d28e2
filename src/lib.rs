//! liveplot-notebook crate root: re-exports and module wiring.
//!
//! A [`LivePlot`] accumulates named series of samples (training loss,
//! validation accuracy, ...) and redraws them as a grid of line plots,
//! one subplot per group. Where the figure goes is decided by the
//! [`RenderSurface`]:
//! - [`NotebookSurface`]: self-replacing HTML/SVG frames for the evcxr Jupyter kernel
//! - [`FileSurface`]: a single SVG/PNG file rewritten on every redraw
//! - [`MemorySurface`]: frames kept in memory
//! - `window::FigureSink`: a native egui window (feature `window`)
//!
//! Modules:
//! - `data`: series buffers, update payloads, grid layout, smoothing
//! - `figure`: the figure/axes model
//! - `render`: SVG (plotters) and PNG (resvg) rendering
//! - `config`: serializable plot configuration
//! - `persistence` / `export`: JSON snapshots and CSV export of the history

pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod figure;
mod live_plot;
pub mod persistence;
pub mod render;
pub mod style;
pub mod surface;
#[cfg(feature = "window")]
pub mod window;

// Public re-exports for a compact external API
pub use config::{FigureSize, LivePlotConfig};
pub use data::layout::GridLayout;
pub use data::series::{SeriesCollection, DEFAULT_GROUP};
pub use data::values::{SampleValue, Values};
pub use error::{LivePlotError, Result};
pub use figure::{Axes, Figure, PlottedLine};
pub use live_plot::LivePlot;
pub use persistence::HistoryState;
pub use style::{LineStyle, Rgb, Theme, TitleFont};
pub use surface::{FileSurface, FrameFormat, MemorySurface, NotebookSurface, RenderSurface};
