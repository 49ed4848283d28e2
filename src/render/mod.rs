//! Static figure rendering: SVG through plotters, PNG through resvg.

pub mod raster;
pub mod svg;

pub use raster::{figure_to_png, svg_to_png};
pub use svg::figure_to_svg;
