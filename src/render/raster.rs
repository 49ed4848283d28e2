use std::io::Cursor;

use crate::error::{LivePlotError, Result};
use crate::figure::Figure;

/// Rasterize an SVG document to PNG bytes.
///
/// Text uses the system fonts; on a machine without fonts the labels are
/// simply missing from the bitmap.
pub fn svg_to_png(svg: &str) -> Result<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| LivePlotError::Svg(e.to_string()))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| LivePlotError::Raster(format!("cannot allocate {width}x{height} pixmap")))?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);

    // tiny-skia stores premultiplied alpha; PNG wants straight alpha.
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| LivePlotError::Raster("pixel buffer size mismatch".to_string()))?;

    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)?;
    Ok(out)
}

/// Draw `figure` and rasterize it to PNG bytes.
pub fn figure_to_png(figure: &Figure) -> Result<Vec<u8>> {
    let svg = super::svg::figure_to_svg(figure)?;
    svg_to_png(&svg)
}
