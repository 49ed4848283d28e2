//! Example: simulated training loop shown in a native window
//!
//! What it demonstrates
//! - Running a `LivePlot` on a worker thread with a `FigureSink` surface.
//! - Appending train/val losses each step and redrawing in place.
//!
//! How to run
//! ```bash
//! cargo run --example training_loop
//! ```

use std::time::Duration;

use liveplot_notebook::window::{channel_figure, run_viewer, ViewerConfig};
use liveplot_notebook::{LineStyle, LivePlot, LivePlotConfig, LivePlotError};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let cfg = LivePlotConfig::default()
        .with_groups(["train", "val"])
        .with_style(LineStyle::smoothed());
    let viewer = ViewerConfig::for_figure_size(cfg.size);
    let (sink, rx) = channel_figure();

    std::thread::spawn(move || {
        let mut plot = LivePlot::new(cfg, sink);
        for step in 0..500u32 {
            let t = step as f64;
            let noise = (t * 12.9898).sin() * 0.05;
            let train = (-t / 120.0).exp() + noise;
            let val = (-t / 150.0).exp() + 0.1 + noise * 0.5;
            match plot.push([("train", train), ("val", val)]) {
                Ok(()) => {}
                // window closed
                Err(LivePlotError::SurfaceClosed) => break,
                Err(e) => {
                    log::error!("plot update failed: {e}");
                    break;
                }
            }
            std::thread::sleep(Duration::from_millis(30));
        }
    });

    run_viewer(rx, viewer)
}
