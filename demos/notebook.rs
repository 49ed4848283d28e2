//! Example: notebook-style output
//!
//! What it demonstrates
//! - `LivePlot::notebook` writing evcxr display frames to stdout.
//! - Batching several updates before a single explicit `render()`.
//!
//! How to run
//! ```bash
//! cargo run --example notebook
//! ```
//! Inside an evcxr Jupyter kernel the same code shows the figure in the cell.

use liveplot_notebook::{LivePlot, LivePlotConfig, Result};

fn main() -> Result<()> {
    env_logger::init();

    let mut plot = LivePlot::notebook(LivePlotConfig::default());
    for step in 0..50 {
        let loss = 1.0 / (1.0 + step as f64 * 0.2);
        plot.update(loss, false, false)?;
    }
    plot.render()
}
