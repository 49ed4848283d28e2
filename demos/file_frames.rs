//! Example: live PNG file
//!
//! What it demonstrates
//! - `FileSurface` keeping one always-current PNG on disk.
//! - Saving the history as JSON and CSV at the end of a run.
//!
//! How to run
//! ```bash
//! cargo run --example file_frames -- /tmp/live.png
//! ```
//! Open the PNG in a viewer that reloads on change.

use std::path::PathBuf;
use std::time::Duration;

use liveplot_notebook::export::save_history_csv;
use liveplot_notebook::persistence::save_state_to_path;
use liveplot_notebook::{FileSurface, LivePlot, LivePlotConfig, Result, Values};

fn main() -> Result<()> {
    env_logger::init();

    let path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("liveplot.png"));

    let cfg = LivePlotConfig::default().with_groups(["loss", "accuracy", "lr"]);
    let mut plot = LivePlot::new(cfg, FileSurface::new(&path));

    for epoch in 0..40 {
        let e = epoch as f64;
        // one loss value per batch, one accuracy and lr per epoch
        let batch_losses: Vec<f64> = (0..8).map(|b| 2.0 / (1.0 + e + b as f64 / 8.0)).collect();
        let values = Values::groups()
            .with("loss", batch_losses)
            .with("accuracy", 1.0 - 0.9 * (-e / 10.0).exp())
            .with("lr", 0.1 * 0.95f64.powi(epoch));
        plot.push(values)?;
        std::thread::sleep(Duration::from_millis(100));
    }

    save_state_to_path(&plot.snapshot(), &path.with_extension("json"))?;
    save_history_csv(path.with_extension("csv"), plot.history())?;
    println!("frames written to {}", path.display());
    Ok(())
}
