//! Native viewer window.
//!
//! The window runs the eframe event loop and therefore has to own the main
//! thread; the plot lives on a worker thread and reaches the window through a
//! channel:
//!
//! ```no_run
//! use liveplot_notebook::window::{channel_figure, run_viewer, ViewerConfig};
//! use liveplot_notebook::{LivePlot, LivePlotConfig};
//!
//! let (sink, rx) = channel_figure();
//! std::thread::spawn(move || {
//!     let mut plot = LivePlot::new(LivePlotConfig::default().with_groups(["train", "val"]), sink);
//!     for step in 0..100 {
//!         let _ = plot.push([("train", 1.0 / (step as f64 + 1.0)), ("val", 0.5)]);
//!     }
//! });
//! run_viewer(rx, ViewerConfig::default()).unwrap();
//! ```

use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use egui_plot::{Line, Plot};

use crate::config::FigureSize;
use crate::error::{LivePlotError, Result};
use crate::figure::{Axes, Figure};
use crate::style::Rgb;
use crate::surface::RenderSurface;

/// Messages sent from a [`FigureSink`] to the viewer.
pub enum FigureCommand {
    /// Replace the displayed figure.
    Show(Box<Figure>),
    /// Clear the display now, or (`wait`) when the next figure arrives.
    Clear { wait: bool },
    /// Close the window.
    Close,
}

/// Render surface that forwards figures to a viewer window.
#[derive(Clone)]
pub struct FigureSink {
    tx: Sender<FigureCommand>,
}

impl RenderSurface for FigureSink {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        self.tx
            .send(FigureCommand::Show(Box::new(figure.clone())))
            .map_err(|_| LivePlotError::SurfaceClosed)
    }

    fn clear_output(&mut self, wait: bool) -> Result<()> {
        self.tx
            .send(FigureCommand::Clear { wait })
            .map_err(|_| LivePlotError::SurfaceClosed)
    }

    fn close(&mut self) -> Result<()> {
        // Closing an already closed window is fine.
        let _ = self.tx.send(FigureCommand::Close);
        Ok(())
    }
}

/// Create a new channel pair for the viewer: `(FigureSink, Receiver<FigureCommand>)`.
pub fn channel_figure() -> (FigureSink, Receiver<FigureCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (FigureSink { tx }, rx)
}

/// Window options for [`run_viewer`].
pub struct ViewerConfig {
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the figure.
    pub headline: Option<String>,
    /// Initial window size in points, used when `native_options` doesn't set one.
    pub inner_size: [f32; 2],
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "LivePlot".to_string(),
            headline: None,
            inner_size: [1000.0, 560.0],
            native_options: None,
        }
    }
}

impl ViewerConfig {
    /// Size the window to fit a figure of `size` pixels.
    pub fn for_figure_size(size: FigureSize) -> Self {
        Self {
            inner_size: [size.width as f32, size.height as f32 + 60.0],
            ..Default::default()
        }
    }
}

/// Shows the most recent figure received over the channel.
pub struct ViewerApp {
    rx: Receiver<FigureCommand>,
    current: Option<Figure>,
    headline: Option<String>,
    close_requested: bool,
    visuals_applied: bool,
}

impl ViewerApp {
    pub fn new(rx: Receiver<FigureCommand>) -> Self {
        Self {
            rx,
            current: None,
            headline: None,
            close_requested: false,
            visuals_applied: false,
        }
    }

    pub fn with_headline(mut self, headline: Option<String>) -> Self {
        self.headline = headline;
        self
    }

    pub fn current(&self) -> Option<&Figure> {
        self.current.as_ref()
    }

    /// Apply all pending commands.
    pub fn drain(&mut self) {
        while let Ok(cmd) = self.rx.try_recv() {
            match cmd {
                FigureCommand::Show(fig) => self.current = Some(*fig),
                // A waiting clear is satisfied by the next `Show` replacing the figure.
                FigureCommand::Clear { wait: true } => {}
                FigureCommand::Clear { wait: false } => self.current = None,
                FigureCommand::Close => self.close_requested = true,
            }
        }
    }
}

fn color32(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.0, c.1, c.2)
}

fn indexed_points(values: &[f64]) -> Vec<[f64; 2]> {
    values
        .iter()
        .enumerate()
        .filter(|(_, y)| y.is_finite())
        .map(|(i, y)| [i as f64, *y])
        .collect()
}

fn draw_axes(ui: &mut egui::Ui, axes: &Axes, show_grid: bool, width: f32, height: f32) {
    let mut plot_height = height;
    if let Some(title) = axes.title() {
        let mut text = egui::RichText::new(&title.text).size(title.font.size as f32);
        if title.font.bold {
            text = text.strong();
        }
        ui.label(text);
        plot_height -= title.font.size as f32 + ui.spacing().item_spacing.y + 4.0;
    }

    let mut plot = Plot::new(("liveplot_axes", axes.group()))
        .width(width)
        .height(plot_height.max(40.0))
        .allow_scroll(false)
        .show_grid(show_grid);
    if let Some(label) = axes.x_label() {
        plot = plot.x_axis_label(label.text.clone());
    }

    plot.show(ui, |plot_ui| {
        for line in axes.lines() {
            let color = color32(line.color);
            if let (Some(s), true) = (&line.smoothed, line.band) {
                let faded = color.gamma_multiply(0.4);
                plot_ui.line(Line::new(format!("{} +σ", axes.group()), indexed_points(&s.upper)).color(faded).width(1.0));
                plot_ui.line(Line::new(format!("{} -σ", axes.group()), indexed_points(&s.lower)).color(faded).width(1.0));
            }
            plot_ui.line(
                Line::new(axes.group(), indexed_points(line.line_values()))
                    .color(color)
                    .width(2.0),
            );
        }
    });
}

fn draw_figure(ui: &mut egui::Ui, fig: &Figure) {
    let layout = fig.layout();
    let show_grid = fig.theme().colors().grid.is_some();
    let spacing = ui.spacing().item_spacing;
    let avail = ui.available_size();
    let cell_w = (avail.x - spacing.x * (layout.cols as f32 - 1.0)) / layout.cols as f32;
    let cell_h = (avail.y - spacing.y * (layout.rows as f32 - 1.0)) / layout.rows as f32;

    egui::Grid::new("liveplot_figure_grid")
        .num_columns(layout.cols)
        .spacing(spacing)
        .show(ui, |ui| {
            for row in 0..layout.rows {
                for col in 0..layout.cols {
                    match fig.axes().iter().find(|a| a.cell() == (row, col)) {
                        Some(axes) => {
                            ui.vertical(|ui| draw_axes(ui, axes, show_grid, cell_w, cell_h));
                        }
                        None => {
                            ui.allocate_space(egui::vec2(cell_w, cell_h));
                        }
                    }
                }
                ui.end_row();
            }
        });
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Figures use light seaborn-like themes.
        if !self.visuals_applied {
            ctx.set_visuals(egui::Visuals::light());
            self.visuals_applied = true;
        }

        self.drain();
        if self.close_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if let Some(h) = &self.headline {
            egui::TopBottomPanel::top("liveplot_headline").show(ctx, |ui| {
                ui.heading(h);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| match &self.current {
            Some(fig) => draw_figure(ui, fig),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("Waiting for data…");
                });
            }
        });

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

/// Open the viewer window and block until it is closed.
pub fn run_viewer(rx: Receiver<FigureCommand>, mut cfg: ViewerConfig) -> eframe::Result<()> {
    let app = ViewerApp::new(rx).with_headline(cfg.headline.take());

    let mut opts = cfg.native_options.take().unwrap_or_default();
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(cfg.inner_size[0], cfg.inner_size[1]));
    }

    eframe::run_native(&cfg.title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
