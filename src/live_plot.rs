//! The live plot accumulator.
//!
//! [`LivePlot`] buffers named series ("groups") and redraws them as a grid of
//! line plots on a [`RenderSurface`]:
//!
//! ```no_run
//! use liveplot_notebook::{LivePlot, LivePlotConfig, MemorySurface};
//!
//! let cfg = LivePlotConfig::default().with_groups(["train", "val"]);
//! let mut plot = LivePlot::new(cfg, MemorySurface::new());
//! for step in 0..10 {
//!     let loss = 1.0 / (step as f64 + 1.0);
//!     plot.push([("train", loss), ("val", loss * 1.1)])?;
//! }
//! # Ok::<(), liveplot_notebook::LivePlotError>(())
//! ```

use std::io::Stdout;

use crate::config::LivePlotConfig;
use crate::data::layout::GridLayout;
use crate::data::series::{SeriesCollection, DEFAULT_GROUP};
use crate::data::values::Values;
use crate::error::Result;
use crate::figure::Figure;
use crate::persistence::HistoryState;
use crate::surface::{NotebookSurface, RenderSurface};

pub struct LivePlot<S: RenderSurface> {
    config: LivePlotConfig,
    history: SeriesCollection,
    /// Created on first render and reused until [`LivePlot::close`].
    figure: Option<Figure>,
    surface: S,
}

impl LivePlot<NotebookSurface<Stdout>> {
    /// A plot that draws into the current evcxr notebook cell.
    pub fn notebook(config: LivePlotConfig) -> Self {
        Self::new(config, NotebookSurface::stdout())
    }
}

impl<S: RenderSurface> LivePlot<S> {
    /// Create empty series for every configured group. Without groups the
    /// plot has the single group `"default"`.
    pub fn new(config: LivePlotConfig, surface: S) -> Self {
        let history = SeriesCollection::new(config.groups.iter().cloned());
        Self {
            config,
            history,
            figure: None,
            surface,
        }
    }

    /// Add samples and optionally redraw.
    ///
    /// `values` is a bare number (for the `"default"` group) or `(group,
    /// value)` pairs, where a value is one sample or a sequence of samples.
    /// Without `reset` the samples are appended; with `reset` they replace the
    /// group's series. With `render` the figure is redrawn afterwards,
    /// otherwise call [`LivePlot::render`] when convenient.
    ///
    /// Pairs are applied in order. An undeclared group fails the call with
    /// [`LivePlotError::UnknownGroup`](crate::LivePlotError::UnknownGroup);
    /// pairs before it stay applied and nothing is rendered.
    pub fn update<V: Into<Values>>(&mut self, values: V, render: bool, reset: bool) -> Result<()> {
        for (group, value) in values.into().into_pairs() {
            log::trace!("update `{group}` with {} sample(s), reset={reset}", value.len());
            self.history.apply(&group, value, reset)?;
        }
        if render {
            self.render()?;
        }
        Ok(())
    }

    /// Append and redraw: `update(values, true, false)`.
    pub fn push<V: Into<Values>>(&mut self, values: V) -> Result<()> {
        self.update(values, true, false)
    }

    /// Redraw every group from its full series and show the figure.
    ///
    /// The surface is asked to clear the previous frame once the new one is
    /// shown, so the output updates in place. Series data is not touched.
    pub fn render(&mut self) -> Result<()> {
        let config = &self.config;
        let history = &self.history;
        let figure = self.figure.get_or_insert_with(|| {
            Figure::new(history.groups(), config.size, config.theme)
        });

        for (group, samples) in history.iter() {
            let Some(axes) = figure.axes_mut(group) else {
                continue;
            };
            axes.clear();
            axes.plot(samples, config.style);
            if group != DEFAULT_GROUP {
                axes.set_title(group, config.title_font);
            }
            axes.set_x_label(config.x_label.as_str(), config.label_font_size);
        }
        figure.bump_revision();
        log::debug!("rendering figure revision {}", figure.revision());

        self.surface.show(figure)?;
        self.surface.clear_output(true)
    }

    /// Empty every series; groups are kept.
    pub fn reset(&mut self) {
        self.history.clear_all();
    }

    /// Dispose the figure and close the surface. A later render starts a new figure.
    pub fn close(&mut self) -> Result<()> {
        if let Some(fig) = self.figure.take() {
            fig.dispose();
        }
        self.surface.close()
    }

    /// Current series as a serializable snapshot.
    pub fn snapshot(&self) -> HistoryState {
        HistoryState::from_history(&self.history)
    }

    /// Replace the series of every group in `state`.
    ///
    /// Groups are restored in the order stored; an undeclared group fails the
    /// call and groups before it stay restored.
    pub fn restore(&mut self, state: HistoryState) -> Result<()> {
        for g in state.groups {
            self.history.replace(&g.name, g.samples)?;
        }
        Ok(())
    }

    /// Group names in subplot order.
    pub fn groups(&self) -> &[String] {
        self.history.groups()
    }

    pub fn series(&self, group: &str) -> Option<&[f64]> {
        self.history.get(group)
    }

    pub fn history(&self) -> &SeriesCollection {
        &self.history
    }

    /// Grid the figure uses (or will use on its first render).
    pub fn layout(&self) -> GridLayout {
        match &self.figure {
            Some(f) => f.layout(),
            None => GridLayout::for_group_count(self.history.len()),
        }
    }

    /// `None` until the first render.
    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    pub fn config(&self) -> &LivePlotConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(mut self) -> S {
        if let Some(fig) = self.figure.take() {
            fig.dispose();
        }
        self.surface
    }
}
