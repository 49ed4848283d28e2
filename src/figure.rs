//! Figure model: a grid of axes, one per group.
//!
//! A [`Figure`] is a plain value owned by the accumulator. It is created on the
//! first render, updated in place by every later render and disposed when the
//! plot is closed. Drawing it is the job of [`crate::render`] and the surfaces.

use crate::config::FigureSize;
use crate::data::layout::GridLayout;
use crate::data::smoothing::{smooth, SmoothedSeries};
use crate::style::{alloc_color, LineStyle, Rgb, Theme, TitleFont};

/// One line drawn on an axes.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedLine {
    pub color: Rgb,
    /// Raw samples; x is the sample index.
    pub samples: Vec<f64>,
    /// Present for [`LineStyle::Smoothed`].
    pub smoothed: Option<SmoothedSeries>,
    /// Draw the ±1σ band of `smoothed`.
    pub band: bool,
}

impl PlottedLine {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The y values that should be stroked: the rolling mean when smoothed.
    pub fn line_values(&self) -> &[f64] {
        match &self.smoothed {
            Some(s) => &s.mean,
            None => &self.samples,
        }
    }

    /// Finite `(min, max)` over everything drawn, band included.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        let mut vals: Box<dyn Iterator<Item = f64> + '_> = Box::new(self.samples.iter().copied());
        if let Some(s) = &self.smoothed {
            if self.band {
                vals = Box::new(vals.chain(s.lower.iter().copied()).chain(s.upper.iter().copied()));
            }
        }
        vals.filter(|y| y.is_finite()).fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxesTitle {
    pub text: String,
    pub font: TitleFont,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxesLabel {
    pub text: String,
    pub size: f64,
}

/// A single subplot.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    group: String,
    cell: (usize, usize),
    color: Rgb,
    title: Option<AxesTitle>,
    x_label: Option<AxesLabel>,
    lines: Vec<PlottedLine>,
}

impl Axes {
    fn new(group: String, cell: (usize, usize), color: Rgb) -> Self {
        Self {
            group,
            cell,
            color,
            title: None,
            x_label: None,
            lines: Vec::new(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// `(row, col)` in the figure grid.
    pub fn cell(&self) -> (usize, usize) {
        self.cell
    }

    pub fn title(&self) -> Option<&AxesTitle> {
        self.title.as_ref()
    }

    pub fn x_label(&self) -> Option<&AxesLabel> {
        self.x_label.as_ref()
    }

    pub fn lines(&self) -> &[PlottedLine] {
        &self.lines
    }

    /// Remove lines, title and label.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.title = None;
        self.x_label = None;
    }

    /// Add a line for `samples` in the given style, using this axes' colour.
    pub fn plot(&mut self, samples: &[f64], style: LineStyle) {
        let (smoothed, band) = match style {
            LineStyle::Plain => (None, false),
            LineStyle::Smoothed { window, band } => (Some(smooth(samples, window)), band),
        };
        self.lines.push(PlottedLine {
            color: self.color,
            samples: samples.to_vec(),
            smoothed,
            band,
        });
    }

    pub fn set_title<S: Into<String>>(&mut self, text: S, font: TitleFont) {
        self.title = Some(AxesTitle {
            text: text.into(),
            font,
        });
    }

    pub fn set_x_label<S: Into<String>>(&mut self, text: S, size: f64) {
        self.x_label = Some(AxesLabel {
            text: text.into(),
            size,
        });
    }

    /// Finite y range over all lines.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        self.lines
            .iter()
            .filter_map(PlottedLine::y_extent)
            .reduce(|(a, b), (c, d)| (a.min(c), b.max(d)))
    }

    /// Length of the longest line.
    pub fn x_len(&self) -> usize {
        self.lines.iter().map(PlottedLine::len).max().unwrap_or(0)
    }
}

/// The figure: size, theme, grid layout and one [`Axes`] per group.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    size: FigureSize,
    theme: Theme,
    layout: GridLayout,
    axes: Vec<Axes>,
    revision: u64,
}

impl Figure {
    /// Create the grid for `groups`; the layout is fixed from here on.
    pub fn new(groups: &[String], size: FigureSize, theme: Theme) -> Self {
        let layout = GridLayout::for_group_count(groups.len());
        let axes = groups
            .iter()
            .enumerate()
            .map(|(i, g)| Axes::new(g.clone(), layout.cell(i), alloc_color(i)))
            .collect();
        log::debug!(
            "created figure {}x{} px with {}x{} grid",
            size.width,
            size.height,
            layout.rows,
            layout.cols
        );
        Self {
            size,
            theme,
            layout,
            axes,
            revision: 0,
        }
    }

    pub fn size(&self) -> FigureSize {
        self.size
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    pub fn axes_for(&self, group: &str) -> Option<&Axes> {
        self.axes.iter().find(|a| a.group == group)
    }

    pub fn axes_mut(&mut self, group: &str) -> Option<&mut Axes> {
        self.axes.iter_mut().find(|a| a.group == group)
    }

    /// Number of completed redraws.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Mark the end of a redraw.
    pub(crate) fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Release the figure.
    pub fn dispose(self) {
        log::debug!("disposing figure after {} redraws", self.revision);
    }
}
