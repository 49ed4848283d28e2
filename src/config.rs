//! Configuration for a [`LivePlot`](crate::LivePlot).
//!
//! Every field has a default, so partial JSON/YAML documents are accepted:
//!
//! ```yaml
//! groups: [train, val]
//! style: { kind: smoothed, window: 7, band: true }
//! theme: whitegrid
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::style::{LineStyle, Theme, TitleFont};

/// Pixel size of the rendered figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: u32,
    pub height: u32,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
        }
    }
}

impl FigureSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert an inch-based size at `dpi` dots per inch.
    pub fn from_inches(width: f64, height: f64, dpi: f64) -> Self {
        Self {
            width: (width * dpi).round().max(1.0) as u32,
            height: (height * dpi).round().max(1.0) as u32,
        }
    }
}

/// Top-level configuration for the live plot.
///
/// | Field             | Purpose |
/// |-------------------|---------|
/// | `groups`          | Declared series, in subplot order |
/// | `style`           | Plain or smoothed lines |
/// | `size`            | Figure size in pixels |
/// | `theme`           | Background/grid colours |
/// | `x_label`         | Label under every subplot |
/// | `title_font`      | Subplot title font |
/// | `label_font_size` | X label font size |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LivePlotConfig {
    /// Group names. Empty means a single `"default"` group.
    pub groups: Vec<String>,
    pub style: LineStyle,
    pub size: FigureSize,
    pub theme: Theme,
    pub x_label: String,
    pub title_font: TitleFont,
    pub label_font_size: f64,
}

impl Default for LivePlotConfig {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            style: LineStyle::default(),
            size: FigureSize::default(),
            theme: Theme::default(),
            x_label: "Timestep".to_string(),
            title_font: TitleFont::default(),
            label_font_size: 12.0,
        }
    }
}

impl LivePlotConfig {
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_size(mut self, size: FigureSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_x_label<S: Into<String>>(mut self, label: S) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file. Other extensions are read as YAML,
    /// which also accepts JSON documents.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&text),
            _ => Self::from_yaml_str(&text),
        }
    }
}
