//! Line styles, themes and colours.
//!
//! Styling is part of each plot's configuration; nothing here is process-wide.

use serde::{Deserialize, Serialize};

/// 8-bit RGB colour, independent of any drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// How a group's series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LineStyle {
    /// Raw samples joined by a line.
    #[default]
    Plain,
    /// Rolling mean over `window` samples, optionally with a translucent ±1σ band.
    Smoothed { window: usize, band: bool },
}

impl LineStyle {
    pub fn smoothed() -> Self {
        LineStyle::Smoothed {
            window: 5,
            band: true,
        }
    }
}

/// Figure-wide look, modelled after the common seaborn styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    DarkGrid,
    WhiteGrid,
    Dark,
    White,
    Ticks,
}

/// Concrete colours resolved from a [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub figure_background: Rgb,
    pub axes_background: Rgb,
    /// `None` disables the grid.
    pub grid: Option<Rgb>,
    pub text: Rgb,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[
            Theme::DarkGrid,
            Theme::WhiteGrid,
            Theme::Dark,
            Theme::White,
            Theme::Ticks,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::DarkGrid => "darkgrid",
            Theme::WhiteGrid => "whitegrid",
            Theme::Dark => "dark",
            Theme::White => "white",
            Theme::Ticks => "ticks",
        }
    }

    pub fn colors(&self) -> ThemeColors {
        const GREY_BG: Rgb = Rgb(234, 234, 242);
        const TEXT: Rgb = Rgb(38, 38, 38);
        match self {
            Theme::DarkGrid => ThemeColors {
                figure_background: Rgb::WHITE,
                axes_background: GREY_BG,
                grid: Some(Rgb::WHITE),
                text: TEXT,
            },
            Theme::WhiteGrid => ThemeColors {
                figure_background: Rgb::WHITE,
                axes_background: Rgb::WHITE,
                grid: Some(Rgb(204, 204, 204)),
                text: TEXT,
            },
            Theme::Dark => ThemeColors {
                figure_background: Rgb::WHITE,
                axes_background: GREY_BG,
                grid: None,
                text: TEXT,
            },
            Theme::White | Theme::Ticks => ThemeColors {
                figure_background: Rgb::WHITE,
                axes_background: Rgb::WHITE,
                grid: None,
                text: TEXT,
            },
        }
    }
}

/// Allocate a distinct line colour for the group at `index`.
pub fn alloc_color(index: usize) -> Rgb {
    const PALETTE: [Rgb; 10] = [
        Rgb(31, 119, 180),
        Rgb(255, 127, 14),
        Rgb(44, 160, 44),
        Rgb(214, 39, 40),
        Rgb(148, 103, 189),
        Rgb(140, 86, 75),
        Rgb(227, 119, 194),
        Rgb(127, 127, 127),
        Rgb(188, 189, 34),
        Rgb(23, 190, 207),
    ];
    PALETTE[index % PALETTE.len()]
}

/// Font used for subplot titles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TitleFont {
    pub size: f64,
    pub bold: bool,
}

impl Default for TitleFont {
    fn default() -> Self {
        Self {
            size: 14.0,
            bold: true,
        }
    }
}
