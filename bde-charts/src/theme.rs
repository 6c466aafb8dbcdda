//! Presentation themes.
//!
//! The explorer historically shipped as three cosmetic variants of the same
//! application. They are collapsed here into one presentation layer driven
//! by a theme struct: chart styling on one side, the handful of copy strings
//! that differed on the other. Pick a preset by name at startup.

use crate::error::{ChartError, Result};
use plotly::color::NamedColor;
use plotly::common::ColorScalePalette;
use plotly::layout::MapboxStyle;

/// Styling and copy for one explorer variant.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Preset name, as accepted by [`Theme::preset`].
    pub key: &'static str,
    pub app_title: &'static str,
    /// Short tagline shown under the title.
    pub tagline: &'static str,
    pub button_label: &'static str,
    pub map_title: &'static str,
    pub font_family: &'static str,
    pub heatmap_palette: ColorScalePalette,
    pub map_style: MapboxStyle,
    pub marker_color: NamedColor,
}

impl Theme {
    /// Look up a preset by name.
    pub fn preset(name: &str) -> Result<Theme> {
        match name {
            "sketchy" => Ok(Theme::sketchy()),
            "flatly" => Ok(Theme::flatly()),
            "darkly" => Ok(Theme::darkly()),
            other => Err(ChartError::UnknownTheme(other.to_string())),
        }
    }

    /// Names of all available presets.
    pub fn names() -> [&'static str; 3] {
        ["sketchy", "flatly", "darkly"]
    }

    /// The hand-drawn look of the original explorer.
    fn sketchy() -> Theme {
        Theme {
            key: "sketchy",
            app_title: "BMKG Data Explorer",
            tagline: "Edisi Sumber Terbuka (Offline)",
            button_label: "Tampilkan Grafik",
            map_title: "Lokasi Stasiun BMKG",
            font_family: "Neucha",
            heatmap_palette: ColorScalePalette::Blackbody,
            map_style: MapboxStyle::CartoPositron,
            marker_color: NamedColor::DodgerBlue,
        }
    }

    fn flatly() -> Theme {
        Theme {
            key: "flatly",
            app_title: "BMKG Data Explorer",
            tagline: "Penjelajah data stasiun cuaca 🌧️",
            button_label: "Tampilkan Grafik",
            map_title: "Peta Stasiun BMKG",
            font_family: "Open Sans, sans-serif",
            heatmap_palette: ColorScalePalette::Viridis,
            map_style: MapboxStyle::OpenStreetMap,
            marker_color: NamedColor::RoyalBlue,
        }
    }

    fn darkly() -> Theme {
        Theme {
            key: "darkly",
            app_title: "BMKG Data Explorer",
            tagline: "Mode gelap",
            button_label: "Tampilkan Grafik",
            map_title: "Lokasi Stasiun BMKG",
            font_family: "Lato, sans-serif",
            heatmap_palette: ColorScalePalette::Plasma,
            map_style: MapboxStyle::CartoDarkmatter,
            marker_color: NamedColor::Tomato,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::sketchy()
    }
}
