//! Plotly figure construction.
//!
//! The assembled data (see [`crate::assemble`]) is turned into declarative
//! `plotly::Plot` objects here. Figures are rebuilt from scratch on every
//! show action and handed to the presentation layer as opaque values; they
//! are never mutated incrementally.

use crate::assemble::{CompletenessMatrix, SeriesBundle};
use crate::theme::Theme;
use bde_data::Catalog;
use chrono::NaiveDate;
use plotly::common::{ColorScale, Font, Marker, Mode, Title};
use plotly::layout::{Axis, Center, DragMode, HoverMode, Mapbox, Margin};
use plotly::{HeatMap, Layout, Plot, Scatter, ScatterMapbox};

/// Map center when the catalog is empty (Indonesian archipelago).
const FALLBACK_CENTER: (f64, f64) = (-2.5, 118.0);

/// The time-series chart: one lines-mode trace per selected station.
///
/// Missing values (sanitized sentinels included) break the line rather than
/// plotting as magnitudes.
pub fn timeseries_figure(bundle: &SeriesBundle, theme: &Theme) -> Plot {
    let mut plot = Plot::new();
    for series in &bundle.series {
        plot.add_trace(
            Scatter::new(date_strings(&series.dates), series.values.clone())
                .mode(Mode::Lines)
                .name(&series.label)
                .connect_gaps(false),
        );
    }
    let layout = base_layout(theme)
        .title(Title::with_text(format!(
            "<i>Grafik {}</i>",
            title_case(bundle.parameter.quantity())
        )))
        .height(300)
        .hover_mode(HoverMode::XUnified)
        .drag_mode(DragMode::Zoom)
        .x_axis(Axis::new().title(Title::with_text("Tanggal")))
        .y_axis(Axis::new().title(Title::with_text(bundle.parameter.label())))
        .margin(Margin::new().top(65))
        .show_legend(true);
    plot.set_layout(layout);
    plot
}

/// The completeness heatmap: stations on y (most recent selection on top),
/// months on x, fixed 0–100 color range. Missing cells stay uncolored.
pub fn completeness_figure(matrix: &CompletenessMatrix, theme: &Theme) -> Plot {
    let x = date_strings(&matrix.months);
    let y: Vec<String> = matrix.station_ids.iter().map(|id| id.to_string()).collect();
    let trace = HeatMap::new(x, y, matrix.rows.clone())
        .color_scale(ColorScale::Palette(theme.heatmap_palette.clone()))
        .zmin(0.0)
        .zmax(100.0);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    let layout = base_layout(theme)
        .title(Title::with_text(format!(
            "<i>Kelengkapan Data {} (0-100%)</i>",
            title_case(matrix.parameter.quantity())
        )))
        .height(300)
        .drag_mode(DragMode::Zoom)
        .x_axis(Axis::new().title(Title::with_text("Tanggal")))
        .y_axis(Axis::new().title(Title::with_text("ID Stasiun")))
        .margin(Margin::new().top(65));
    plot.set_layout(layout);
    plot
}

/// The station map: one marker per catalog station, hover label
/// `"{id} - {name}"`, centered on the catalog's mean position.
pub fn map_figure(catalog: &Catalog, theme: &Theme) -> Plot {
    let latitudes: Vec<f64> = catalog.iter().map(|s| s.latitude).collect();
    let longitudes: Vec<f64> = catalog.iter().map(|s| s.longitude).collect();
    let labels: Vec<String> = catalog.iter().map(|s| s.label()).collect();

    let trace = ScatterMapbox::new(latitudes, longitudes)
        .marker(
            Marker::new()
                .size(12)
                .color(theme.marker_color.clone())
                .opacity(1.0),
        )
        .text_array(labels)
        .name("stasiun");

    let (center_lat, center_lon) = catalog.mean_position().unwrap_or(FALLBACK_CENTER);
    let mut plot = Plot::new();
    plot.add_trace(trace);
    let layout = base_layout(theme)
        .title(Title::with_text(format!("<b>{}</b>", theme.map_title)))
        .height(500)
        .drag_mode(DragMode::Pan)
        .margin(Margin::new().top(80))
        .mapbox(
            Mapbox::new()
                .style(theme.map_style.clone())
                .center(Center::new(center_lat, center_lon))
                .zoom(4),
        )
        .show_legend(false);
    plot.set_layout(layout);
    plot
}

/// The axis-less placeholder rendered before the first show action.
pub fn empty_figure() -> Plot {
    let mut plot = Plot::new();
    plot.add_trace(Scatter::new(Vec::<f64>::new(), Vec::<f64>::new()));
    plot.set_layout(
        Layout::new()
            .height(200)
            .x_axis(hidden_axis())
            .y_axis(hidden_axis()),
    );
    plot
}

fn hidden_axis() -> Axis {
    Axis::new()
        .show_grid(false)
        .show_tick_labels(false)
        .zero_line(false)
}

fn base_layout(theme: &Theme) -> Layout {
    Layout::new()
        .font(Font::default().family(theme.font_family))
        .auto_size(true)
}

fn date_strings(dates: &[NaiveDate]) -> Vec<String> {
    dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect()
}

/// Capitalize each word, the way the original chart titles were cased.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
