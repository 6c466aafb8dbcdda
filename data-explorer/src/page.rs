//! The dashboard page.
//!
//! One self-contained HTML document: header copy, the station map, the
//! current selection, and the two charts, with Plotly loaded from its CDN.
//! All figure markup comes from the session's chart bundle; this module only
//! lays the pieces out.

use bde_charts::ExplorerSession;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Render the full dashboard page for the session's current state.
pub fn render(session: &ExplorerSession) -> String {
    let theme = session.theme();
    let map = session.map_figure().to_inline_html(Some("map-fig"));
    let charts = session.charts();
    let timeseries = charts.timeseries.to_inline_html(Some("graph-all"));
    let completeness = charts.completeness.to_inline_html(Some("graph-completeness"));

    let selection = selection_summary(session);
    let parameter = session.parameter();

    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{plotly}"></script>
<style>
  body {{ font-family: {font}; max-width: 1100px; margin: 0 auto; padding: 1rem; }}
  h1 {{ text-align: center; text-transform: uppercase; }}
  p.tagline {{ text-align: center; font-weight: bold; }}
  footer {{ text-align: center; margin-top: 2rem; }}
</style>
</head>
<body>
<h1>{title}</h1>
<p class="tagline">{tagline}</p>
{map}
<p><b>Stasiun:</b> {selection}</p>
<p><b>Parameter:</b> {parameter_label}</p>
<hr>
{timeseries}
<hr>
{completeness}
<hr>
<footer>{title} &middot; parameter {parameter_code}</footer>
</body>
</html>
"#,
        title = theme.app_title,
        tagline = theme.tagline,
        plotly = PLOTLY_CDN,
        font = theme.font_family,
        map = map,
        selection = selection,
        parameter_label = parameter.label(),
        parameter_code = parameter.code(),
        timeseries = timeseries,
        completeness = completeness,
    )
}

/// The effective selection as `"id - name"` labels, comma separated.
fn selection_summary(session: &ExplorerSession) -> String {
    let labels: Vec<String> = session
        .dropdown_value()
        .iter()
        .map(|&id| match session.catalog().get(id) {
            Some(station) => station.label(),
            None => id.to_string(),
        })
        .collect();
    if labels.is_empty() {
        "tidak ada".to_string()
    } else {
        labels.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bde_charts::Theme;
    use bde_db::{Store, StoreBuilder};
    use tempfile::TempDir;

    fn sample_session(dir: &TempDir) -> ExplorerSession {
        let obs_path = dir.path().join("bmkg.db");
        let builder = StoreBuilder::create(&obs_path).unwrap();
        builder
            .load_metadata("station_id,name,latitude,longitude\n96783,Bandung,-6.88,107.59\n")
            .unwrap();
        builder
            .load_observations(
                "station_id,date,Tn,Tx,Tavg,RH_avg,RR,ss,ff_x,ddd_x,ff_avg,ddd_car\n\
                 96783,2022-05-04,,,,,1.5,,,,,\n",
            )
            .unwrap();

        let completeness_path = dir.path().join("bmkg-completeness.db");
        let builder = StoreBuilder::create(&completeness_path).unwrap();
        builder
            .load_completeness(
                "station_id,month,Tn,Tx,Tavg,RH_avg,RR,ss,ff_x,ddd_x,ff_avg,ddd_car\n\
                 96783,2022-05-01,,,,,0.9,,,,,\n",
            )
            .unwrap();

        ExplorerSession::new(
            Store::at(obs_path),
            Store::at(completeness_path),
            10,
            Theme::default(),
        )
        .unwrap()
    }

    #[test]
    fn page_embeds_all_three_figures() {
        let dir = TempDir::new().unwrap();
        let mut session = sample_session(&dir);
        session.on_dropdown_change(vec![96783]);
        session.on_show_clicked().unwrap();

        let html = render(&session);
        assert!(html.contains("map-fig"));
        assert!(html.contains("graph-all"));
        assert!(html.contains("graph-completeness"));
        assert!(html.contains("BMKG Data Explorer"));
        assert!(html.contains("96783 - Bandung"));
    }

    #[test]
    fn empty_selection_renders_a_placeholder_label() {
        let dir = TempDir::new().unwrap();
        let session = sample_session(&dir);
        let html = render(&session);
        assert!(html.contains("tidak ada"));
    }
}
