//! The explorer application session.
//!
//! `ExplorerSession` is the application-context object: it owns the catalog,
//! the two store handles, the selection resolver and the current charts, and
//! it exposes the three interaction events the presentation layer forwards.
//! There is no global state; everything a component needs is constructed
//! once at startup and passed down from here.
//!
//! Interactions are serialized by construction: each event method runs to
//! completion before the next is accepted, matching the one-callback-at-a-
//! time model of the original UI.

use crate::assemble::{build_completeness, build_timeseries, CompletenessMatrix, SeriesBundle};
use crate::error::Result;
use crate::figures::{completeness_figure, empty_figure, map_figure, timeseries_figure};
use crate::selection::SelectionResolver;
use crate::theme::Theme;
use bde_data::{Catalog, Parameter};
use bde_db::Store;
use plotly::Plot;

/// The presentation-ready pair of figures for the current selection.
///
/// Rebuilt from scratch on every show action, never mutated incrementally.
pub struct ChartBundle {
    pub timeseries: Plot,
    pub completeness: Plot,
}

impl ChartBundle {
    fn empty() -> Self {
        ChartBundle {
            timeseries: empty_figure(),
            completeness: empty_figure(),
        }
    }
}

/// One explorer session: catalog, stores, pending selection, current charts.
pub struct ExplorerSession {
    catalog: Catalog,
    observations: Store,
    completeness: Store,
    resolver: SelectionResolver,
    parameter: Parameter,
    theme: Theme,
    charts: ChartBundle,
    assembled: Option<(SeriesBundle, CompletenessMatrix)>,
}

impl ExplorerSession {
    /// Create a session, loading the station catalog from the observation
    /// store.
    ///
    /// A missing or empty catalog is fatal: the caller must abort startup,
    /// there is no degraded mode without station metadata.
    pub fn new(
        observations: Store,
        completeness: Store,
        selected_max: usize,
        theme: Theme,
    ) -> Result<Self> {
        let catalog = observations.read_catalog()?;
        log::info!("session: catalog loaded, {} stations", catalog.len());
        Ok(ExplorerSession {
            catalog,
            observations,
            completeness,
            resolver: SelectionResolver::new(selected_max),
            parameter: Parameter::Rr,
            theme,
            charts: ChartBundle::empty(),
            assembled: None,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn parameter(&self) -> Parameter {
        self.parameter
    }

    /// The current charts (placeholders before the first show action).
    pub fn charts(&self) -> &ChartBundle {
        &self.charts
    }

    /// The data behind the current charts, for export. `None` until the
    /// first successful show action.
    pub fn assembled(&self) -> Option<&(SeriesBundle, CompletenessMatrix)> {
        self.assembled.as_ref()
    }

    /// The dropdown's current value, as the UI should display it.
    pub fn dropdown_value(&self) -> &[i64] {
        self.resolver.dropdown_value()
    }

    /// `(value, label)` pairs for the station dropdown, in catalog order.
    pub fn dropdown_options(&self) -> Vec<(i64, String)> {
        self.catalog
            .iter()
            .map(|s| (s.station_id, s.label()))
            .collect()
    }

    /// The station map figure. Depends only on the catalog and theme, so it
    /// is built on demand rather than stored.
    pub fn map_figure(&self) -> Plot {
        map_figure(&self.catalog, &self.theme)
    }

    /// Map selection changed. Updates the pending selection only; charts are
    /// not recomputed until the show action.
    pub fn on_map_select(&mut self, station_ids: Vec<i64>) {
        self.resolver.on_map_select(station_ids);
    }

    /// Dropdown value changed. Same deferral as [`Self::on_map_select`].
    pub fn on_dropdown_change(&mut self, station_ids: Vec<i64>) {
        self.resolver.on_dropdown_change(station_ids);
    }

    /// Parameter dropdown changed.
    pub fn on_parameter_change(&mut self, parameter: Parameter) {
        self.parameter = parameter;
    }

    /// The show action: resolve the selection and rebuild both charts.
    ///
    /// On any failure the previous charts (and their exported data) are left
    /// untouched; a partially built bundle is never surfaced.
    pub fn on_show_clicked(&mut self) -> Result<&ChartBundle> {
        let selection = self.resolver.on_show_clicked();
        log::info!(
            "session: show {} station(s) for {}",
            selection.len(),
            self.parameter
        );
        let series = build_timeseries(
            &self.observations,
            &self.catalog,
            &selection,
            self.parameter,
        )?;
        let matrix = build_completeness(&self.completeness, &selection, self.parameter)?;
        self.charts = ChartBundle {
            timeseries: timeseries_figure(&series, &self.theme),
            completeness: completeness_figure(&matrix, &self.theme),
        };
        self.assembled = Some((series, matrix));
        Ok(&self.charts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChartError;
    use bde_db::{StoreBuilder, StoreError};
    use tempfile::TempDir;

    const OBS_HEADER: &str = "station_id,date,Tn,Tx,Tavg,RH_avg,RR,ss,ff_x,ddd_x,ff_avg,ddd_car\n";
    const COMPLETENESS_HEADER: &str =
        "station_id,month,Tn,Tx,Tavg,RH_avg,RR,ss,ff_x,ddd_x,ff_avg,ddd_car\n";

    /// Observation store with 96783 and 96001; completeness store with
    /// 96783 only, so a selection containing 96001 fails its heatmap.
    fn sample_session(dir: &TempDir, selected_max: usize) -> ExplorerSession {
        let obs_path = dir.path().join("bmkg.db");
        let builder = StoreBuilder::create(&obs_path).unwrap();
        builder
            .load_metadata(
                "station_id,name,latitude,longitude\n\
                 96783,Bandung,-6.88,107.59\n\
                 96001,Maimun Saleh,5.87,95.33\n",
            )
            .unwrap();
        builder
            .load_observations(&format!(
                "{OBS_HEADER}\
                 96783,2022-05-04,,,,,1.5,,,,,\n\
                 96783,2022-05-05,,,,,9999,,,,,\n\
                 96001,2022-05-04,,,,,3.0,,,,,\n",
            ))
            .unwrap();

        let completeness_path = dir.path().join("bmkg-completeness.db");
        let builder = StoreBuilder::create(&completeness_path).unwrap();
        builder
            .load_completeness(&format!(
                "{COMPLETENESS_HEADER}\
                 96783,2022-05-01,,,,,0.9,,,,,\n",
            ))
            .unwrap();

        ExplorerSession::new(
            Store::at(obs_path),
            Store::at(completeness_path),
            selected_max,
            Theme::default(),
        )
        .unwrap()
    }

    #[test]
    fn startup_fails_without_catalog() {
        let dir = TempDir::new().unwrap();
        let empty_path = dir.path().join("empty.db");
        StoreBuilder::create(&empty_path).unwrap();
        let err = ExplorerSession::new(
            Store::at(&empty_path),
            Store::at(&empty_path),
            10,
            Theme::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ChartError::Store(StoreError::MissingMetadata)
        ));
    }

    #[test]
    fn show_resolves_truncates_and_writes_back() {
        let dir = TempDir::new().unwrap();
        let mut session = sample_session(&dir, 1);
        session.on_dropdown_change(vec![96783, 96001]);
        session.on_show_clicked().unwrap();
        assert_eq!(session.dropdown_value(), &[96783]);

        let (series, matrix) = session.assembled().unwrap();
        assert_eq!(series.series.len(), 1);
        assert_eq!(series.series[0].label, "96783 - Bandung");
        assert_eq!(matrix.station_ids, vec![96783]);
    }

    #[test]
    fn map_selection_wins_over_stale_dropdown() {
        let dir = TempDir::new().unwrap();
        let mut session = sample_session(&dir, 10);
        session.on_dropdown_change(vec![96001]);
        session.on_map_select(vec![96783]);
        session.on_show_clicked().unwrap();
        let (series, _) = session.assembled().unwrap();
        assert_eq!(series.series[0].station_id, 96783);
    }

    #[test]
    fn failed_show_keeps_previous_chart_data() {
        let dir = TempDir::new().unwrap();
        let mut session = sample_session(&dir, 10);
        session.on_dropdown_change(vec![96783]);
        session.on_show_clicked().unwrap();

        // 96001 has observations but no completeness rows.
        session.on_dropdown_change(vec![96001]);
        let err = session.on_show_clicked().unwrap_err();
        assert!(matches!(
            err,
            ChartError::Store(StoreError::StationNotFound(96001))
        ));

        let (series, _) = session.assembled().unwrap();
        assert_eq!(
            series.series[0].station_id, 96783,
            "previous chart data must survive a failed show"
        );
    }

    #[test]
    fn empty_selection_still_shows() {
        let dir = TempDir::new().unwrap();
        let mut session = sample_session(&dir, 10);
        session.on_show_clicked().unwrap();
        let (series, matrix) = session.assembled().unwrap();
        assert!(series.series.is_empty());
        assert!(matrix.station_ids.is_empty());
    }

    #[test]
    fn parameter_change_applies_to_the_next_show() {
        let dir = TempDir::new().unwrap();
        let mut session = sample_session(&dir, 10);
        session.on_dropdown_change(vec![96783]);
        session.on_parameter_change(Parameter::Tavg);
        session.on_show_clicked().unwrap();
        let (series, matrix) = session.assembled().unwrap();
        assert_eq!(series.parameter, Parameter::Tavg);
        assert_eq!(matrix.parameter, Parameter::Tavg);
    }

    #[test]
    fn dropdown_options_follow_catalog_order() {
        let dir = TempDir::new().unwrap();
        let session = sample_session(&dir, 10);
        let options = session.dropdown_options();
        assert_eq!(options[0], (96001, "96001 - Maimun Saleh".to_string()));
        assert_eq!(options[1], (96783, "96783 - Bandung".to_string()));
    }
}
