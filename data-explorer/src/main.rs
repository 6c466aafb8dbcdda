//! BMKG Data Explorer.
//!
//! Renders the station dashboard — map, time-series chart and completeness
//! heatmap — as a self-contained HTML page from two local store files. The
//! selection and parameter picked on the command line flow through the same
//! event path an interactive frontend would use.

use anyhow::Context;
use bde_charts::{ExplorerSession, Theme};
use bde_data::Parameter;
use bde_db::Store;
use clap::Parser;
use std::path::PathBuf;

mod export;
mod page;

#[derive(Parser)]
#[command(
    name = "data-explorer",
    version,
    about = "BMKG weather station data explorer"
)]
struct Cli {
    /// Observation store file
    #[arg(long, value_name = "FILE")]
    observations: PathBuf,

    /// Completeness store file
    #[arg(long, value_name = "FILE")]
    completeness: PathBuf,

    /// Station to chart; repeat for multiple stations
    #[arg(long = "station", value_name = "ID", default_values_t = vec![96783_i64])]
    stations: Vec<i64>,

    /// Parameter code (Tn, Tx, Tavg, RH_avg, RR, ss, ff_x, ddd_x, ff_avg, ddd_car)
    #[arg(long, default_value = "RR")]
    parameter: String,

    /// Maximum number of stations per chart
    #[arg(long, default_value_t = 10)]
    selected_max: usize,

    /// Theme preset (sketchy, flatly, darkly)
    #[arg(long, default_value = "sketchy")]
    theme: String,

    /// Output HTML file
    #[arg(long, default_value = "dashboard.html")]
    out: PathBuf,

    /// Also export the assembled chart data as CSV into this directory
    #[arg(long, value_name = "DIR")]
    export_csv: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let parameter: Parameter = cli
        .parameter
        .parse()
        .context("unknown parameter code, see --help for the valid codes")?;
    let theme = Theme::preset(&cli.theme)?;

    let mut session = ExplorerSession::new(
        Store::at(&cli.observations),
        Store::at(&cli.completeness),
        cli.selected_max,
        theme,
    )
    .context("failed to start explorer session")?;

    session.on_parameter_change(parameter);
    session.on_dropdown_change(cli.stations.clone());
    session
        .on_show_clicked()
        .context("failed to build charts")?;

    let html = page::render(&session);
    std::fs::write(&cli.out, html)
        .with_context(|| format!("failed to write {}", cli.out.display()))?;
    log::info!("dashboard written to {}", cli.out.display());

    if let Some(dir) = &cli.export_csv {
        if let Some((series, matrix)) = session.assembled() {
            let written = export::write_series_csv(dir, series)?;
            log::info!("exported {}", written.display());
            let written = export::write_matrix_csv(dir, matrix)?;
            log::info!("exported {}", written.display());
        }
    }

    Ok(())
}
