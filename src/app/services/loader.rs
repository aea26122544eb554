//! Workspace batch loader
//!
//! Orchestrates discovery and per-file parsing for the whole workspace.
//! Station files are independent, so parses run on a bounded concurrent
//! stream and results are merged only after each file completes. A file
//! that fails to parse is logged and excluded; the batch always carries
//! every station that parsed cleanly.

use futures::stream::{self, StreamExt};
use tokio::task;
use tracing::{info, warn};

use super::ana_csv_parser::{ParseStats, RecordParser};
use super::discovery;
use crate::app::models::{MonthlyTable, Station};
use crate::config::Config;
use crate::{Error, Result};

/// One successfully loaded station: its monthly table plus parse stats
#[derive(Debug, Clone)]
pub struct StationData {
    pub station: Station,
    pub table: MonthlyTable,
    pub stats: ParseStats,
}

/// Batch-level loading statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Station files discovered in the workspace
    pub files_discovered: usize,

    /// Files that parsed into a monthly table
    pub files_loaded: usize,

    /// Files excluded after a per-file error
    pub files_failed: usize,

    /// One message per excluded file, identifying it
    pub failures: Vec<String>,
}

/// Result of loading a workspace
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Loaded stations, sorted by station name
    pub stations: Vec<StationData>,

    /// Batch statistics
    pub stats: LoadStats,
}

impl LoadResult {
    /// Look up a loaded station by name
    pub fn station(&self, name: &str) -> Option<&StationData> {
        self.stations.iter().find(|s| s.station.name == name)
    }
}

/// Load every station file in the configured workspace.
///
/// Per-file failures are contained: the file is logged and skipped, and
/// the remaining stations still load. Only workspace-level failures (the
/// directory cannot be enumerated, or it holds no station files at all)
/// propagate.
pub async fn load_workspace(config: &Config) -> Result<LoadResult> {
    config.validate()?;

    let stations = discovery::discover_stations(&config.workspace).await?;
    if stations.is_empty() {
        return Err(Error::no_station_files(config.workspace.clone()));
    }

    info!(
        "Loading {} station files from {} ({} concurrent parses)",
        stations.len(),
        config.workspace.display(),
        config.parse_concurrency
    );

    let parser = RecordParser::new(config.start_date(), config.end_date());

    let mut stats = LoadStats {
        files_discovered: stations.len(),
        ..Default::default()
    };

    let mut parses = stream::iter(stations.into_iter().map(|station| {
        let path = station.path.clone();
        async move {
            let parsed = task::spawn_blocking(move || parser.parse_file(&path)).await;
            (station, parsed)
        }
    }))
    .buffer_unordered(config.parse_concurrency);

    let mut loaded = Vec::new();

    while let Some((station, parsed)) = parses.next().await {
        match parsed {
            Ok(Ok(result)) => {
                stats.files_loaded += 1;
                loaded.push(StationData {
                    station,
                    table: result.table,
                    stats: result.stats,
                });
            }
            Ok(Err(e)) => {
                warn!("Skipping station '{}': {}", station.name, e);
                stats.files_failed += 1;
                stats.failures.push(format!("{}: {}", station.name, e));
            }
            Err(join_error) => {
                warn!(
                    "Parse task for station '{}' did not complete: {}",
                    station.name, join_error
                );
                stats.files_failed += 1;
                stats
                    .failures
                    .push(format!("{}: parse task failed ({})", station.name, join_error));
            }
        }
    }

    // Completion order is nondeterministic under buffer_unordered
    loaded.sort_by(|a, b| a.station.name.cmp(&b.station.name));

    info!(
        "Loaded {} of {} station files ({} failed)",
        stats.files_loaded, stats.files_discovered, stats.files_failed
    );

    Ok(LoadResult {
        stations: loaded,
        stats,
    })
}
