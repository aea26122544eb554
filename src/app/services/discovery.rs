//! Station file discovery
//!
//! Scans the workspace directory (non-recursive) for files matching the
//! `*_Chuvas.csv` pattern and derives station names from the file names.
//! Failure to enumerate the workspace is the one fatal error class in
//! the pipeline.

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::app::models::Station;
use crate::{Error, Result};

/// Discover all station files in the workspace, sorted by station name
/// so menu indices stay stable between runs
pub async fn discover_stations(workspace: &Path) -> Result<Vec<Station>> {
    if !workspace.is_dir() {
        return Err(Error::workspace_not_found(workspace));
    }

    debug!("Scanning workspace for station files: {}", workspace.display());

    let mut stations = Vec::new();
    let mut dir = fs::read_dir(workspace)
        .await
        .map_err(|e| Error::io(format!("Failed to read workspace {}", workspace.display()), e))?;

    while let Some(entry) = dir.next_entry().await? {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        if let Some(station) = Station::from_path(&path) {
            debug!("Discovered station '{}' at {}", station.name, path.display());
            stations.push(station);
        }
    }

    stations.sort_by(|a, b| a.name.cmp(&b.name));

    debug!("Found {} station files", stations.len());
    Ok(stations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        File::create(dir.path().join(name)).unwrap();
    }

    #[tokio::test]
    async fn test_discovers_only_station_files() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "02043032_Chuvas.csv");
        touch(&dir, "01944009_Chuvas.csv");
        touch(&dir, "estacoes_rj.csv");
        touch(&dir, "notes.txt");

        let stations = discover_stations(dir.path()).await.unwrap();

        let names: Vec<&str> = stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["01944009", "02043032"]);
    }

    #[tokio::test]
    async fn test_sorted_by_station_name() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "C_Chuvas.csv");
        touch(&dir, "A_Chuvas.csv");
        touch(&dir, "B_Chuvas.csv");

        let stations = discover_stations(dir.path()).await.unwrap();
        let names: Vec<&str> = stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_empty_workspace_is_ok_here() {
        let dir = TempDir::new().unwrap();
        let stations = discover_stations(dir.path()).await.unwrap();
        assert!(stations.is_empty());
    }

    #[tokio::test]
    async fn test_missing_workspace_is_fatal() {
        let result = discover_stations(Path::new("/nonexistent/workspace")).await;
        assert!(matches!(result, Err(Error::WorkspaceNotFound { .. })));
    }

    #[tokio::test]
    async fn test_subdirectories_are_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("sub_Chuvas.csv")).unwrap();
        touch(&dir, "A_Chuvas.csv");

        let stations = discover_stations(dir.path()).await.unwrap();
        let names: Vec<&str> = stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A"]);
    }
}
