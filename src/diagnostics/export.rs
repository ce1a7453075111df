// SPDX-License-Identifier: MPL-2.0
//! Plain-text report export.

use super::Collector;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DATA_DIR: &str = "WipeDeck";

/// Writes the collector's report into the user's data directory and returns
/// the file path. Falls back to the current directory when no platform data
/// directory is available.
pub fn export_report(collector: &Collector) -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .map(|dir| dir.join(APP_DATA_DIR))
        .unwrap_or_else(|| PathBuf::from("."));
    export_report_to(collector, &dir)
}

/// Writes the report into `dir`, creating it if needed.
pub fn export_report_to(collector: &Collector, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let filename = format!(
        "wipedeck-diagnostics-{}.txt",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    );
    let path = dir.join(filename);
    fs::write(&path, collector.report())?;
    Ok(path)
}
