//! Exported analysis reports

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use trichoscan_core::prelude::*;
use trichoscan_core::HairAnalysis;

const REPORT_ID_LEN: usize = 9;
const REPORT_ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a report id: 9 random upper-case base-36 characters
pub fn generate_report_id() -> String {
    let mut rng = rand::thread_rng();
    (0..REPORT_ID_LEN)
        .map(|_| REPORT_ID_ALPHABET[rng.gen_range(0..REPORT_ID_ALPHABET.len())] as char)
        .collect()
}

/// A completed analysis as written to disk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub report_id: String,
    pub generated_at: DateTime<Utc>,
    pub image_mime: String,
    /// Size of the analyzed image file
    pub image_bytes: usize,
    pub analysis: HairAnalysis,
}

impl AnalysisReport {
    pub fn file_name(&self) -> String {
        format!("trichoscan-{}.json", self.report_id)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write `report` as pretty JSON into `dir`, creating it if needed
pub async fn write_report(dir: &Path, report: &AnalysisReport) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create reports directory {:?}", dir))?;
    let path = dir.join(report.file_name());
    tokio::fs::write(&path, report.to_json()?)
        .await
        .with_context(|| format!("Failed to write report {:?}", path))?;
    Ok(path)
}
