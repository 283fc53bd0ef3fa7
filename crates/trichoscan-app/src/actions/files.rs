//! File tasks: reading a selected image and exporting reports

use std::path::PathBuf;

use tokio::sync::mpsc;
use trichoscan_core::prelude::*;

use crate::message::Message;
use crate::report::{write_report, AnalysisReport};

/// Read `path` and submit its bytes, or report it unreadable
pub fn spawn_read_image_file(msg_tx: mpsc::Sender<Message>, path: PathBuf) {
    tokio::spawn(async move {
        let msg = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                debug!("Read {} bytes from {:?}", bytes.len(), path);
                Message::SubmitImage { bytes: Some(bytes) }
            }
            Err(e) => Message::ImageFileUnreadable {
                path,
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

/// Write `report` into `dir` and answer with the outcome
pub fn spawn_export_report(msg_tx: mpsc::Sender<Message>, report: AnalysisReport, dir: PathBuf) {
    tokio::spawn(async move {
        let msg = match write_report(&dir, &report).await {
            Ok(path) => Message::ReportExported { path },
            Err(e) => Message::ReportExportFailed {
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use trichoscan_core::encoded_image::test_support;

    #[tokio::test]
    async fn test_read_existing_file_submits_bytes() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("scalp.png");
        let bytes = test_support::png(3, 3);
        std::fs::write(&path, &bytes).unwrap();
        let (tx, mut rx) = mpsc::channel(4);

        spawn_read_image_file(tx, path);

        match rx.recv().await.unwrap() {
            Message::SubmitImage { bytes: Some(read) } => assert_eq!(read, bytes),
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_missing_file_reports_unreadable() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing.png");
        let (tx, mut rx) = mpsc::channel(4);

        spawn_read_image_file(tx, path.clone());

        match rx.recv().await.unwrap() {
            Message::ImageFileUnreadable { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_export_into_file_path_fails() {
        let temp = tempfile::tempdir().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();
        let report = AnalysisReport {
            report_id: "ZZZZZZZZZ".into(),
            generated_at: chrono::Utc::now(),
            image_mime: "image/png".into(),
            image_bytes: 0,
            analysis: trichoscan_vision::test_utils::sample_analysis(),
        };
        let (tx, mut rx) = mpsc::channel(4);

        spawn_export_report(tx, report, blocker.join("reports"));

        assert!(matches!(
            rx.recv().await.unwrap(),
            Message::ReportExportFailed { .. }
        ));
    }
}
