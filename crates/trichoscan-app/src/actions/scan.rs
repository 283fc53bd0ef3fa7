//! Scan tasks: dwell timer and analysis call

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use trichoscan_core::prelude::*;
use trichoscan_core::{EncodedImage, ScanToken};
use trichoscan_vision::SharedAnalysisClient;

use crate::message::Message;

/// Send `ScanTimerElapsed { token }` after `dwell`
pub fn spawn_scan_timer(
    msg_tx: mpsc::Sender<Message>,
    token: ScanToken,
    dwell: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(dwell).await;
        debug!("Dwell elapsed for {}", token);
        let _ = msg_tx.send(Message::ScanTimerElapsed { token }).await;
    })
}

/// Run the analysis client and send `AnalysisSettled` with its outcome
pub fn spawn_analysis(
    msg_tx: mpsc::Sender<Message>,
    client: SharedAnalysisClient,
    token: ScanToken,
    image: EncodedImage,
    timeout: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Requesting analysis for {} from {}", token, client.name());

        let outcome = match tokio::time::timeout(timeout, client.analyze(image)).await {
            Ok(Ok(analysis)) => Ok(analysis),
            Ok(Err(e)) => Err(e.to_string()),
            Err(_) => Err(Error::analysis(format!(
                "no response within {}s",
                timeout.as_secs()
            ))
            .to_string()),
        };

        if msg_tx
            .send(Message::AnalysisSettled { token, outcome })
            .await
            .is_err()
        {
            debug!("Message channel closed before {} settled", token);
        }
    })
}
