//! Headless mode runner - one scan, events to stdout
//!
//! Submits the image, forwards every engine event as NDJSON and stops once
//! the scan settles or the image is rejected.

use std::path::PathBuf;

use tokio::sync::broadcast::{self, error::TryRecvError};

use trichoscan_app::{Engine, EngineEvent, Message, Settings};
use trichoscan_core::prelude::*;
use trichoscan_core::ScanPhase;

use super::HeadlessEvent;

/// How a headless run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessOutcome {
    /// Analysis produced a result
    Completed,
    /// Analysis failed
    Failed,
    /// The image was never accepted (unreadable, wrong type, undecodable)
    Rejected,
    /// Quit requested or the message channel closed
    Interrupted,
}

impl HeadlessOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            HeadlessOutcome::Completed => 0,
            HeadlessOutcome::Failed | HeadlessOutcome::Rejected => 1,
            HeadlessOutcome::Interrupted => 130,
        }
    }
}

/// Run in headless mode and return the process exit code
pub async fn run_headless(settings: Settings, image: PathBuf) -> Result<i32> {
    info!("TrichoScan starting in HEADLESS mode for {}", image.display());

    let mut engine = Engine::new(settings);
    let outcome = drive(&mut engine, image, &mut |event: HeadlessEvent| event.emit()).await;
    engine.shutdown();

    info!("Headless run finished: {:?}", outcome);
    Ok(outcome.exit_code())
}

/// Submit `image` and process messages until the scan settles.
///
/// Every engine event is handed to `sink` in order.
pub async fn drive(
    engine: &mut Engine,
    image: PathBuf,
    sink: &mut dyn FnMut(HeadlessEvent),
) -> HeadlessOutcome {
    let mut events = engine.subscribe();

    engine.process_message(Message::OpenImageFile { path: image });

    loop {
        forward_events(&mut events, sink);

        if let Some(outcome) = settled(engine) {
            if outcome == HeadlessOutcome::Rejected {
                let reason = engine
                    .state
                    .notice
                    .clone()
                    .unwrap_or_else(|| "image rejected".to_string());
                sink(HeadlessEvent::error(reason, true));
            }
            return outcome;
        }

        match engine.msg_rx.recv().await {
            Some(msg) => engine.process_message(msg),
            None => {
                warn!("Message channel closed");
                sink(HeadlessEvent::error("message channel closed".into(), true));
                return HeadlessOutcome::Interrupted;
            }
        }
    }
}

fn settled(engine: &Engine) -> Option<HeadlessOutcome> {
    if engine.should_quit() {
        return Some(HeadlessOutcome::Interrupted);
    }
    match engine.state.phase {
        ScanPhase::Results => Some(HeadlessOutcome::Completed),
        ScanPhase::Error => Some(HeadlessOutcome::Failed),
        ScanPhase::Idle if engine.state.notice.is_some() => Some(HeadlessOutcome::Rejected),
        _ => None,
    }
}

fn forward_events(
    events: &mut broadcast::Receiver<EngineEvent>,
    sink: &mut dyn FnMut(HeadlessEvent),
) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) = HeadlessEvent::from_engine_event(&event) {
                    sink(headless);
                }
            }
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} event(s)", skipped);
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use trichoscan_core::encoded_image::test_support;
    use trichoscan_vision::test_utils::{sample_analysis, ScriptedClient};

    fn engine_with(client: ScriptedClient) -> Engine {
        Engine::with_client(Settings::default(), Arc::new(client))
    }

    fn write_png(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("crown.png");
        std::fs::write(&path, test_support::png(32, 24)).unwrap();
        path
    }

    async fn run(engine: &mut Engine, image: PathBuf) -> (HeadlessOutcome, Vec<HeadlessEvent>) {
        let mut seen = Vec::new();
        let outcome = drive(engine, image, &mut |event: HeadlessEvent| seen.push(event)).await;
        (outcome, seen)
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_run_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine_with(ScriptedClient::succeeding(sample_analysis()));

        let (outcome, events) = run(&mut engine, write_png(&dir)).await;

        assert_eq!(outcome, HeadlessOutcome::Completed);
        assert_eq!(outcome.exit_code(), 0);
        let types: Vec<_> = events.iter().map(|e| e.event_type()).collect();
        assert_eq!(
            types,
            [
                "phase_changed",
                "image_accepted",
                "phase_changed",
                "phase_changed",
                "analysis_completed"
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_analysis_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine_with(ScriptedClient::failing("HTTP 500"));

        let (outcome, events) = run(&mut engine, write_png(&dir)).await;

        assert_eq!(outcome, HeadlessOutcome::Failed);
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(events.last().unwrap().event_type(), "analysis_failed");
    }

    #[tokio::test]
    async fn test_missing_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine_with(ScriptedClient::new());

        let (outcome, events) = run(&mut engine, dir.path().join("absent.png")).await;

        assert_eq!(outcome, HeadlessOutcome::Rejected);
        let types: Vec<_> = events.iter().map(|e| e.event_type()).collect();
        assert_eq!(types, ["notice", "error"]);
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let client = ScriptedClient::new();
        let mut engine = engine_with(client.clone());

        let (outcome, _) = run(&mut engine, dir.path().join("notes.txt")).await;

        assert_eq!(outcome, HeadlessOutcome::Rejected);
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_undecodable_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not really a png").unwrap();
        let mut engine = engine_with(ScriptedClient::new());

        let (outcome, _) = run(&mut engine, path).await;

        assert_eq!(outcome, HeadlessOutcome::Rejected);
        assert_eq!(engine.state.phase, ScanPhase::Idle);
    }
}
