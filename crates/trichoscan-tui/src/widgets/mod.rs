//! Custom widget components

mod dashboard;
mod failure;
mod header;
mod notice;
mod scanner;
mod upload;

pub use dashboard::{metric_bar, ResultsDashboard};
pub use failure::FailurePanel;
pub use header::MainHeader;
pub use notice::NoticeBar;
pub use scanner::ScannerPanel;
pub use upload::UploadPanel;
