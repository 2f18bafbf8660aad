//! Persistence boundary for user feedback on shown recommendations.

use std::path::PathBuf;

use tokio::sync::Mutex;

use crate::{error::AppResult, models::FeedbackRecord};

/// Sink for feedback submissions
///
/// Appends are record-granular: one full record per write, never interleaved
/// or partial. Write failures surface to the caller but must never affect a
/// previously computed ranking.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FeedbackSink: Send + Sync {
    /// Appends one record to the log
    async fn append(&self, record: &FeedbackRecord) -> AppResult<()>;
}

/// CSV-file-backed feedback sink
///
/// The file is created with a header row on first write and appended without
/// header repetition afterwards. A mutex serializes appends so concurrent
/// submissions cannot interleave records.
pub struct CsvFeedbackSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvFeedbackSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait::async_trait]
impl FeedbackSink for CsvFeedbackSink {
    async fn append(&self, record: &FeedbackRecord) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let needs_header = !self.path.exists();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;

        tracing::info!(
            menu = %record.menu,
            restaurant = %record.restaurant,
            satisfaction = ?record.satisfaction,
            "Feedback recorded"
        );
        Ok(())
    }
}
