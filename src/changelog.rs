//! Change-log sink for audit trails.
//!
//! Every create/update/delete performed through a DAO emits a
//! (category, message) pair describing the semantic effect ("Rename field
//! from X to Y"). The sink is a trait so the application can route entries
//! wherever it wants; emission never fails and never affects the calling
//! operation.

use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tracing::info;

/// Kind of change being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCategory {
    Create,
    Update,
    Delete,
}

impl ChangeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeCategory::Create => "Create",
            ChangeCategory::Update => "Update",
            ChangeCategory::Delete => "Delete",
        }
    }
}

impl fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink receiving one entry per semantic change.
pub trait ChangeLog: Send + Sync {
    fn change(&self, category: ChangeCategory, message: &str);
}

/// Change log that emits entries through `tracing` under the `changelog`
/// target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingChangeLog;

impl ChangeLog for TracingChangeLog {
    fn change(&self, category: ChangeCategory, message: &str) {
        info!(target: "changelog", category = category.as_str(), "{message}");
    }
}

/// One recorded change entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub at: DateTime<Utc>,
    pub category: ChangeCategory,
    pub message: String,
}

/// In-memory change log, useful for showing a session's audit trail in the
/// UI and for asserting on messages in tests.
#[derive(Debug, Default)]
pub struct MemoryChangeLog {
    entries: Mutex<Vec<ChangeEntry>>,
}

impl MemoryChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries recorded so far.
    pub fn entries(&self) -> Vec<ChangeEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl ChangeLog for MemoryChangeLog {
    fn change(&self, category: ChangeCategory, message: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.push(ChangeEntry {
            at: Utc::now(),
            category,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use super::*;

    /// Shared buffer the fmt subscriber writes into.
    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl CaptureWriter {
        fn contents(&self) -> String {
            let bytes = self.0.lock().unwrap_or_else(|e| e.into_inner()).clone();
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn tracing_log_emits_under_changelog_target() {
        let writer = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter("changelog=info")
            .with_writer(writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingChangeLog.change(ChangeCategory::Update, "Rename field from A to B");
        });

        let output = writer.contents();
        assert!(output.contains("changelog"));
        assert!(output.contains("Rename field from A to B"));
        assert!(output.contains("Update"));
    }

    #[test]
    fn memory_log_records_in_order() {
        let log = MemoryChangeLog::new();
        log.change(ChangeCategory::Create, "Add new field Biology");
        log.change(ChangeCategory::Delete, "Delete field Biology");

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].category, ChangeCategory::Create);
        assert_eq!(entries[1].message, "Delete field Biology");
    }
}
