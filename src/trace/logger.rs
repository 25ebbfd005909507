use std::{fs::OpenOptions, io::Write, path::Path, sync::Mutex};

use crate::trace::trace::IngestEvent;

/// Append-only JSONL log of ingest outcomes.
///
/// Logging never interferes with ingestion: a log file that cannot be opened
/// or written degrades to a stderr warning, it does not fail the upload.
pub struct IngestLogger {
    file: Option<Mutex<std::fs::File>>,
}

impl IngestLogger {
    pub fn new(path: &Path) -> Self {
        if let Some(parent) = path.parent() {
            // Best effort; open() below reports the real failure.
            let _ = std::fs::create_dir_all(parent);
        }

        let file = OpenOptions::new().create(true).append(true).open(path);

        match file {
            Ok(f) => Self {
                file: Some(Mutex::new(f)),
            },
            Err(e) => {
                eprintln!(
                    "Warning: could not open ingest log '{}': {}",
                    path.display(),
                    e
                );
                Self { file: None }
            }
        }
    }

    /// A logger that drops every event.
    pub fn disabled() -> Self {
        Self { file: None }
    }

    pub fn log(&self, event: &IngestEvent) {
        let file_mutex = match &self.file {
            Some(f) => f,
            None => return, // logging disabled
        };

        let json = match serde_json::to_string(event) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Warning: failed to serialize ingest event: {}", e);
                return;
            }
        };

        let mut file = match file_mutex.lock() {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Warning: ingest log lock poisoned: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(file, "{}", json) {
            eprintln!("Warning: failed to write ingest event: {}", e);
        }
    }
}
