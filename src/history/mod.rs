// Bounded, file-backed command history
//
// In-memory the store is unbounded and ordered oldest-first; the size bound
// applies on save, using the path and bound configured at save time. Load
// and save are best-effort: a missing file is an empty history, and a
// permission problem is a warning, never a session-ending error.

use std::fs;
use std::io;
use std::sync::Arc;

use crate::env::Env;

pub struct HistoryStore {
    env: Arc<Env>,
    entries: Vec<String>,
    saved: bool,
}

impl HistoryStore {
    /// Loads past entries from the configured history file. Missing file
    /// means an empty history; any other read failure is reported once and
    /// the session starts empty.
    pub fn open(env: Arc<Env>) -> Self {
        let path = env.history_file();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => contents.lines().map(str::to_string).collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!("cannot read history file {}: {}", path.display(), e);
                Vec::new()
            }
        };
        Self {
            env,
            entries,
            saved: false,
        }
    }

    /// Appends one accepted line. No deduplication and no bound here; the
    /// bound is applied on save.
    pub fn append(&mut self, line: &str) {
        self.entries.push(line.to_string());
    }

    /// Oldest-first view of the session's history.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the most recent `HISTORY_SIZE` entries to `HISTORY_FILE`,
    /// both read from the environment now, not at load time. Saves at most
    /// once; later calls (including the drop fallback) are no-ops.
    pub fn close(&mut self) {
        if self.saved {
            return;
        }
        self.saved = true;

        let path = self.env.history_file();
        let max_size = self.env.history_size();
        let start = self.entries.len().saturating_sub(max_size);
        let mut contents = self.entries[start..].join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(e) = fs::write(&path, contents) {
            tracing::warn!("cannot write history file {}: {}", path.display(), e);
        }
    }
}

impl Drop for HistoryStore {
    fn drop(&mut self) {
        // Fallback for teardown paths that never reached an explicit close.
        self.close();
    }
}
