// Session configuration store
//
// Process-wide, read-mostly view of the shell's tunables. Every lookup goes
// through `get` or a typed accessor, so a value changed mid-session (by an
// executed command or the launcher) is visible on the next loop iteration.
// The engine only reads; writes come from outside.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

pub mod loader;

pub use loader::load_env;

pub const HISTORY_FILE: &str = "HISTORY_FILE";
pub const HISTORY_SIZE: &str = "HISTORY_SIZE";
pub const MOUSE_SUPPORT: &str = "MOUSE_SUPPORT";
pub const AUTO_SUGGEST: &str = "AUTO_SUGGEST";
pub const STYLE_OVERRIDES: &str = "STYLE_OVERRIDES";

/// Number of history entries kept on disk when nothing else is configured.
const DEFAULT_HISTORY_SIZE: usize = 8128;

#[derive(Debug, Clone, PartialEq)]
pub enum EnvValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Map(HashMap<String, String>),
}

/// The shell's configuration store plus the process-wide exit flag.
pub struct Env {
    vars: RwLock<HashMap<String, EnvValue>>,
    exit_requested: AtomicBool,
}

impl Env {
    /// Empty store with built-in defaults for the keys the session reads.
    pub fn with_defaults() -> Self {
        let mut vars = HashMap::new();
        vars.insert(
            HISTORY_FILE.to_string(),
            EnvValue::Str(default_history_file().to_string_lossy().into_owned()),
        );
        vars.insert(
            HISTORY_SIZE.to_string(),
            EnvValue::Int(DEFAULT_HISTORY_SIZE as i64),
        );
        vars.insert(MOUSE_SUPPORT.to_string(), EnvValue::Bool(false));
        vars.insert(AUTO_SUGGEST.to_string(), EnvValue::Bool(true));
        Self {
            vars: RwLock::new(vars),
            exit_requested: AtomicBool::new(false),
        }
    }

    /// Live lookup; no caching anywhere above this call.
    pub fn get(&self, key: &str) -> Option<EnvValue> {
        self.vars
            .read()
            .expect("env lock poisoned")
            .get(key)
            .cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: EnvValue) {
        self.vars
            .write()
            .expect("env lock poisoned")
            .insert(key.into(), value);
    }

    pub fn unset(&self, key: &str) {
        self.vars.write().expect("env lock poisoned").remove(key);
    }

    pub fn history_file(&self) -> PathBuf {
        match self.get(HISTORY_FILE) {
            Some(EnvValue::Str(s)) => PathBuf::from(s),
            _ => default_history_file(),
        }
    }

    pub fn history_size(&self) -> usize {
        match self.get(HISTORY_SIZE) {
            Some(EnvValue::Int(n)) if n >= 0 => n as usize,
            _ => DEFAULT_HISTORY_SIZE,
        }
    }

    pub fn mouse_support(&self) -> bool {
        matches!(self.get(MOUSE_SUPPORT), Some(EnvValue::Bool(true)))
    }

    pub fn auto_suggest(&self) -> bool {
        // Defaults to on; only an explicit false disables it.
        !matches!(self.get(AUTO_SUGGEST), Some(EnvValue::Bool(false)))
    }

    /// User style overrides, or `None` when not configured.
    pub fn style_overrides(&self) -> Option<HashMap<String, String>> {
        match self.get(STYLE_OVERRIDES) {
            Some(EnvValue::Map(m)) => Some(m),
            _ => None,
        }
    }

    /// Asks the session loop to stop before its next iteration. Typically
    /// set by an executed command (`exit`).
    pub fn request_exit(&self) {
        self.exit_requested.store(true, Ordering::SeqCst);
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested.load(Ordering::SeqCst)
    }
}

fn default_history_file() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".wren_history"))
        .unwrap_or_else(|| PathBuf::from(".wren_history"))
}
