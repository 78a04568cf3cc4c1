// Default completion provider: command names from $PATH for the first
// word, filesystem paths afterwards. Candidates are collected and sorted
// up front; the sequence handed back is finite and ordered.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::{Candidate, CompletionBridge, CompletionProvider};

pub struct PathScanCompleter;

impl PathScanCompleter {
    pub fn new() -> Self {
        Self
    }

    fn command_candidates(prefix: &str) -> Vec<Candidate> {
        // First dir on PATH wins for a duplicated name.
        let mut seen: BTreeMap<String, String> = BTreeMap::new();
        let path_var = std::env::var_os("PATH").unwrap_or_default();
        for dir in std::env::split_paths(&path_var) {
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let Ok(name) = entry.file_name().into_string() else {
                    continue;
                };
                if !name.starts_with(prefix) || !is_executable(&entry.path()) {
                    continue;
                }
                seen.entry(name)
                    .or_insert_with(|| dir.display().to_string());
            }
        }
        seen.into_iter()
            .map(|(name, dir)| Candidate::new(name).with_meta(dir))
            .collect()
    }

    fn path_candidates(word: &str) -> Vec<Candidate> {
        let (dir_part, file_prefix) = match word.rfind('/') {
            Some(i) => (&word[..=i], &word[i + 1..]),
            None => ("", word),
        };
        let list_dir = if dir_part.is_empty() { "." } else { dir_part };
        let Ok(entries) = fs::read_dir(list_dir) else {
            return Vec::new();
        };
        let mut candidates: Vec<Candidate> = entries
            .flatten()
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                if !name.starts_with(file_prefix) {
                    return None;
                }
                let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                let text = if is_dir {
                    format!("{dir_part}{name}/")
                } else {
                    format!("{dir_part}{name}")
                };
                let meta = if is_dir { "dir" } else { "file" };
                Some(Candidate::new(text).with_display(name).with_meta(meta))
            })
            .collect();
        candidates.sort_by(|a, b| a.text.cmp(&b.text));
        candidates
    }
}

impl Default for PathScanCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionProvider for PathScanCompleter {
    fn complete<'a>(
        &'a self,
        buffer: &str,
        cursor: usize,
    ) -> Box<dyn Iterator<Item = Candidate> + 'a> {
        let start = CompletionBridge::word_start(buffer, cursor);
        let word = &buffer[start..cursor.min(buffer.len())];
        let candidates = if start == 0 && !word.contains('/') {
            Self::command_candidates(word)
        } else {
            Self::path_candidates(word)
        };
        Box::new(candidates.into_iter())
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
