// Completion: generic provider trait and the widget-facing bridge
//
// Providers speak (buffer text, cursor offset) and answer with an ordered,
// finite, lazy sequence of candidates. The bridge adapts that to the menu
// convention the editing widget wants, without filtering or re-ranking;
// consuming only a prefix of the bridge's output pulls only that prefix
// from the provider.

mod path_scan;

pub use path_scan::PathScanCompleter;

/// One completion candidate as a provider produces it. `display` is the
/// short menu label (candidate text when absent); `meta` is a longer
/// description shown alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub text: String,
    pub display: Option<String>,
    pub meta: Option<String>,
}

impl Candidate {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            display: None,
            meta: None,
        }
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }
}

pub trait CompletionProvider {
    /// Candidates for the word under the cursor, in the provider's order.
    fn complete<'a>(&'a self, buffer: &str, cursor: usize) -> Box<dyn Iterator<Item = Candidate> + 'a>;
}

/// What the editing widget's menu consumes for one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub replacement: String,
    pub display: String,
    pub meta: Option<String>,
}

/// Adapter between a `CompletionProvider` and the editing widget.
pub struct CompletionBridge {
    provider: Box<dyn CompletionProvider>,
}

impl CompletionBridge {
    pub fn new(provider: Box<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Byte offset where the word being completed starts: just past the
    /// last whitespace before the cursor, or 0.
    pub fn word_start(buffer: &str, cursor: usize) -> usize {
        let cursor = cursor.min(buffer.len());
        buffer[..cursor]
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0)
    }

    /// Lazily maps the provider's candidates into menu entries, order
    /// untouched.
    pub fn entries<'a>(
        &'a self,
        buffer: &str,
        cursor: usize,
    ) -> impl Iterator<Item = MenuEntry> + 'a {
        self.provider.complete(buffer, cursor).map(|candidate| {
            let display = candidate
                .display
                .unwrap_or_else(|| candidate.text.clone());
            MenuEntry {
                replacement: candidate.text,
                display,
                meta: candidate.meta,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Yields fixed candidates, counting how many have been pulled.
    struct CountingProvider {
        candidates: Vec<Candidate>,
        pulled: Rc<Cell<usize>>,
    }

    impl CompletionProvider for CountingProvider {
        fn complete<'a>(
            &'a self,
            _buffer: &str,
            _cursor: usize,
        ) -> Box<dyn Iterator<Item = Candidate> + 'a> {
            let pulled = Rc::clone(&self.pulled);
            Box::new(self.candidates.iter().cloned().map(move |c| {
                pulled.set(pulled.get() + 1);
                c
            }))
        }
    }

    fn bridge_over(words: &[&str]) -> (CompletionBridge, Rc<Cell<usize>>) {
        let pulled = Rc::new(Cell::new(0));
        let provider = CountingProvider {
            candidates: words.iter().map(|w| Candidate::new(*w)).collect(),
            pulled: Rc::clone(&pulled),
        };
        (CompletionBridge::new(Box::new(provider)), pulled)
    }

    #[test]
    fn test_order_preserved_unfiltered() {
        let (bridge, _) = bridge_over(&["echo", "export"]);
        let entries: Vec<MenuEntry> = bridge.entries("ec", 2).collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].replacement, "echo");
        assert_eq!(entries[1].replacement, "export");
    }

    #[test]
    fn test_prefix_consumption_is_lazy() {
        let (bridge, pulled) = bridge_over(&["echo", "export"]);
        let mut entries = bridge.entries("ec", 2);
        let first = entries.next().unwrap();
        assert_eq!(first.replacement, "echo");
        assert_eq!(pulled.get(), 1);
    }

    #[test]
    fn test_display_falls_back_to_text() {
        let pulled = Rc::new(Cell::new(0));
        let provider = CountingProvider {
            candidates: vec![
                Candidate::new("ls").with_meta("/bin"),
                Candidate::new("cargo").with_display("cargo (build tool)"),
            ],
            pulled,
        };
        let bridge = CompletionBridge::new(Box::new(provider));
        let entries: Vec<MenuEntry> = bridge.entries("", 0).collect();
        assert_eq!(entries[0].display, "ls");
        assert_eq!(entries[0].meta.as_deref(), Some("/bin"));
        assert_eq!(entries[1].display, "cargo (build tool)");
        assert_eq!(entries[1].meta, None);
    }

    #[test]
    fn test_word_start() {
        assert_eq!(CompletionBridge::word_start("ec", 2), 0);
        assert_eq!(CompletionBridge::word_start("ls src", 6), 3);
        assert_eq!(CompletionBridge::word_start("ls  ", 4), 4);
        assert_eq!(CompletionBridge::word_start("ls src/main", 5), 3);
        // Cursor in the middle completes the word up to the cursor.
        assert_eq!(CompletionBridge::word_start("git status", 3), 0);
    }
}
