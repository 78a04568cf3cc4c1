// Session loop: one command line per iteration
//
// Reading -> Dispatch -> Reading, until end-of-input or the environment's
// exit flag. Prompt and styles are rebuilt every iteration (the working
// directory or the user's overrides may have changed), configuration flags
// are read live, and an accepted line lands in history before the next
// read starts so the very next auto-suggest pass can see it.

use anyhow::Result;
use std::sync::Arc;

use crate::complete::{CompletionBridge, CompletionProvider};
use crate::editor::{KeyBindings, LineEditor, ReadOutcome, ReadRequest};
use crate::env::Env;
use crate::history::HistoryStore;
use crate::prompt::PromptSource;
use crate::style;

/// Upstream consumer of accepted lines. May request session exit through
/// the environment.
pub trait Executor {
    fn execute(&mut self, line: &str) -> Result<()>;
}

pub struct Session<E, P, X>
where
    E: LineEditor,
    P: PromptSource,
    X: Executor,
{
    env: Arc<Env>,
    history: HistoryStore,
    completions: CompletionBridge,
    bindings: KeyBindings,
    editor: E,
    prompt: P,
    executor: X,
    intro_printed: bool,
}

impl<E, P, X> Session<E, P, X>
where
    E: LineEditor,
    P: PromptSource,
    X: Executor,
{
    /// Acquires the history store and completion bridge. `bindings` should
    /// already carry any user overlay; it is fixed for the session.
    pub fn new(
        env: Arc<Env>,
        provider: Box<dyn CompletionProvider>,
        bindings: KeyBindings,
        editor: E,
        prompt: P,
        executor: X,
    ) -> Self {
        let history = HistoryStore::open(Arc::clone(&env));
        Self {
            env,
            history,
            completions: CompletionBridge::new(provider),
            bindings,
            editor,
            prompt,
            executor,
            intro_printed: false,
        }
    }

    /// Reads and dispatches lines until end-of-input or an exit request,
    /// then saves history exactly once. An interrupt only discards the
    /// current buffer; any other editor or executor failure propagates
    /// (history still saves via the store's drop fallback).
    pub fn run(&mut self, intro: Option<&str>) -> Result<()> {
        if let Some(text) = intro {
            if !self.intro_printed {
                println!("{text}");
                self.intro_printed = true;
            }
        }

        while !self.env.exit_requested() {
            let prompt = self.prompt.current_prompt();
            let user_styles = self.env.style_overrides();
            let styles = style::resolve(&prompt, user_styles.as_ref());

            let outcome = self.editor.read_line(ReadRequest {
                prompt: &prompt,
                styles: &styles,
                history: self.history.entries(),
                completions: &self.completions,
                bindings: &self.bindings,
                auto_suggest: self.env.auto_suggest(),
                mouse_support: self.env.mouse_support(),
            })?;

            match outcome {
                ReadOutcome::Submitted(line) => {
                    if line.is_empty() {
                        self.on_empty_line();
                        continue;
                    }
                    let line = self.preprocess(line);
                    if line.is_empty() {
                        self.on_empty_line();
                        continue;
                    }
                    self.history.append(&line);
                    self.executor.execute(&line)?;
                }
                ReadOutcome::Interrupted => continue,
                ReadOutcome::EndOfInput => break,
            }
        }

        self.history.close();
        Ok(())
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Hook for a submitted empty line.
    fn on_empty_line(&mut self) {
        tracing::debug!("empty input line");
    }

    /// Pre-processing hook applied before history and dispatch.
    fn preprocess(&self, line: String) -> String {
        line.trim_end().to_string()
    }
}
