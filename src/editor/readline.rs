// rustyline-backed LineEditor
//
// Builds a fresh editor per read so history, styles, and flags reflect the
// request exactly. Ctrl-C and Ctrl-D surface from rustyline as error
// variants; this adapter turns them back into values.

use anyhow::Result;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::{History, MemHistory};
use rustyline::validate::Validator;
use rustyline::{
    Cmd, CompletionType, Config, Context, Editor, EventHandler, KeyCode, KeyEvent, Modifiers,
};
use std::borrow::Cow;

use super::{EditAction, Key, LineEditor, ReadOutcome, ReadRequest};
use crate::complete::CompletionBridge;
use crate::style::ansi;

pub struct ReadlineEditor;

impl ReadlineEditor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReadlineEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl LineEditor for ReadlineEditor {
    fn read_line(&mut self, req: ReadRequest<'_>) -> Result<ReadOutcome> {
        let config = Config::builder()
            .auto_add_history(false)
            .completion_type(CompletionType::List)
            .build();

        let mut history = MemHistory::new();
        for line in req.history {
            let _ = history.add(line);
        }

        let mut editor: Editor<EditorHelper<'_>, MemHistory> =
            Editor::with_history(config, history)?;
        for binding in req.bindings.iter() {
            editor.bind_sequence(key_event(binding.key), EventHandler::Simple(cmd(binding.action)));
        }
        editor.set_helper(Some(EditorHelper {
            bridge: req.completions,
            history: req.history,
            auto_suggest: req.auto_suggest,
            prompt_ansi: render_prompt(&req),
            hint_style: req
                .styles
                .get("auto-suggestion")
                .map(|descriptor| ansi::escape(descriptor))
                .unwrap_or_default(),
        }));

        if req.mouse_support {
            // rustyline has no mouse mode; the flag stops at this boundary.
            tracing::debug!("mouse support requested but not provided by the line editor");
        }

        match editor.readline(&req.prompt.text()) {
            Ok(line) => Ok(ReadOutcome::Submitted(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::EndOfInput),
            Err(e) => Err(e.into()),
        }
    }
}

struct EditorHelper<'a> {
    bridge: &'a CompletionBridge,
    history: &'a [String],
    auto_suggest: bool,
    prompt_ansi: String,
    hint_style: String,
}

impl Completer for EditorHelper<'_> {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = CompletionBridge::word_start(line, pos);
        let pairs = self
            .bridge
            .entries(line, pos)
            .map(|entry| Pair {
                display: match entry.meta {
                    Some(meta) => format!("{}  ({})", entry.display, meta),
                    None => entry.display,
                },
                replacement: entry.replacement,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for EditorHelper<'_> {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if !self.auto_suggest || line.is_empty() || pos < line.len() {
            return None;
        }
        // Most recent matching history entry wins.
        self.history
            .iter()
            .rev()
            .find(|entry| entry.starts_with(line) && entry.len() > line.len())
            .map(|entry| entry[line.len()..].to_string())
    }
}

impl Highlighter for EditorHelper<'_> {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default && !self.prompt_ansi.is_empty() {
            Cow::Owned(self.prompt_ansi.clone())
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        if self.hint_style.is_empty() {
            Cow::Borrowed(hint)
        } else {
            Cow::Owned(format!("{}{}{}", self.hint_style, hint, ansi::reset()))
        }
    }
}

impl Validator for EditorHelper<'_> {}

impl rustyline::Helper for EditorHelper<'_> {}

fn render_prompt(req: &ReadRequest<'_>) -> String {
    let mut out = String::new();
    for segment in req.prompt.segments() {
        match req.styles.get(&segment.token).filter(|d| !d.is_empty()) {
            Some(descriptor) => {
                out.push_str(&ansi::escape(descriptor));
                out.push_str(&segment.text);
                out.push_str(&ansi::reset());
            }
            None => out.push_str(&segment.text),
        }
    }
    out
}

fn key_event(key: Key) -> KeyEvent {
    match key {
        Key::Ctrl(c) => KeyEvent::ctrl(c),
        Key::Alt(c) => KeyEvent::alt(c),
        Key::Right => KeyEvent(KeyCode::Right, Modifiers::NONE),
    }
}

fn cmd(action: EditAction) -> Cmd {
    match action {
        EditAction::AcceptSuggestion => Cmd::CompleteHint,
        EditAction::ClearScreen => Cmd::ClearScreen,
        EditAction::EndOfFile => Cmd::EndOfFile,
    }
}
