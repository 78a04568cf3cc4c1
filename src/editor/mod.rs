// Line-editing widget boundary
//
// The session loop only knows this narrow capability: hand over everything
// one read needs, block, and get back a tagged outcome. Interrupt and
// end-of-input are values here, never error types. The production
// implementation wraps rustyline.

pub mod bindings;
mod readline;

pub use bindings::{Binding, EditAction, Key, KeyBindings};
pub use readline::ReadlineEditor;

use anyhow::Result;
use std::collections::HashMap;

use crate::complete::CompletionBridge;
use crate::prompt::PromptSpec;

/// Result of one blocking read.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    /// The user submitted a line (possibly empty).
    Submitted(String),
    /// The read was interrupted (Ctrl-C); the buffer is discarded.
    Interrupted,
    /// End of input (Ctrl-D on an empty line); the session should end.
    EndOfInput,
}

/// Everything one read needs, assembled fresh per iteration by the session
/// loop.
pub struct ReadRequest<'a> {
    pub prompt: &'a PromptSpec,
    pub styles: &'a HashMap<String, String>,
    pub history: &'a [String],
    pub completions: &'a CompletionBridge,
    pub bindings: &'a KeyBindings,
    pub auto_suggest: bool,
    pub mouse_support: bool,
}

pub trait LineEditor {
    /// Blocks until a line is submitted, the read is interrupted, or input
    /// ends. Anything else is an unanticipated failure and propagates.
    fn read_line(&mut self, req: ReadRequest<'_>) -> Result<ReadOutcome>;
}
