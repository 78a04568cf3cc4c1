// Key bindings: a standard base set plus a construction-time overlay.
// Overlay entries replace a base entry on the same key and are applied
// once, before the session starts reading.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Ctrl(char),
    Alt(char),
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Accept the inline history suggestion.
    AcceptSuggestion,
    ClearScreen,
    EndOfFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub key: Key,
    pub action: EditAction,
}

#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    bindings: Vec<Binding>,
}

impl KeyBindings {
    /// The base set: suggestion acceptance and screen clearing. Abort and
    /// end-of-input arrive through the read outcome, not a binding.
    pub fn standard() -> Self {
        Self {
            bindings: vec![
                Binding {
                    key: Key::Ctrl('f'),
                    action: EditAction::AcceptSuggestion,
                },
                Binding {
                    key: Key::Ctrl('l'),
                    action: EditAction::ClearScreen,
                },
            ],
        }
    }

    /// Merges externally loaded bindings over the base set. Same key wins
    /// for the overlay; new keys are appended in order.
    pub fn overlay(mut self, extra: impl IntoIterator<Item = Binding>) -> Self {
        for binding in extra {
            match self.bindings.iter_mut().find(|b| b.key == binding.key) {
                Some(existing) => existing.action = binding.action,
                None => self.bindings.push(binding),
            }
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
