//! # TextInput
//!
//! The composed text input: an explicit character buffer layered over an
//! embedded [`TextField`]. The wrapper owns input policy (focus gating,
//! which keys edit the buffer); the field keeps its own cursor,
//! placeholder, and width handling.
//!
//! The two pieces of state are reconciled one way, buffer into field, on
//! every single update. The field never displays content the wrapper did
//! not assign this tick, so the externally visible value is always a
//! pure function of the buffer.

use log::warn;

use crate::tui::component::{Cmd, Component, Focusable};
use crate::tui::components::text_field::TextField;
use crate::tui::event::Message;

/// Text input with an explicit buffer and focus gating.
pub struct TextInput {
    /// Editable content. Appended and truncated at the tail only.
    buffer: String,
    /// Embedded low-level field, treated as opaque.
    field: TextField,
    focused: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            field: TextField::new(),
            focused: false,
        }
    }

    /// Current buffer content, the input's externally visible value.
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// The embedded field, for callers that need its display state.
    pub fn field(&self) -> &TextField {
        &self.field
    }

    pub fn set_width(&mut self, width: u16) {
        self.field.set_width(width);
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.field.set_placeholder(placeholder);
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TextInput {
    fn update(&mut self, msg: &Message) -> Option<Cmd> {
        if self.focused {
            if let Message::Key(key) = msg {
                if key.label == "backspace" {
                    // No-op on an empty buffer; never underflows.
                    self.buffer.pop();
                } else if let Some(c) = key.single_rune() {
                    self.buffer.push(c);
                }
                // Zero or multiple runes: the press is ignored entirely.
            }
        }

        // The field displays the buffer, focused or not.
        self.field.set_value(self.buffer.as_str());
        if let Err(err) = self.field.apply(msg) {
            warn!("embedded field error: {err}");
        }
        None
    }

    fn view(&self) -> String {
        self.field.view()
    }
}

impl Focusable for TextInput {
    fn focus(&mut self) {
        self.focused = true;
    }

    fn unfocus(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}
