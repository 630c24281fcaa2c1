//! Login screen: a single username input centered in the viewport.

use crate::tui::component::{Cmd, Component, Focusable};
use crate::tui::components::text_input::TextInput;
use crate::tui::event::Message;
use crate::tui::layout::place;

/// Rendered until the first resize message arrives.
const INITIALIZING: &str = "Initializing...";

pub struct Login {
    /// Viewport dimensions. 0 until the first resize.
    width: u16,
    height: u16,
    username: TextInput,
}

impl Login {
    pub fn new() -> Self {
        let mut username = TextInput::new();
        username.set_placeholder("Username");
        // The only child on this screen, so always input-eligible.
        username.focus();
        Self {
            width: 0,
            height: 0,
            username,
        }
    }

    pub fn username(&self) -> &TextInput {
        &self.username
    }
}

impl Default for Login {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Login {
    fn update(&mut self, msg: &Message) -> Option<Cmd> {
        match msg {
            Message::Resize { width, height } => {
                self.width = *width;
                self.height = *height;
                self.username.set_width(width / 3);
            }
            Message::Key(key) if key.label == "q" || key.label == "ctrl+c" => {
                // Quit bypasses the child entirely.
                return Some(Cmd::Quit);
            }
            _ => {}
        }
        self.username.update(msg)
    }

    fn view(&self) -> String {
        if self.width == 0 {
            return INITIALIZING.to_string();
        }
        place(self.width, self.height, &self.username.view())
    }
}
