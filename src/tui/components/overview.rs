//! Overview screen: the dashboard's section list.
//!
//! Navigation skeleton only; the panels behind the sections are not
//! built yet.

use crate::tui::component::{Cmd, Component};
use crate::tui::event::Message;
use crate::tui::layout::place;

const INITIALIZING: &str = "Initializing...";

const SECTIONS: [&str; 3] = ["Services", "Pipelines", "Alerts"];

pub struct Overview {
    width: u16,
    height: u16,
    selected: usize,
}

impl Overview {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }
}

impl Default for Overview {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Overview {
    fn update(&mut self, msg: &Message) -> Option<Cmd> {
        match msg {
            Message::Resize { width, height } => {
                self.width = *width;
                self.height = *height;
            }
            Message::Key(key) => match key.label.as_str() {
                "q" | "ctrl+c" => return Some(Cmd::Quit),
                "up" | "k" => self.selected = self.selected.saturating_sub(1),
                "down" | "j" => {
                    self.selected = (self.selected + 1).min(SECTIONS.len() - 1);
                }
                _ => {}
            },
            Message::Quit => {}
        }
        None
    }

    fn view(&self) -> String {
        if self.width == 0 {
            return INITIALIZING.to_string();
        }
        let list = SECTIONS
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == self.selected {
                    format!("> {name}")
                } else {
                    format!("  {name}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        place(self.width, self.height, &list)
    }
}
