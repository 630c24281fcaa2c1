//! Read-only style table for the paint layer.
//!
//! Built once at startup and passed by reference into every paint call.
//! Never mutated after construction.

use ratatui::style::{Color, Modifier, Style};

/// Styles shared by the dispatcher chrome and screen painting.
pub struct Theme {
    /// Title bar at the top of the surface.
    pub title: Style,
    /// Active screen body.
    pub base: Style,
    /// Help bar at the bottom of the surface.
    pub help: Style,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Rgb(0xFA, 0xFA, 0xFA))
                .bg(Color::Rgb(0x7D, 0x56, 0xF4))
                .add_modifier(Modifier::BOLD),
            base: Style::default(),
            help: Style::default().fg(Color::Rgb(0x62, 0x62, 0x62)),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
