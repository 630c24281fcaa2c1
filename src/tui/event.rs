//! Terminal input events.
//!
//! Raw crossterm events are decoded into [`Message`] values at the
//! dispatcher boundary. Components only ever see `Message`; nothing
//! below this module knows what a terminal backend is.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// An input event delivered to the active screen, one per dispatch tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key press, carrying its printable runes and a stable label.
    Key(KeyMessage),
    /// The viewport changed size.
    Resize { width: u16, height: u16 },
    /// Loop-termination sentinel. Components treat it as inert; the
    /// dispatcher reacts to the [`Cmd::Quit`](crate::tui::component::Cmd)
    /// effect instead.
    Quit,
}

/// A decoded key press.
///
/// `label` names the key ("a", "backspace", "ctrl+c", ...). `runes`
/// holds the printable characters the press produced: exactly one for a
/// character key, empty for named keys and modifier combinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMessage {
    pub runes: Vec<char>,
    pub label: String,
}

impl KeyMessage {
    /// A printable character key.
    pub fn from_char(c: char) -> Self {
        Self {
            runes: vec![c],
            label: c.to_string(),
        }
    }

    /// A named key with no printable runes ("backspace", "enter", ...).
    pub fn named(label: impl Into<String>) -> Self {
        Self {
            runes: Vec::new(),
            label: label.into(),
        }
    }

    /// The rune carried by this press, if there is exactly one.
    pub fn single_rune(&self) -> Option<char> {
        match self.runes.as_slice() {
            [c] => Some(*c),
            _ => None,
        }
    }
}

/// Poll for the next message, blocking up to `timeout`.
///
/// Returns `Ok(None)` when the timeout elapses or the event decodes to
/// nothing we route (mouse motion, key releases, focus changes).
pub(crate) fn poll_message(timeout: Duration) -> io::Result<Option<Message>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(decode(event::read()?))
}

/// Decode a raw crossterm event into a routable message.
pub fn decode(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => decode_key(key),
        Event::Resize(width, height) => Some(Message::Resize { width, height }),
        _ => None,
    }
}

fn decode_key(key: KeyEvent) -> Option<Message> {
    // Control combinations are labelled "ctrl+<key>" and carry no runes.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(c) = key.code {
            return Some(Message::Key(KeyMessage::named(format!("ctrl+{c}"))));
        }
    }
    let key = match key.code {
        KeyCode::Char(c) => KeyMessage::from_char(c),
        KeyCode::Backspace => KeyMessage::named("backspace"),
        KeyCode::Enter => KeyMessage::named("enter"),
        KeyCode::Esc => KeyMessage::named("esc"),
        KeyCode::Tab => KeyMessage::named("tab"),
        KeyCode::Delete => KeyMessage::named("delete"),
        KeyCode::Left => KeyMessage::named("left"),
        KeyCode::Right => KeyMessage::named("right"),
        KeyCode::Up => KeyMessage::named("up"),
        KeyCode::Down => KeyMessage::named("down"),
        KeyCode::Home => KeyMessage::named("home"),
        KeyCode::End => KeyMessage::named("end"),
        _ => return None,
    };
    Some(Message::Key(key))
}
