//! # TextField
//!
//! A self-contained single-line input field: value, cursor, horizontal
//! scroll window, placeholder, and display width. This is the low-level
//! editor that [`TextInput`](super::TextInput) embeds and treats as
//! opaque; the wrapper drives it only through `set_value`, `set_width`,
//! `set_placeholder`, `apply`, and `view`.
//!
//! ## State Management
//!
//! The cursor is a byte offset into `value`, kept on a char boundary at
//! all times. `set_value` is a full overwrite and clamps the cursor;
//! `apply` edits through the cursor only while the field is focused.
//! The scroll window follows the cursor so it stays visible within the
//! configured width.

use std::fmt;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Cmd, Component, Focusable};
use crate::tui::event::{KeyMessage, Message};

/// Columns consumed by the prompt in front of the text.
const PROMPT: &str = "> ";

/// Error reported by the field's own update.
#[derive(Debug, PartialEq, Eq)]
pub enum TextFieldError {
    /// Asked to insert a rune the field cannot display.
    UnprintableInput(char),
}

impl fmt::Display for TextFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextFieldError::UnprintableInput(c) => {
                write!(f, "unprintable input U+{:04X}", *c as u32)
            }
        }
    }
}

impl std::error::Error for TextFieldError {}

/// Single-line input field.
pub struct TextField {
    value: String,
    /// Cursor position as byte offset in value (0..=value.len())
    cursor: usize,
    /// Byte offset of the first visible character (horizontal scroll)
    offset: usize,
    /// Visible width in columns, prompt included. 0 means unconstrained.
    width: u16,
    placeholder: String,
    focused: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            offset: 0,
            width: 0,
            placeholder: String::new(),
            focused: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Overwrite the displayed value, clamping the cursor and scroll
    /// window into the new content. Never fails.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = snap_boundary(&self.value, self.cursor);
        self.scroll_into_view();
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
        self.scroll_into_view();
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Cursor position as a byte offset into the value.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Consume one message.
    ///
    /// Key content only takes effect while the field is focused; resize
    /// and quit messages are absorbed identically either way. The only
    /// failure is a focused insertion of an unprintable rune, which
    /// leaves the field untouched.
    pub fn apply(&mut self, msg: &Message) -> Result<(), TextFieldError> {
        if let Message::Key(key) = msg {
            if self.focused {
                self.edit(key)?;
            }
        }
        self.scroll_into_view();
        Ok(())
    }

    fn edit(&mut self, key: &KeyMessage) -> Result<(), TextFieldError> {
        match key.label.as_str() {
            "backspace" => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.value, self.cursor);
                    self.value.drain(prev..self.cursor);
                    self.cursor = prev;
                }
            }
            "delete" => {
                if self.cursor < self.value.len() {
                    let next = next_char_boundary(&self.value, self.cursor);
                    self.value.drain(self.cursor..next);
                }
            }
            "left" => self.cursor = prev_char_boundary(&self.value, self.cursor),
            "right" => self.cursor = next_char_boundary(&self.value, self.cursor),
            "home" => self.cursor = 0,
            "end" => self.cursor = self.value.len(),
            _ => {
                if let Some(c) = key.single_rune() {
                    if c.is_control() {
                        return Err(TextFieldError::UnprintableInput(c));
                    }
                    self.value.insert(self.cursor, c);
                    self.cursor += c.len_utf8();
                }
            }
        }
        Ok(())
    }

    /// Columns available for text once the prompt is drawn. 0 means
    /// unconstrained.
    fn text_columns(&self) -> usize {
        if self.width == 0 {
            return 0;
        }
        usize::from(self.width).saturating_sub(PROMPT.width()).max(1)
    }

    /// Keep the cursor inside the visible window.
    fn scroll_into_view(&mut self) {
        self.offset = snap_boundary(&self.value, self.offset.min(self.cursor));
        let columns = self.text_columns();
        if columns == 0 {
            self.offset = 0;
            return;
        }
        while self.value[self.offset..self.cursor].width() >= columns {
            self.offset = next_char_boundary(&self.value, self.offset);
        }
    }

    /// The slice of the value that fits in the visible window.
    fn window(&self) -> &str {
        let columns = self.text_columns();
        if columns == 0 {
            return &self.value;
        }
        let visible = &self.value[self.offset..];
        let mut used = 0;
        let mut end = 0;
        for (i, c) in visible.char_indices() {
            let w = c.width().unwrap_or(0);
            if used + w > columns {
                break;
            }
            used += w;
            end = i + c.len_utf8();
        }
        &visible[..end]
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TextField {
    fn update(&mut self, msg: &Message) -> Option<Cmd> {
        if let Err(err) = self.apply(msg) {
            log::warn!("text field dropped input: {err}");
        }
        None
    }

    fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return format!("{PROMPT}{}", self.placeholder);
        }
        format!("{PROMPT}{}", self.window())
    }
}

impl Focusable for TextField {
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

/// Clamp `pos` onto the nearest char boundary at or before it.
fn snap_boundary(text: &str, mut pos: usize) -> usize {
    pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Byte offset of the previous character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the next character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focused_field() -> TextField {
        let mut field = TextField::new();
        field.focus();
        field
    }

    fn press(field: &mut TextField, key: KeyMessage) -> Result<(), TextFieldError> {
        field.apply(&Message::Key(key))
    }

    // -- editing ---------------------------------------------------------

    #[test]
    fn focused_insert_and_backspace() {
        let mut field = focused_field();
        press(&mut field, KeyMessage::from_char('a')).unwrap();
        press(&mut field, KeyMessage::from_char('b')).unwrap();
        assert_eq!(field.value(), "ab");

        press(&mut field, KeyMessage::named("backspace")).unwrap();
        assert_eq!(field.value(), "a");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn backspace_on_empty_value_is_a_noop() {
        let mut field = focused_field();
        press(&mut field, KeyMessage::named("backspace")).unwrap();
        assert_eq!(field.value(), "");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn cursor_movement_and_mid_value_editing() {
        let mut field = focused_field();
        field.set_value("abc");
        field.apply(&Message::Key(KeyMessage::named("home"))).unwrap();
        press(&mut field, KeyMessage::named("right")).unwrap();
        press(&mut field, KeyMessage::from_char('x')).unwrap();
        assert_eq!(field.value(), "axbc");

        press(&mut field, KeyMessage::named("delete")).unwrap();
        assert_eq!(field.value(), "axc");

        press(&mut field, KeyMessage::named("end")).unwrap();
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn multibyte_backspace_removes_one_character() {
        let mut field = focused_field();
        field.set_value("café");
        press(&mut field, KeyMessage::named("end")).unwrap();
        press(&mut field, KeyMessage::named("backspace")).unwrap();
        assert_eq!(field.value(), "caf");
    }

    #[test]
    fn unfocused_field_ignores_key_content() {
        let mut field = TextField::new();
        press(&mut field, KeyMessage::from_char('a')).unwrap();
        assert_eq!(field.value(), "");

        // Resize is absorbed identically regardless of focus.
        field
            .apply(&Message::Resize {
                width: 80,
                height: 24,
            })
            .unwrap();
        assert_eq!(field.value(), "");
    }

    #[test]
    fn control_rune_is_rejected() {
        let mut field = focused_field();
        let err = press(&mut field, KeyMessage::from_char('\u{7}')).unwrap_err();
        assert_eq!(err, TextFieldError::UnprintableInput('\u{7}'));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn component_update_swallows_the_error() {
        let mut field = focused_field();
        let cmd = field.update(&Message::Key(KeyMessage::from_char('\u{7}')));
        assert_eq!(cmd, None);
        assert_eq!(field.value(), "");
    }

    // -- value assignment ------------------------------------------------

    #[test]
    fn set_value_clamps_the_cursor() {
        let mut field = focused_field();
        field.set_value("hello");
        press(&mut field, KeyMessage::named("end")).unwrap();
        assert_eq!(field.cursor(), 5);

        field.set_value("hi");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn set_value_snaps_to_a_char_boundary() {
        let mut field = focused_field();
        field.set_value("ab");
        press(&mut field, KeyMessage::named("home")).unwrap();
        press(&mut field, KeyMessage::named("right")).unwrap();
        assert_eq!(field.cursor(), 1);

        // The new value has a two-byte character where the cursor sat.
        field.set_value("é");
        assert_eq!(field.cursor(), 0);
    }

    // -- focus capability ------------------------------------------------

    #[test]
    fn focus_is_idempotent() {
        let mut field = TextField::new();
        assert!(!field.is_focused());
        field.focus();
        field.focus();
        assert!(field.is_focused());
        field.unfocus();
        field.unfocus();
        assert!(!field.is_focused());
    }

    // -- rendering -------------------------------------------------------

    #[test]
    fn view_shows_placeholder_when_empty() {
        let mut field = TextField::new();
        field.set_placeholder("Username");
        assert_eq!(field.view(), "> Username");
    }

    #[test]
    fn view_shows_value_once_present() {
        let mut field = TextField::new();
        field.set_placeholder("Username");
        field.set_value("admin");
        assert_eq!(field.view(), "> admin");
    }

    #[test]
    fn zero_width_renders_the_whole_value() {
        let mut field = TextField::new();
        field.set_value("a long unconstrained value");
        assert_eq!(field.view(), "> a long unconstrained value");
    }

    #[test]
    fn narrow_field_scrolls_to_keep_the_cursor_visible() {
        let mut field = focused_field();
        field.set_width(6); // 4 columns of text after the prompt
        for c in "abcdefgh".chars() {
            press(&mut field, KeyMessage::from_char(c)).unwrap();
        }
        // Cursor sits after 'h'; the window holds the tail.
        assert_eq!(field.view(), "> fgh");

        press(&mut field, KeyMessage::named("home")).unwrap();
        assert_eq!(field.view(), "> abcd");
    }
}
