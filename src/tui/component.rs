//! Base component contracts.
//!
//! Everything on screen implements [`Component`]: a value that consumes
//! [`Message`]s one at a time and renders itself to a string. Widgets
//! that can hold input focus additionally implement [`Focusable`].
//!
//! Composition is explicit: a component that embeds another holds it as
//! a named field and delegates the calls it does not override. There is
//! no implicit method resolution between parent and child.

use crate::tui::event::Message;

/// A follow-up effect returned from an update.
///
/// The dispatcher observes at most one per tick and reacts after the
/// current render completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Stop the program loop.
    Quit,
}

/// A unit of state plus update/render behavior.
///
/// `update` must not block and must finish within the dispatch tick.
/// The dispatcher delivers exactly one message at a time and owns the
/// single active screen, so implementations may edit themselves in
/// place: no other holder can observe the value mid-tick.
pub trait Component {
    /// One-time effect to schedule at mount. No component in this crate
    /// schedules one.
    fn init(&mut self) -> Option<Cmd> {
        None
    }

    /// Consume one message and optionally return a follow-up effect.
    fn update(&mut self, msg: &Message) -> Option<Cmd>;

    /// Render the current state. Pure and idempotent; called once per
    /// tick after `update`.
    fn view(&self) -> String;
}

/// Capability for components that can hold input focus.
///
/// Focus gates what a component *does* with key content, never whether
/// messages reach it: an unfocused component still sees every message
/// and handles resize identically. Both operations are total and
/// idempotent.
pub trait Focusable: Component {
    fn focus(&mut self);
    fn unfocus(&mut self);
    fn is_focused(&self) -> bool;
}
