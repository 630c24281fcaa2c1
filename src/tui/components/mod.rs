//! # TUI Components
//!
//! Screens and widgets, all speaking the [`Component`] contract from
//! [`crate::tui::component`].
//!
//! Two layers live here:
//!
//! - **Widgets**: `TextField` (the low-level line editor) and
//!   `TextInput` (the composed buffer-plus-field input). Widgets that
//!   take typed input also implement `Focusable`.
//! - **Screens**: `Login` and `Overview`, the top-level components the
//!   dispatcher mounts one at a time. Screens own their children as
//!   named fields and forward messages explicitly.
//!
//! [`Component`]: crate::tui::component::Component

pub mod login;
pub mod overview;
pub mod text_field;
pub mod text_input;

pub use login::Login;
pub use overview::Overview;
pub use text_field::{TextField, TextFieldError};
pub use text_input::TextInput;
