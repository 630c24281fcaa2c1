//! # TUI Dispatcher
//!
//! The ratatui-specific layer. Owns the terminal, decodes input into
//! [`event::Message`]s, pumps them into the active screen, and paints
//! the returned view. This is the only module that talks to ratatui and
//! crossterm directly.
//!
//! One tick is: poll for a message, hand it to the screen's `update`,
//! draw the screen's `view`. Exactly one message is in flight at a
//! time; a quit effect stops the loop after the render that follows it.

pub mod component;
pub mod components;
pub mod event;
pub mod layout;
pub mod theme;

use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{info, warn};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::core::config::ResolvedConfig;
use crate::tui::component::{Cmd, Component};
use crate::tui::components::{Login, Overview};
use crate::tui::event::{Message, poll_message};
use crate::tui::theme::Theme;

/// Rows consumed by the title and help bars around the screen body.
const CHROME_ROWS: u16 = 2;

/// How long one poll waits before the loop idles through another turn.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the active screen from the resolved startup screen name.
fn build_screen(config: &ResolvedConfig) -> Box<dyn Component> {
    match config.screen.as_str() {
        "login" => Box::new(Login::new()),
        "overview" => Box::new(Overview::new()),
        other => {
            warn!("unknown screen {other:?}, falling back to login");
            Box::new(Login::new())
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut screen = build_screen(&config);
    let theme = Theme::new();

    let mut terminal = ratatui::init();
    let _mode_guard = TerminalModeGuard::new();

    // Mount. No screen schedules a startup effect today.
    let _ = screen.init();

    // Crossterm only reports size *changes*; seed the first resize so
    // the screen leaves its uninitialized state on real terminals.
    let size = terminal.size()?;
    let mut quit = screen.update(&Message::Resize {
        width: size.width,
        height: size.height.saturating_sub(CHROME_ROWS),
    }) == Some(Cmd::Quit);

    loop {
        terminal.draw(|frame| paint(frame, screen.as_ref(), &theme))?;
        if quit {
            break;
        }

        let Some(msg) = poll_message(POLL_INTERVAL)? else {
            continue;
        };
        // The screen gets the body viewport, not the full terminal.
        let msg = match msg {
            Message::Resize { width, height } => Message::Resize {
                width,
                height: height.saturating_sub(CHROME_ROWS),
            },
            other => other,
        };
        quit = screen.update(&msg) == Some(Cmd::Quit);
    }

    ratatui::restore();
    info!("dispatcher stopped");
    Ok(())
}

fn paint(frame: &mut Frame, screen: &dyn Component, theme: &Theme) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, body_area, help_area] = layout.areas(frame.area());

    frame.render_widget(
        Span::styled(" opsdeck · command & control", theme.title),
        title_area,
    );
    frame.render_widget(Paragraph::new(screen.view()).style(theme.base), body_area);
    frame.render_widget(Span::styled(" press q to quit", theme.help), help_area);
}
