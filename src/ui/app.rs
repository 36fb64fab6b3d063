//! Terminal application loop
//!
//! Sets the terminal up for mouse, paste and focus reporting, draws the
//! active screen and feeds events to [`handle_event`](super::events::handle_event)
//! until the user quits.

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, Mode, Screen};
use super::theme::Theme;
use super::widgets::{
    AuthScreen, ComingSoon, DROP_ZONE_HEIGHT, DropZone, FileList, HelpBar, Logo, MainLayout,
    PickerModal, StatusBar, TITLE,
};
use crate::selection::SelectedFile;
use crate::ui::error::Result;
use crossterm::{
    event::{
        DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
        EnableFocusChange, EnableMouseCapture,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Rows the auth screen asks for in auto layout mode
const AUTH_HEIGHT: u16 = 22;

/// Rows the placeholder page asks for in auto layout mode
const COMING_SOON_HEIGHT: u16 = 8;

/// The inspector TUI
pub struct InspectorApp {
    theme: Theme,
}

impl InspectorApp {
    /// Create the app with the default theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Setup terminal for TUI
    ///
    /// A failure after raw mode is on switches it back off before returning.
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        let entered = execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste,
            EnableFocusChange
        );
        undo_on_error(entered, disable_raw_mode)?;

        let backend = CrosstermBackend::new(stdout);
        Ok(undo_on_error(Terminal::new(backend), Self::cleanup_terminal)?)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(
            io::stdout(),
            DisableFocusChange,
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        Ok(())
    }

    fn run_loop(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>, state: &mut AppState) -> Result<()> {
        while !state.should_exit {
            state.output.cleanup();
            terminal.draw(|frame| render(frame, state, &self.theme))?;

            if poll_and_handle(state, POLL_INTERVAL)? == EventResult::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Run until the user quits and return the final selection
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be set up, drawn to or read.
    pub fn run(&self, mut state: AppState) -> Result<Vec<SelectedFile>> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, &mut state);

        // Always restore the terminal, even on error
        if let Err(e) = Self::cleanup_terminal() {
            log::warn!("terminal cleanup failed: {e}");
        }

        result.map(|()| state.files().to_vec())
    }
}

/// Run `undo` when `result` is an error, then hand `result` back
fn undo_on_error<T, E, U>(
    result: std::result::Result<T, E>,
    undo: impl FnOnce() -> std::result::Result<(), U>,
) -> std::result::Result<T, E>
where
    U: std::fmt::Display,
{
    if result.is_err()
        && let Err(e) = undo()
    {
        log::warn!("terminal restore failed: {e}");
    }
    result
}

impl Default for InspectorApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw one frame and record the areas the event handler hit-tests
pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let [header, body, status, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, state, theme, header);

    let content_height = match state.screen {
        Screen::Dropzone if state.files().is_empty() => DROP_ZONE_HEIGHT + 1,
        Screen::Dropzone => {
            // gap and list header, then one row per file
            let rows = u16::try_from(state.files().len()).unwrap_or(u16::MAX);
            DROP_ZONE_HEIGHT.saturating_add(2).saturating_add(rows)
        }
        Screen::ComingSoon => COMING_SOON_HEIGHT,
        Screen::Auth => AUTH_HEIGHT,
    };
    let layout = MainLayout::new(state.layout.variant, theme)
        .fixed(state.layout.fixed)
        .fluid(state.layout.fluid)
        .pointer(state.pointer)
        .content_height(content_height);
    state.main_area = layout.panel_area(body);
    let content = layout.content_area(body);
    frame.render_widget(layout, body);

    match state.screen {
        Screen::Dropzone => {
            let [zone, _, list] = Layout::vertical([
                Constraint::Length(DROP_ZONE_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(content);
            state.drop_zone_area = zone;

            let selection = state.manager.state();
            frame.render_widget(DropZone::new(selection, state.manager.accept(), theme), zone);
            frame.render_widget(FileList::new(selection, state.cursor, theme), list);
        }
        Screen::ComingSoon => {
            state.drop_zone_area = Rect::default();
            frame.render_widget(ComingSoon::new(theme), content);
        }
        Screen::Auth => {
            state.drop_zone_area = Rect::default();
            frame.render_widget(AuthScreen::new(&state.gate, theme), content);
        }
    }

    let message = state.output.latest_message();
    let summary = state.manager.state().summary();
    frame.render_widget(StatusBar::new(message.as_ref(), &summary, theme), status);

    let hints = if state.screen == Screen::Dropzone {
        HelpBar::dropzone_hints()
    } else {
        HelpBar::screen_hints()
    };
    frame.render_widget(HelpBar::new(&hints, theme), help);

    if state.mode == Mode::Picker
        && let Some(picker) = &state.picker
    {
        frame.render_widget(PickerModal::new(picker, theme), frame.area());
    }
}

fn render_header(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let [mark, title] = Layout::horizontal([Constraint::Length(6), Constraint::Min(0)]).areas(area);
    frame.render_widget(Logo::new(theme), mark);

    let mut tabs = vec![Span::styled(TITLE, theme.heading_style()), Span::raw("   ")];
    for screen in Screen::ALL {
        let style = if screen == state.screen {
            theme.selected_style()
        } else {
            theme.muted_style()
        };
        tabs.push(Span::styled(format!(" {} ", screen.title()), style));
        tabs.push(Span::raw(" "));
    }

    let [_, line] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(title);
    frame.render_widget(Paragraph::new(Line::from(tabs)), line);
}
