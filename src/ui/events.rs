//! Event handling for the inspector TUI
//!
//! Maps terminal events onto the selection manager. A terminal has no
//! native drag-and-drop, so the gestures are read like this:
//!
//! - left-button drag inside the drop zone: drag enters
//! - drag or move outside it, release outside it, focus lost: drag leaves
//! - bracketed paste: drop, the pasted text being the dropped paths
//! - `o`, Enter or a click on the drop zone: open the picker
//! - `d` or Delete: remove the file under the cursor

use super::state::{AppState, Mode, Screen};
use super::widgets::relative_position;
use crate::selection::parse_drop_text;
use crate::ui::output::OutputWriter;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the application
    Exit,
    /// No action taken
    Ignored,
}

fn in_drop_zone(state: &AppState, column: u16, row: u16) -> bool {
    state.screen == Screen::Dropzone && relative_position(state.drop_zone_area, column, row).is_some()
}

/// Handle keys in normal mode
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc | KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            EventResult::Exit
        }
        (KeyCode::Tab, _) => {
            state.screen = state.screen.next();
            EventResult::Continue
        }
        (KeyCode::BackTab, _) => {
            state.screen = state.screen.previous();
            EventResult::Continue
        }
        _ if state.screen == Screen::Dropzone => handle_dropzone_key(state, key),
        _ => EventResult::Ignored,
    }
}

fn handle_dropzone_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('o') | KeyCode::Enter => {
            state.open_picker();
            EventResult::Continue
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(removed) = state.remove_current() {
                log::debug!("removed {}", removed.handle.display());
            }
            EventResult::Continue
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.cursor_up();
            EventResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.cursor_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle keys while the picker dialog is open
fn handle_picker_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    let Some(picker) = state.picker.as_mut() else {
        state.mode = Mode::Normal;
        return EventResult::Ignored;
    };

    let outcome = match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            picker.cursor_up();
            return EventResult::Continue;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            picker.cursor_down();
            return EventResult::Continue;
        }
        KeyCode::Char(' ') => {
            picker.toggle_mark();
            return EventResult::Continue;
        }
        KeyCode::Enter => match picker.activate() {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("picker: {e}");
                state.output.error(&format!("Cannot open directory: {e}"));
                return EventResult::Continue;
            }
        },
        KeyCode::Char('c') => picker.confirm_marked(),
        KeyCode::Esc => picker.cancel(),
        _ => return EventResult::Ignored,
    };

    state.finish_picker(outcome);
    EventResult::Continue
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    if state.layout.variant.tracks_pointer() {
        state.pointer = relative_position(state.main_area, mouse.column, mouse.row);
    }

    if state.mode == Mode::Picker {
        return EventResult::Ignored;
    }

    let inside = in_drop_zone(state, mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Drag(MouseButton::Left) if inside => {
            if !state.manager.is_drag_active() {
                state.manager.begin_drag();
            }
            EventResult::Continue
        }
        MouseEventKind::Drag(_) | MouseEventKind::Moved | MouseEventKind::Up(_)
            if !inside && state.manager.is_drag_active() =>
        {
            state.manager.end_drag();
            EventResult::Continue
        }
        MouseEventKind::Down(MouseButton::Left) if inside && !state.manager.is_drag_active() => {
            state.open_picker();
            EventResult::Continue
        }
        MouseEventKind::ScrollUp if state.screen == Screen::Dropzone => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown if state.screen == Screen::Dropzone => {
            state.cursor_down();
            EventResult::Continue
        }
        _ if state.pointer.is_some() => EventResult::Continue,
        _ => EventResult::Ignored,
    }
}

/// Route one terminal event
pub fn handle_event(state: &mut AppState, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => match state.mode {
            Mode::Normal => handle_normal_mode(state, key),
            Mode::Picker => handle_picker_mode(state, key),
        },
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Paste(text) if state.mode == Mode::Normal && state.screen == Screen::Dropzone => {
            let paths = parse_drop_text(&text);
            log::debug!("paste decoded to {} path(s)", paths.len());
            state.drop_paths(paths);
            EventResult::Continue
        }
        Event::FocusLost if state.manager.is_drag_active() => {
            state.manager.end_drag();
            EventResult::Continue
        }
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    Ok(handle_event(state, event::read()?))
}
