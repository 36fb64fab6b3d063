//! Drop target widget

use crate::selection::{AcceptFilter, SelectionState};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Text shown while a drag hovers the zone
pub const ACTIVE_TEXT: &str = "Drop files here";

/// Text shown when idle
pub const IDLE_TEXT: &str = "Press o to browse or drop files onto the terminal";

/// Height the drop zone asks for, borders included
pub const DROP_ZONE_HEIGHT: u16 = 7;

/// Dashed outline while idle
const IDLE_BORDER: border::Set = border::Set {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    vertical_left: "╎",
    vertical_right: "╎",
    horizontal_top: "╌",
    horizontal_bottom: "╌",
};

/// Heavy dashed outline while a drag hovers
const ACTIVE_BORDER: border::Set = border::Set {
    top_left: "┏",
    top_right: "┓",
    bottom_left: "┗",
    bottom_right: "┛",
    vertical_left: "╏",
    vertical_right: "╏",
    horizontal_top: "╍",
    horizontal_bottom: "╍",
};

/// The drop target: a bordered box whose look follows the drag state
pub struct DropZone<'a> {
    state: &'a SelectionState,
    accept: &'a AcceptFilter,
    theme: &'a Theme,
}

impl<'a> DropZone<'a> {
    /// Create a drop zone for a selection snapshot
    #[must_use]
    pub const fn new(state: &'a SelectionState, accept: &'a AcceptFilter, theme: &'a Theme) -> Self {
        Self {
            state,
            accept,
            theme,
        }
    }
}

impl Widget for DropZone<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let active = self.state.is_drag_active();

        let (border_set, border_style, text, text_style) = if active {
            (
                ACTIVE_BORDER,
                self.theme.primary_style(),
                ACTIVE_TEXT,
                self.theme.heading_style(),
            )
        } else {
            (
                IDLE_BORDER,
                self.theme.border_style(),
                IDLE_TEXT,
                self.theme.muted_style(),
            )
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border_set)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let icon_style = if active {
            self.theme.primary_style()
        } else {
            self.theme.dimmed_style()
        };

        let mut lines = vec![
            Line::from(Span::styled("⇪", icon_style)),
            Line::from(Span::styled(text, text_style)),
            Line::from(Span::styled(self.accept.to_string(), self.theme.dimmed_style())),
        ];

        // Vertically centre what fits
        let top = inner.height.saturating_sub(3) / 2;
        let mut padded = vec![Line::default(); top as usize];
        padded.append(&mut lines);

        Paragraph::new(padded)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
