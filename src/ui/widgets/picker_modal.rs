//! File picker dialog overlay

use crate::picker::{EntryKind, PickerEntry, PickerState};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Widget},
};

/// Modal directory browser drawn over the current screen
pub struct PickerModal<'a> {
    state: &'a PickerState,
    theme: &'a Theme,
}

impl<'a> PickerModal<'a> {
    /// Create a new picker modal widget
    #[must_use]
    pub const fn new(state: &'a PickerState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Calculate centered area for the modal
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }

    fn render_entry(&self, entry: &'a PickerEntry, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let mark = if self.state.is_marked(&entry.path) { "✓" } else { " " };

        let (name, style) = match entry.kind {
            EntryKind::Parent => ("..".to_string(), self.theme.muted_style()),
            EntryKind::Directory => (format!("{}/", entry.name), self.theme.info_style()),
            EntryKind::File => (entry.name.clone(), self.theme.normal_style()),
        };

        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.key_style()),
            Span::raw(" "),
            Span::styled(mark, self.theme.success_style()),
            Span::raw(" "),
            Span::styled(name, style),
        ]);

        if is_cursor {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for PickerModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (area.width * 3 / 4).clamp(30u16.min(area.width), 90);
        let height = (area.height * 3 / 4).clamp(8u16.min(area.height), 30);
        let modal_area = Self::centered_rect(width, height, area);

        Clear.render(modal_area, buf);

        let title = if self.state.multiple() {
            " Select files "
        } else {
            " Select a file "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.primary_style())
            .title(title)
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.height < 3 {
            return;
        }

        let [header, list_area, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::from(vec![
            Span::styled(self.state.dir.display().to_string(), self.theme.heading_style()),
            Span::styled(format!("  {}", self.state.accept()), self.theme.dimmed_style()),
        ]))
        .render(header, buf);

        let visible = list_area.height as usize;
        let start = self.state.cursor.saturating_sub(visible.saturating_sub(1));
        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .enumerate()
            .skip(start)
            .take(visible)
            .map(|(idx, entry)| self.render_entry(entry, idx == self.state.cursor))
            .collect();
        List::new(items).render(list_area, buf);

        let marked = self.state.marked.len();
        Paragraph::new(Line::from(vec![
            Span::styled("Space", self.theme.key_style()),
            Span::styled(":mark  ", self.theme.dimmed_style()),
            Span::styled("Enter", self.theme.key_style()),
            Span::styled(":open/choose  ", self.theme.dimmed_style()),
            Span::styled("c", self.theme.key_style()),
            Span::styled(format!(":confirm ({marked})  "), self.theme.dimmed_style()),
            Span::styled("Esc", self.theme.key_style()),
            Span::styled(":cancel", self.theme.dimmed_style()),
        ]))
        .render(footer, buf);
    }
}
