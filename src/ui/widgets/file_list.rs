//! Selected-file list widget

use crate::selection::{SelectedFile, SelectionState};
use crate::ui::theme::Theme;
use byte_unit::{Byte, UnitType};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Human readable size of the file behind a handle, if it can be stat'ed
#[must_use]
pub fn display_size(file: &SelectedFile) -> Option<String> {
    let metadata = std::fs::metadata(file.path()).ok()?;
    if !metadata.is_file() {
        return None;
    }
    Some(
        Byte::from_u64(metadata.len())
            .get_appropriate_unit(UnitType::Binary)
            .to_string(),
    )
}

/// List of selected files with a removal cursor
///
/// Renders nothing for an empty selection.
pub struct FileList<'a> {
    state: &'a SelectionState,
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> FileList<'a> {
    /// Create a new file list widget
    #[must_use]
    pub const fn new(state: &'a SelectionState, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            state,
            cursor,
            theme,
        }
    }

    fn render_item(&self, file: &'a SelectedFile, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.key_style()),
            Span::raw(" "),
            Span::styled(file.name.as_str(), self.theme.normal_style()),
        ];

        if let Some(size) = display_size(file) {
            spans.push(Span::styled(format!("  {size}"), self.theme.muted_style()));
        }

        if is_cursor {
            spans.push(Span::styled("  [d] remove", self.theme.dimmed_style()));
            ListItem::new(Line::from(spans)).style(self.theme.selected_style())
        } else {
            ListItem::new(Line::from(spans))
        }
    }
}

impl Widget for FileList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.is_empty() {
            return;
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.border_style())
            .title(Span::styled(
                format!(" {} ", self.state.summary()),
                self.theme.heading_style(),
            ));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        // Keep the cursor row visible
        let visible = inner.height as usize;
        let start = self.cursor.saturating_sub(visible - 1);

        let items: Vec<ListItem> = self
            .state
            .files
            .iter()
            .enumerate()
            .skip(start)
            .take(visible)
            .map(|(idx, file)| self.render_item(file, idx == self.cursor))
            .collect();

        List::new(items).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::buffer_text;
    use tempfile::TempDir;

    fn state_of(files: Vec<SelectedFile>) -> SelectionState {
        SelectionState {
            files,
            ..SelectionState::default()
        }
    }

    #[test]
    fn test_empty_selection_renders_nothing() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        FileList::new(&SelectionState::default(), 0, &theme).render(area, &mut buf);
        assert!(buffer_text(&buf).trim().is_empty());
    }

    #[test]
    fn test_header_and_rows() {
        let theme = Theme::default();
        let state = state_of(vec![
            SelectedFile::from("a.png"),
            SelectedFile::from("b.jpg"),
        ]);
        let area = Rect::new(0, 0, 50, 5);
        let mut buf = Buffer::empty(area);
        FileList::new(&state, 1, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("2 files selected"));
        assert!(text.contains("  a.png"));
        assert!(text.contains("> b.jpg"));
        assert!(text.contains("[d] remove"));
    }

    #[test]
    fn test_singular_header() {
        let theme = Theme::default();
        let state = state_of(vec![SelectedFile::from("only.txt")]);
        let area = Rect::new(0, 0, 50, 3);
        let mut buf = Buffer::empty(area);
        FileList::new(&state, 0, &theme).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("1 file selected"));
    }

    #[test]
    fn test_cursor_row_scrolls_into_view() {
        let theme = Theme::default();
        let files = (0..10).map(|i| SelectedFile::from(format!("f{i}.txt").as_str())).collect();
        let state = state_of(files);
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        FileList::new(&state, 9, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("> f9.txt"));
        assert!(!text.contains("f0.txt"));
    }

    #[test]
    fn test_display_size_for_real_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        let size = display_size(&SelectedFile::from_path(&path)).unwrap();
        assert!(size.contains("KiB"));
        assert!(display_size(&SelectedFile::from("missing.bin")).is_none());
        assert!(display_size(&SelectedFile::from_path(dir.path())).is_none());
    }
}
