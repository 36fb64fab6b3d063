//! Status bar widget for displaying messages

use crate::ui::output::{MessageLevel, StatusMessage};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget that displays the latest message and the selection count
pub struct StatusBar<'a> {
    /// Message to display
    message: Option<&'a StatusMessage>,
    /// Right-aligned summary, e.g. "2 files selected"
    summary: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>, summary: &'a str, theme: &'a Theme) -> Self {
        Self {
            message,
            summary,
            theme,
        }
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(75), Constraint::Percentage(25)]).areas(inner);

        if let Some(msg) = self.message {
            let style = self.style_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(left, buf);
        }

        Paragraph::new(Line::styled(self.summary, self.theme.muted_style()))
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::buffer_text;
    use std::time::Instant;

    #[test]
    fn test_renders_message_with_prefix_and_summary() {
        let theme = Theme::default();
        let message = StatusMessage {
            level: MessageLevel::Success,
            text: "2 files dropped".to_string(),
            created_at: Instant::now(),
        };
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);
        StatusBar::new(Some(&message), "2 files selected", &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Status"));
        assert!(text.contains("✓ 2 files dropped"));
        assert!(text.contains("2 files selected"));
    }

    #[test]
    fn test_renders_without_message() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);
        StatusBar::new(None, "0 files selected", &theme).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("0 files selected"));
    }
}
