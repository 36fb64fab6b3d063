//! Placeholder page for screens that do not exist yet

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Heading of the placeholder page
pub const HEADING: &str = "Coming Soon!";

/// Body lines of the placeholder page
pub const BODY: [&str; 2] = ["This page has not been created yet.", "Stay tuned though!"];

const TELESCOPE: [&str; 3] = ["   _|___", "  /  o  \\==", " /_______\\"];

/// Centered "Coming Soon" page
pub struct ComingSoon<'a> {
    theme: &'a Theme,
}

impl<'a> ComingSoon<'a> {
    /// Create the placeholder page
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for ComingSoon<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = TELESCOPE
            .iter()
            .map(|row| Line::from(Span::styled(*row, self.theme.primary_style())))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(HEADING, self.theme.heading_style())));
        lines.extend(
            BODY.iter()
                .map(|row| Line::from(Span::styled(*row, self.theme.muted_style()))),
        );

        let height = lines.len() as u16;
        let top = area.height.saturating_sub(height) / 2;
        let target = Rect::new(area.x, area.y + top, area.width, area.height - top);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(target, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::buffer_text;

    #[test]
    fn test_renders_heading_and_body_centered() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        ComingSoon::new(&theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains(HEADING));
        assert!(text.contains(BODY[0]));
        assert!(text.contains(BODY[1]));

        let first_row = text.lines().position(|l| !l.trim().is_empty()).unwrap();
        assert!(first_row > 0);
    }
}
