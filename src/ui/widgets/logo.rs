//! The Inspector mark
//!
//! A filled circle with a cursor pointer over its lower right edge, drawn
//! on a braille canvas in a 100x100 coordinate space.

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    text::Span,
    widgets::{
        Paragraph, Widget,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};

/// Plain-text title shown next to the mark, and instead of it when the
/// area is too small
pub const TITLE: &str = "Inspector";

const CENTER: (f64, f64) = (42.0, 42.0);
const RADIUS: f64 = 38.0;

/// Pointer outline, in mark coordinates with y growing downwards
const POINTER: [(f64, f64); 9] = [
    (55.0, 45.0),
    (85.0, 75.0),
    (85.0, 85.0),
    (75.0, 85.0),
    (65.0, 75.0),
    (55.0, 85.0),
    (48.0, 82.0),
    (45.0, 55.0),
    (50.0, 46.0),
];

/// Canvas y for a mark y
const fn flip(y: f64) -> f64 {
    100.0 - y
}

/// Logo widget
pub struct Logo<'a> {
    theme: &'a Theme,
}

impl<'a> Logo<'a> {
    /// Create a new logo widget
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Logo<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 6 || area.height < 3 {
            Paragraph::new(Span::styled(TITLE, self.theme.heading_style())).render(area, buf);
            return;
        }

        let primary = self.theme.primary;
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, 100.0])
            .y_bounds([0.0, 100.0])
            .paint(move |ctx| {
                // Concentric rings fill the disc
                let mut radius = RADIUS;
                while radius > 0.0 {
                    ctx.draw(&Circle {
                        x: CENTER.0,
                        y: flip(CENTER.1),
                        radius,
                        color: primary,
                    });
                    radius -= 2.5;
                }
                ctx.layer();

                for (i, from) in POINTER.iter().enumerate() {
                    let to = POINTER[(i + 1) % POINTER.len()];
                    ctx.draw(&CanvasLine {
                        x1: from.0,
                        y1: flip(from.1),
                        x2: to.0,
                        y2: flip(to.1),
                        color: Color::White,
                    });
                }
            })
            .render(area, buf);
    }
}
