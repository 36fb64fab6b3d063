//! Themed main content wrapper
//!
//! Draws the background decoration for the chosen [`Variant`] and hands
//! back the padded area the screen content goes into.

use crate::ui::error::UiError;
use crate::ui::theme::Theme;
use clap::ValueEnum;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Widest content column when the layout is not fluid
pub const MAX_CONTENT_WIDTH: u16 = 128;

/// Visual variant of the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// No decoration
    Default,
    /// Frosted panel with a faint grid
    #[default]
    Glassmorphism,
    /// Coloured orbs behind the content
    Gradient,
    /// Glow that follows the mouse
    Particles,
    /// Bright border with a faint grid
    Neon,
}

impl Variant {
    /// Every variant, in display order
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Glassmorphism,
        Self::Gradient,
        Self::Particles,
        Self::Neon,
    ];

    /// Name as used in config and on the command line
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Glassmorphism => "glassmorphism",
            Self::Gradient => "gradient",
            Self::Particles => "particles",
            Self::Neon => "neon",
        }
    }

    /// Whether the variant reacts to mouse movement
    #[must_use]
    pub const fn tracks_pointer(&self) -> bool {
        matches!(self, Self::Particles)
    }

    /// Whether the variant draws the grid overlay
    #[must_use]
    pub const fn has_grid(&self) -> bool {
        matches!(self, Self::Glassmorphism | Self::Neon)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| {
                UiError::InvalidConfig(format!(
                    "unknown layout variant '{s}' (expected one of: default, glassmorphism, gradient, particles, neon)"
                ))
            })
    }
}

/// Layout mode, `fixed` or `auto`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Fill the available height
    Fixed,
    /// Take only the height the content asks for
    Auto,
}

impl LayoutMode {
    /// Mode name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Auto => "auto",
        }
    }
}

/// Position of `column`/`row` relative to `area`, if inside it
#[must_use]
pub const fn relative_position(area: Rect, column: u16, row: u16) -> Option<(u16, u16)> {
    if column >= area.x
        && row >= area.y
        && column < area.x.saturating_add(area.width)
        && row < area.y.saturating_add(area.height)
    {
        Some((column - area.x, row - area.y))
    } else {
        None
    }
}

/// The main content wrapper
pub struct MainLayout<'a> {
    variant: Variant,
    fixed: bool,
    fluid: bool,
    pointer: Option<(u16, u16)>,
    content_height: Option<u16>,
    theme: &'a Theme,
}

impl<'a> MainLayout<'a> {
    /// Create a layout with the given variant
    #[must_use]
    pub const fn new(variant: Variant, theme: &'a Theme) -> Self {
        Self {
            variant,
            fixed: false,
            fluid: false,
            pointer: None,
            content_height: None,
            theme,
        }
    }

    /// Fill the available height
    #[must_use]
    pub const fn fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Use the full width
    #[must_use]
    pub const fn fluid(mut self, fluid: bool) -> Self {
        self.fluid = fluid;
        self
    }

    /// Pointer position relative to the layout area (particles only)
    #[must_use]
    pub const fn pointer(mut self, pointer: Option<(u16, u16)>) -> Self {
        self.pointer = pointer;
        self
    }

    /// Height the content needs, used in auto mode
    #[must_use]
    pub const fn content_height(mut self, height: u16) -> Self {
        self.content_height = Some(height);
        self
    }

    /// Current layout mode
    #[must_use]
    pub const fn mode(&self) -> LayoutMode {
        if self.fixed {
            LayoutMode::Fixed
        } else {
            LayoutMode::Auto
        }
    }

    /// Area the decorated panel occupies within `area`
    #[must_use]
    pub fn panel_area(&self, area: Rect) -> Rect {
        let width = if self.fluid {
            area.width
        } else {
            area.width.min(MAX_CONTENT_WIDTH)
        };
        let x = area.x + (area.width - width) / 2;

        // 2 rows of border and padding around the content
        let height = match (self.mode(), self.content_height) {
            (LayoutMode::Auto, Some(content)) => content.saturating_add(4).min(area.height),
            _ => area.height,
        };

        Rect::new(x, area.y, width, height)
    }

    /// Area the screen content is drawn into
    #[must_use]
    pub fn content_area(&self, area: Rect) -> Rect {
        let panel = self.panel_area(area);
        let horizontal = 2u16.min(panel.width / 2);
        let vertical = 2u16.min(panel.height / 2);
        Rect::new(
            panel.x + horizontal,
            panel.y + vertical,
            panel.width - horizontal * 2,
            panel.height - vertical * 2,
        )
    }

    fn border(&self) -> Option<Block<'static>> {
        let block = Block::default().borders(Borders::ALL);
        match self.variant {
            Variant::Default => None,
            Variant::Glassmorphism => Some(
                block
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.border_style()),
            ),
            Variant::Gradient => Some(
                block
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Magenta)),
            ),
            Variant::Particles => Some(
                block
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.primary_style()),
            ),
            Variant::Neon => Some(
                block
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(Color::LightMagenta)),
            ),
        }
    }

    fn draw_grid(&self, panel: Rect, buf: &mut Buffer) {
        let style = self.theme.faint_style();
        for y in (panel.y + 1..panel.bottom().saturating_sub(1)).step_by(2) {
            for x in (panel.x + 2..panel.right().saturating_sub(1)).step_by(4) {
                buf[(x, y)].set_symbol("·").set_style(style);
            }
        }
    }

    fn draw_orbs(panel: Rect, buf: &mut Buffer) {
        let orbs = [
            (panel.x, panel.y, Color::Magenta, 0.35),
            (panel.right(), panel.bottom(), Color::Blue, 0.45),
            (
                panel.x + panel.width / 2,
                panel.y + panel.height / 2,
                Color::LightMagenta,
                0.3,
            ),
        ];

        for (cx, cy, color, scale) in orbs {
            let radius = f64::from(panel.height.min(panel.width / 2)) * scale;
            fill_ellipse(panel, buf, (cx, cy), radius, "░", Style::default().fg(color));
        }
    }

    fn draw_glow(&self, panel: Rect, buf: &mut Buffer, pointer: (u16, u16)) {
        let center = (panel.x + pointer.0, panel.y + pointer.1);
        let radius = f64::from(panel.height.min(panel.width / 2)) / 3.0;
        fill_ellipse(panel, buf, center, radius, "▒", Style::default().fg(self.theme.primary));
        fill_ellipse(panel, buf, center, radius / 2.0, "▓", Style::default().fg(self.theme.primary));
    }
}

/// Fill cells within `radius` rows of `center`, with columns counted at half weight
fn fill_ellipse(area: Rect, buf: &mut Buffer, center: (u16, u16), radius: f64, symbol: &str, style: Style) {
    if radius <= 0.0 {
        return;
    }
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let dx = (f64::from(x) - f64::from(center.0)) / 2.0;
            let dy = f64::from(y) - f64::from(center.1);
            if dx.hypot(dy) <= radius {
                buf[(x, y)].set_symbol(symbol).set_style(style);
            }
        }
    }
}

impl Widget for MainLayout<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = self.panel_area(area);
        if panel.width < 4 || panel.height < 3 {
            return;
        }

        match self.variant {
            Variant::Gradient => Self::draw_orbs(panel, buf),
            Variant::Particles => {
                if let Some(pointer) = self.pointer {
                    self.draw_glow(panel, buf, pointer);
                }
            }
            Variant::Glassmorphism | Variant::Neon => self.draw_grid(panel, buf),
            Variant::Default => {}
        }

        if let Some(block) = self.border() {
            block.render(panel, buf);
        }
    }
}
