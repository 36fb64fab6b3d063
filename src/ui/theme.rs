//! Color theme for the TUI
//!
//! Defines colors and styles used throughout the application.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Brand color: active drop zone, logo, headings
    pub primary: Color,
    /// Secondary brand color for decorations
    pub accent: Color,
    /// Body text
    pub foreground: Color,
    /// Secondary text
    pub muted: Color,
    /// Background for the selected row
    pub selection_bg: Color,
    /// Foreground for the selected row
    pub selection_fg: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Faint decoration color (grid lines, orbs)
    pub faint: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Indexed(99),
            accent: Color::Cyan,
            foreground: Color::White,
            muted: Color::Gray,
            selection_bg: Color::Indexed(60),
            selection_fg: Color::White,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            faint: Color::Indexed(236),
        }
    }

    /// Style for the brand color
    #[must_use]
    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Bold brand style for headings and the active drop zone text
    #[must_use]
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for body text
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Style for secondary text
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for the row under the cursor
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key names in hints
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for inline code (`.env`, variable names)
    #[must_use]
    pub fn code_style(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .bg(self.faint)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for background decorations
    #[must_use]
    pub fn faint_style(&self) -> Style {
        Style::default().fg(self.faint)
    }
}
