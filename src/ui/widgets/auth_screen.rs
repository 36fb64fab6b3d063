//! Auth gate screen: provider details or setup instructions

use crate::auth::{AuthGate, ClerkProvider, DASHBOARD_URL, ENV_SAMPLE, SETUP_STEPS};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Title of the missing-key alert
pub const MISSING_KEY_TITLE: &str = "No Publishable Key Found!";

/// Title of the closing note
pub const OPTIONAL_TITLE: &str = "Clerk Integration is Optional";

/// Renders an [`AuthGate`]
pub struct AuthScreen<'a> {
    gate: &'a AuthGate,
    theme: &'a Theme,
}

impl<'a> AuthScreen<'a> {
    /// Create the screen for a resolved gate
    #[must_use]
    pub const fn new(gate: &'a AuthGate, theme: &'a Theme) -> Self {
        Self { gate, theme }
    }

    fn mounted_lines(&self, provider: &'a ClerkProvider) -> Vec<Line<'a>> {
        let key = provider.key();
        let mut lines = vec![
            Line::from(Span::styled("Clerk mounted", self.theme.success_style())),
            Line::default(),
            Line::from(vec![
                Span::styled("Key       ", self.theme.muted_style()),
                Span::styled(key.redacted(), self.theme.code_style()),
                Span::styled(format!("  ({})", key.instance().as_str()), self.theme.muted_style()),
            ]),
            Line::from(vec![
                Span::styled("Frontend  ", self.theme.muted_style()),
                Span::styled(key.frontend_api(), self.theme.normal_style()),
            ]),
            Line::default(),
        ];

        for (label, route) in provider.routes() {
            lines.push(Line::from(vec![
                Span::styled(format!("{label:<18}"), self.theme.muted_style()),
                Span::styled(route, self.theme.normal_style()),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Run ", self.theme.muted_style()),
            Span::styled("inspector auth --open", self.theme.key_style()),
            Span::styled(" to sign in.", self.theme.muted_style()),
        ]));
        lines
    }

    fn missing_key_lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(Span::styled(MISSING_KEY_TITLE, self.theme.warning_style())),
            Line::from(vec![
                Span::styled(
                    "You need to generate a publishable key from Clerk and put it inside the ",
                    self.theme.muted_style(),
                ),
                Span::styled(".env", self.theme.code_style()),
                Span::styled(" file.", self.theme.muted_style()),
            ]),
            Line::default(),
            Line::from(Span::styled("Set your Clerk API key", self.theme.heading_style())),
        ];

        for (i, step) in SETUP_STEPS.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), self.theme.key_style()),
                Span::styled(*step, self.theme.normal_style()),
            ]));
        }

        lines.extend([
            Line::from(Span::styled(DASHBOARD_URL, self.theme.info_style())),
            Line::default(),
            Line::from(Span::styled(
                "The final result should resemble the following:",
                self.theme.muted_style(),
            )),
            Line::from(Span::styled(ENV_SAMPLE, self.theme.code_style())),
            Line::default(),
            Line::from(Span::styled(OPTIONAL_TITLE, self.theme.heading_style())),
            Line::from(Span::styled(
                "The integration lives entirely in the auth module. Leave the key unset to skip it.",
                self.theme.muted_style(),
            )),
        ]);
        lines
    }
}

impl Widget for AuthScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = match self.gate {
            AuthGate::Mounted(provider) => self.mounted_lines(provider),
            AuthGate::MissingKey => self.missing_key_lines(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style())
            .title(" Auth ");

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
