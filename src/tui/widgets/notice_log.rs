//! Notice log widget.
//!
//! User-facing messages (validation failures, request results) and
//! diagnostic detail for failed requests are collected as notices and
//! rendered in a bordered panel, most recent at the bottom. This is the
//! client's only logging surface.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::Theme;

/// Maximum notices kept in memory; older ones are dropped from the front.
pub const MAX_NOTICES: usize = 200;

/// Notice severity, used for styling and for distinguishing user-facing
/// alerts from informational lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Informational message.
    Info,
    /// Operation succeeded.
    Success,
    /// Validation failure (local, no request issued).
    Warning,
    /// Request failure.
    Error,
}

/// A single user-visible message.
#[derive(Debug, Clone)]
pub struct Notice {
    /// The message text.
    pub text: String,
    /// Severity for styling.
    pub kind: NoticeKind,
}

impl Notice {
    /// Creates an informational notice.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: format!("  {}", text.into()),
            kind: NoticeKind::Info,
        }
    }

    /// Creates a success notice.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: format!("+ {}", text.into()),
            kind: NoticeKind::Success,
        }
    }

    /// Creates a validation-failure notice.
    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: format!("! {}", text.into()),
            kind: NoticeKind::Warning,
        }
    }

    /// Creates a request-failure notice.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: format!("✗ {}", text.into()),
            kind: NoticeKind::Error,
        }
    }

    /// Returns true for notices the user would perceive as an alert.
    #[must_use]
    pub fn is_alert(&self) -> bool {
        matches!(self.kind, NoticeKind::Warning | NoticeKind::Error)
    }
}

/// A bordered panel showing the most recent notices.
pub struct NoticeLogWidget<'a> {
    notices: &'a [Notice],
    theme: &'a Theme,
}

impl<'a> NoticeLogWidget<'a> {
    /// Creates a notice log widget over the given notices.
    #[must_use]
    pub const fn new(notices: &'a [Notice], theme: &'a Theme) -> Self {
        Self { notices, theme }
    }

    fn style_for(&self, kind: NoticeKind) -> ratatui::style::Style {
        match kind {
            NoticeKind::Info => self.theme.muted_style(),
            NoticeKind::Success => self.theme.success_style(),
            NoticeKind::Warning => self.theme.warning_style(),
            NoticeKind::Error => self.theme.error_style(),
        }
    }
}

impl Widget for NoticeLogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Messages ")
            .title_style(self.theme.header_style())
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());
        let inner_height = block.inner(area).height as usize;

        // Show the newest notices that fit.
        let start = self.notices.len().saturating_sub(inner_height);
        let lines: Vec<Line<'_>> = self.notices[start..]
            .iter()
            .map(|notice| {
                Line::from(Span::styled(
                    notice.text.clone(),
                    self.style_for(notice.kind),
                ))
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
