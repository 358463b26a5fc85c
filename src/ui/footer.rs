use crate::ui::theme::{GLOBAL_BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints on the left, version on the right.
pub struct Footer<'a> {
    hints: &'a str,
    notice: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(hints: &'a str) -> Self {
        Self {
            hints,
            notice: None,
        }
    }

    /// Transient message shown instead of the hints.
    pub fn notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let left = format!(" {}", self.notice.unwrap_or(self.hints));
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: hints contain arrows and accents.
        let left_width = left.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(left_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
        let left_style = if self.notice.is_some() {
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
        } else {
            text_style
        };

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
