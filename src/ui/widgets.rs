//! Building blocks shared by several screens.

use crate::domain::Card;
use crate::ui::theme::{card_color, ACCENT, BRAND_DARK, GLOBAL_BORDER, MUTED, TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const CARD_HEIGHT: u16 = 8;
pub const COMPACT_CARD_HEIGHT: u16 = 7;
pub const BUTTON_HEIGHT: u16 = 3;

pub fn spinner(tick: u8) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Title plus optional subtitle, two lines.
pub fn screen_header(title: &str, subtitle: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = subtitle {
        lines.push(Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(MUTED),
        )));
    }
    Paragraph::new(lines)
}

/// The colored card face: type badge, balance, masked number.
pub fn card_visual(card: &Card, compact: bool, selected: bool) -> Paragraph<'static> {
    let face = card_color(card.color);
    let text = Style::default().fg(TEXT).bg(face);
    let label = text.add_modifier(Modifier::DIM);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(")))", label),
            Span::styled("  ", text),
            Span::styled(
                format!(" {} ", card.kind.label().to_uppercase()),
                Style::default().fg(BRAND_DARK).bg(TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(card.name.clone(), text)),
    ];
    if !compact {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled("SALDO ATUAL", label)));
    lines.push(Line::from(vec![
        Span::styled(card.balance.to_string(), text.add_modifier(Modifier::BOLD)),
        Span::styled("    ", text),
        Span::styled(card.masked_number(), label),
    ]));

    let border = if selected {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(face)
    };

    Paragraph::new(lines).style(Style::default().bg(face)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Enabled,
    Disabled,
    /// Secondary action: plain text, no fill.
    Ghost,
    /// Shows a spinner instead of the label.
    Loading { tick: u8 },
}

pub fn button(label: &str, state: ButtonState, focused: bool) -> Paragraph<'static> {
    let (content, style) = match state {
        ButtonState::Enabled => (
            label.to_string(),
            Style::default().fg(BRAND_DARK).bg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        ButtonState::Disabled => (
            label.to_string(),
            Style::default().fg(MUTED).add_modifier(Modifier::DIM),
        ),
        ButtonState::Ghost => (label.to_string(), Style::default().fg(TEXT)),
        ButtonState::Loading { tick } => (
            spinner(tick).to_string(),
            Style::default().fg(BRAND_DARK).bg(ACCENT),
        ),
    };
    let border = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };
    Paragraph::new(Line::from(Span::styled(content, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        )
}

/// Label line plus value line for a text field.
pub fn text_field(
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    masked: bool,
) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(MUTED).add_modifier(Modifier::BOLD);
    let shown = if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(MUTED).add_modifier(Modifier::DIM))
    } else if masked {
        Span::styled("•".repeat(value.chars().count()), Style::default().fg(TEXT))
    } else {
        Span::styled(value.to_string(), Style::default().fg(TEXT))
    };
    let marker = if focused {
        Span::styled("▸ ", Style::default().fg(ACCENT))
    } else {
        Span::raw("  ")
    };
    let mut value_line = vec![marker, shown];
    if focused {
        value_line.push(Span::styled("▏", Style::default().fg(ACCENT)));
    }
    vec![
        Line::from(Span::styled(label.to_uppercase(), label_style)),
        Line::from(value_line),
    ]
}
