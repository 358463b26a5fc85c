//! Navigation chrome: sidebar for wide terminals, bottom bar for narrow ones.

use crate::domain::{Tab, User};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, BRAND, GLOBAL_BORDER, MUTED, STATUS_ERROR, TEXT};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_sidebar(frame: &mut Frame, area: Rect, current: Tab, user: &User) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [brand, items, account] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(5),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" 🚌 ", Style::default().fg(ACCENT)),
            Span::styled("Mobi Facil", Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
        ])),
        brand,
    );

    let lines: Vec<Line> = Tab::ALL
        .iter()
        .flat_map(|tab| {
            let active = *tab == current;
            let style = if active {
                Style::default()
                    .fg(BRAND)
                    .bg(TEXT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            [
                Line::from(vec![
                    Span::styled(format!(" {} ", tab.index() + 1), style.add_modifier(Modifier::DIM)),
                    Span::styled(format!("{:<20}", tab.long_label()), style),
                ]),
                Line::from(""),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), items);

    let account_lines = vec![
        Line::from(Span::styled(
            "─".repeat(account.width as usize),
            Style::default().fg(GLOBAL_BORDER),
        )),
        Line::from(Span::styled(
            format!(" {}", user.name),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!(" {}", user.email), Style::default().fg(MUTED))),
        Line::from(""),
        Line::from(Span::styled(" ⏻ Sair da conta (Ctrl+L)", Style::default().fg(STATUS_ERROR))),
    ];
    frame.render_widget(Paragraph::new(account_lines), account);
}

pub fn bottom_nav(current: Tab) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (idx, tab) in Tab::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("   ", Style::default()));
        }
        let style = if *tab == current {
            Style::default()
                .fg(BRAND)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        spans.push(Span::styled(format!(" {} {} ", tab.index() + 1, tab.short_label()), style));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}
