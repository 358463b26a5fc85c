use crate::ui::app::{App, ProfileItem};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, MUTED, STATUS_ERROR, TEXT};
use crate::ui::widgets::screen_header;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

pub fn version_line() -> String {
    format!("Versão {}", env!("CARGO_PKG_VERSION"))
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let [header, user_box, menu, version] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Length(ProfileItem::ALL.len() as u16 + 2),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(screen_header("Perfil", None), header);

    let user = app.user();
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", user.initials()),
                    Style::default().fg(TEXT).bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", user.name),
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(format!("      {}", user.email), Style::default().fg(MUTED))),
        ])
        .block(rounded()),
        user_box,
    );

    let lines: Vec<Line> = ProfileItem::ALL
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let selected = index == app.profile_selection();
            let base = if *item == ProfileItem::Logout {
                Style::default().fg(STATUS_ERROR)
            } else {
                Style::default().fg(TEXT)
            };
            let style = if selected {
                base.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD)
            } else {
                base
            };
            let mut spans = vec![
                Span::styled(if selected { "▸ " } else { "  " }, Style::default().fg(ACCENT)),
                Span::styled(format!("{:<28}", item.label()), style),
            ];
            if let Some(badge) = item.badge() {
                spans.push(Span::styled(
                    format!(" {badge} "),
                    Style::default().fg(TEXT).bg(STATUS_ERROR).add_modifier(Modifier::BOLD),
                ));
            }
            spans.push(Span::styled(" ›", Style::default().fg(MUTED)));
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(rounded()), menu);

    frame.render_widget(
        Paragraph::new(Span::styled(version_line(), Style::default().fg(MUTED))),
        version,
    );
}

fn rounded() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}
