use chrono::{Local, Timelike};

use crate::domain::Transaction;
use crate::ui::app::App;
use crate::ui::theme::{
    line_status_color, ACCENT, BRAND, BRAND_DARK, GLOBAL_BORDER, MUTED, STATUS_OK, TEXT,
};
use crate::ui::widgets::{card_visual, CARD_HEIGHT};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Number of transactions listed under "Atividade Recente".
pub const RECENT_LIMIT: usize = 3;

const TIP: &str = "\"Use sempre a faixa de pedestres ao desembarcar. Segurança no trânsito é responsabilidade de todos!\"";

pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Bom dia"
    } else if hour < 18 {
        "Boa tarde"
    } else {
        "Boa noite"
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let [header, body] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let user = app.user();
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{},", greeting(Local::now().hour())),
                Style::default().fg(MUTED),
            )),
            Line::from(vec![
                Span::styled(
                    format!("{}!", user.first_name()),
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  [{}]", user.initials()),
                    Style::default().fg(ACCENT),
                ),
            ]),
        ]),
        header,
    );

    let (left, right) = if body.width >= 90 {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);
        (left, right)
    } else {
        let [top, bottom] =
            Layout::vertical([Constraint::Length(CARD_HEIGHT + 10), Constraint::Min(0)]).areas(body);
        (top, bottom)
    };

    render_card_column(frame, left, app);
    render_activity_column(frame, right, app);
}

fn render_card_column(frame: &mut Frame, area: Rect, app: &App) {
    let [title, card, action, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(CARD_HEIGHT),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                "Cartão Principal",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Ver todos (c)", Style::default().fg(BRAND)),
        ])),
        title,
    );

    match app.store().state().primary_card() {
        Some(primary) => frame.render_widget(card_visual(primary, false, false), card),
        None => frame.render_widget(
            Paragraph::new(Span::styled("Nenhum cartão.", Style::default().fg(MUTED))),
            card,
        ),
    }

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(" → ", Style::default().fg(BRAND_DARK).bg(ACCENT)),
                Span::styled(
                    "  Recarregar (r)",
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled("     Saldo imediato via Pix", Style::default().fg(MUTED))),
        ])
        .block(rounded()),
        action,
    );

    let mut lines = vec![Line::from(vec![
        Span::styled(
            "Status das Linhas",
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("   AO VIVO", Style::default().fg(MUTED)),
    ])];
    for entry in app.service_status() {
        let color = line_status_color(entry.status);
        lines.push(Line::from(vec![
            Span::styled(format!("{:<16}", entry.line), Style::default().fg(TEXT)),
            Span::styled("● ", Style::default().fg(color)),
            Span::styled(
                entry.status.label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", entry.updated_at), Style::default().fg(MUTED)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).block(rounded()), status);
}

fn render_activity_column(frame: &mut Frame, area: Rect, app: &App) {
    let [tip, activity] = Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "🛡 Dica do Guarda de Trânsito",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(TIP, Style::default().fg(TEXT))),
        ])
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(BRAND))
        .block(rounded().border_style(Style::default().fg(BRAND))),
        tip,
    );

    let transactions = app.store().transactions();
    let mut lines = vec![Line::from(Span::styled(
        "Atividade Recente",
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ))];
    if transactions.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nenhuma atividade recente.",
            Style::default().fg(MUTED),
        )));
    }
    for transaction in transactions.iter().take(RECENT_LIMIT) {
        lines.extend(transaction_lines(transaction));
    }
    frame.render_widget(Paragraph::new(lines).block(rounded()), activity);
}

fn transaction_lines(transaction: &Transaction) -> [Line<'static>; 2] {
    let amount_style = if transaction.is_credit() {
        Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
    };
    let date = transaction.date.with_timezone(&Local).format("%d/%m/%Y");
    [
        Line::from(vec![
            Span::styled(format!("{:<28}", transaction.description), Style::default().fg(TEXT)),
            Span::styled(transaction.signed_display(), amount_style),
        ]),
        Line::from(Span::styled(date.to_string(), Style::default().fg(MUTED))),
    ]
}

fn rounded() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}
