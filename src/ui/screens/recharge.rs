use crate::domain::Money;
use crate::ui::app::App;
use crate::ui::recharge::{AmountInput, RechargeDraft, RechargeFlowState, IDEAL_PRESET, PRESET_AMOUNTS};
use crate::ui::theme::{ACCENT, BRAND, BRAND_DARK, GLOBAL_BORDER, MUTED, STATUS_OK, TEXT};
use crate::ui::widgets::{
    button, card_visual, screen_header, spinner, ButtonState, BUTTON_HEIGHT, COMPACT_CARD_HEIGHT,
};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const PAYMENT_METHODS: [&str; 3] = ["Pix", "Cartão", "Banco"];

/// Text of the pay button.
pub fn pay_label(amount: Option<Money>) -> String {
    match amount {
        Some(amount) if !amount.as_decimal().is_zero() => format!("Pagar {amount}"),
        _ => "Digite um valor".to_string(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    match app.recharge_flow() {
        RechargeFlowState::Success { amount, card_name } => {
            render_success(frame, area, *amount, card_name)
        }
        RechargeFlowState::Selecting(draft) => render_selection(frame, area, app, Some(draft)),
        RechargeFlowState::Processing { .. } => render_selection(frame, area, app, None),
    }
}

fn render_selection(frame: &mut Frame, area: Rect, app: &App, draft: Option<&RechargeDraft>) {
    let [header, target, card_area, amounts, methods, pay, badge] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(COMPACT_CARD_HEIGHT),
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        screen_header("Recarga", Some("Escolha o valor e o cartão")),
        header,
    );

    let label = Style::default().fg(MUTED).add_modifier(Modifier::BOLD);
    let selected = app.recharge_card();
    let target_line = match selected {
        Some(card) => Line::from(vec![
            Span::styled("▾ ", Style::default().fg(ACCENT)),
            Span::styled(
                format!("{} {}", card.name, card.masked_number()),
                Style::default().fg(TEXT),
            ),
            Span::styled("   ↑/↓ trocar", Style::default().fg(MUTED)),
        ]),
        None => Line::from(Span::styled("Nenhum cartão", Style::default().fg(MUTED))),
    };
    frame.render_widget(
        Paragraph::new(vec![Line::from(Span::styled("CARTÃO DE DESTINO", label)), target_line]),
        target,
    );
    if let Some(card) = selected {
        let face = Rect {
            width: card_area.width.min(56),
            ..card_area
        };
        frame.render_widget(card_visual(card, true, false), face);
    }

    frame.render_widget(amount_block(draft), amounts);

    let mut method_spans = vec![];
    for (index, method) in PAYMENT_METHODS.iter().enumerate() {
        let style = if index == 0 {
            Style::default().fg(TEXT).bg(BRAND_DARK).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        method_spans.push(Span::styled(format!(" {} ", method.to_uppercase()), style));
        method_spans.push(Span::raw("  "));
    }
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("FORMA DE PAGAMENTO", label)),
            Line::from(method_spans),
        ]),
        methods,
    );

    let (text, state) = match draft {
        Some(draft) if draft.can_pay() => (pay_label(draft.amount()), ButtonState::Enabled),
        Some(draft) => (pay_label(draft.amount()), ButtonState::Disabled),
        None => (
            String::new(),
            ButtonState::Loading {
                tick: app.animation_tick(),
            },
        ),
    };
    let pay_area = Rect {
        width: pay.width.min(56),
        ..pay
    };
    frame.render_widget(button(&text, state, false), pay_area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "🏛 PAGAMENTO 100% SEGURO",
            Style::default().fg(MUTED),
        ))
        .alignment(Alignment::Left),
        badge,
    );
}

fn amount_block(draft: Option<&RechargeDraft>) -> Paragraph<'static> {
    let label = Style::default().fg(MUTED).add_modifier(Modifier::BOLD);
    let amount = draft.map(|draft| &draft.amount);
    let toggle = if amount.is_some_and(AmountInput::is_manual) {
        "Sugestões (m)"
    } else {
        "Valor manual (m)"
    };
    let mut lines = vec![Line::from(vec![
        Span::styled("SELECIONE O VALOR", label),
        Span::styled(format!("   {toggle}"), Style::default().fg(BRAND)),
    ])];

    match amount {
        Some(AmountInput::Manual(text)) => {
            let shown = if text.is_empty() {
                Span::styled("0,00", Style::default().fg(MUTED).add_modifier(Modifier::DIM))
            } else {
                Span::styled(text.clone(), Style::default().fg(TEXT).add_modifier(Modifier::BOLD))
            };
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("R$ ", Style::default().fg(MUTED).add_modifier(Modifier::BOLD)),
                shown,
                Span::styled("▏", Style::default().fg(ACCENT)),
            ]));
        }
        Some(AmountInput::Preset(picked)) => {
            lines.push(Line::from(""));
            lines.push(preset_line(*picked));
            lines.push(Line::from(Span::styled("←/→ escolher", Style::default().fg(MUTED))));
        }
        None => {
            lines.push(Line::from(""));
            lines.push(preset_line(None));
        }
    }
    Paragraph::new(lines)
}

fn preset_line(picked: Option<usize>) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, reais) in PRESET_AMOUNTS.iter().enumerate() {
        let style = if picked == Some(index) {
            Style::default().fg(BRAND_DARK).bg(TEXT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(format!(" {} ", Money::from_reais(*reais)), style));
        if *reais == IDEAL_PRESET {
            spans.push(Span::styled(
                "IDEAL",
                Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(Span::styled(" │ ", Style::default().fg(GLOBAL_BORDER)));
    }
    spans.pop();
    Line::from(spans)
}

fn render_success(frame: &mut Frame, area: Rect, amount: Money, card_name: &str) {
    let [_, message, new, home, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(6),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "✔",
                Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Pagamento Confirmado!",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("O valor de ", Style::default().fg(MUTED)),
                Span::styled(
                    amount.to_string(),
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" foi enviado para o cartão ", Style::default().fg(MUTED)),
                Span::styled(card_name.to_string(), Style::default().fg(BRAND)),
                Span::styled(".", Style::default().fg(MUTED)),
            ]),
        ])
        .alignment(Alignment::Center),
        message,
    );

    let column = |row: Rect| Rect {
        x: row.x + row.width.saturating_sub(36) / 2,
        width: row.width.min(36),
        ..row
    };
    frame.render_widget(button("Nova Recarga (Enter)", ButtonState::Enabled, true), column(new));
    frame.render_widget(
        button("Voltar ao Início (v)", ButtonState::Ghost, false),
        column(home),
    );
}

/// Spinner frame shown in the footer while the payment is processing.
pub fn processing_hint(tick: u8) -> String {
    format!("{} Processando pagamento...", spinner(tick))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pay_label_needs_nonzero_amount() {
        assert_eq!(pay_label(None), "Digite um valor");
        assert_eq!(pay_label(Some(Money::ZERO)), "Digite um valor");
        assert_eq!(pay_label(Some(Money::from_reais(50))), "Pagar R$ 50,00");
        assert_eq!(pay_label(Some(Money::from_cents(1234))), "Pagar R$ 12,34");
    }
}
