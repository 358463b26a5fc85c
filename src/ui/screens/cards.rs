use crate::domain::{CardColor, CardKind};
use crate::ui::app::App;
use crate::ui::card_form::{CardDraft, CardField, CardFormState};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{card_color, ACCENT, BRAND, GLOBAL_BORDER, MUTED, POPUP_BORDER, STATUS_ERROR, TEXT};
use crate::ui::widgets::{button, card_visual, screen_header, text_field, ButtonState, BUTTON_HEIGHT, CARD_HEIGHT};
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const FORM_WIDTH: u16 = 52;
const FORM_HEIGHT: u16 = 20;

/// Rows taken by one entry in the list: card face plus action line.
const ENTRY_HEIGHT: u16 = CARD_HEIGHT + 1;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let cards = app.store().cards();
    let [header, list, add, note] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let subtitle = format!("{} cartões vinculados", cards.len());
    frame.render_widget(screen_header("Meus Cartões", Some(&subtitle)), header);

    let visible = (list.height / ENTRY_HEIGHT).max(1) as usize;
    let first = first_visible(app.card_selection(), visible);
    let mut y = list.y;
    for (index, card) in cards.iter().enumerate().skip(first).take(visible) {
        if y + ENTRY_HEIGHT > list.y + list.height {
            break;
        }
        let selected = index == app.card_selection();
        let face = Rect {
            x: list.x,
            y,
            width: list.width.min(56),
            height: CARD_HEIGHT,
        };
        frame.render_widget(card_visual(card, false, selected), face);

        let actions = Rect {
            x: list.x,
            y: y + CARD_HEIGHT,
            width: list.width,
            height: 1,
        };
        let hint = if selected {
            Span::styled("Recarregar (Enter)", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        } else {
            Span::raw("")
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", card.kind.label().to_uppercase()),
                    Style::default().fg(card_color(card.color)).add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                hint,
            ])),
            actions,
        );
        y += ENTRY_HEIGHT;
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            "+ Adicionar Novo Cartão (n)",
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        )),
        add,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Seus cartões são armazenados localmente e criptografados para sua segurança. \
             Em caso de perda, solicite o bloqueio no terminal físico.",
            Style::default().fg(MUTED),
        ))
        .wrap(Wrap { trim: true }),
        note,
    );
}

/// First list index to draw so that `selected` stays on screen.
pub fn first_visible(selected: usize, visible: usize) -> usize {
    selected.saturating_sub(visible.saturating_sub(1))
}

/// The "Novo Cartão" modal, drawn over the whole frame.
pub fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let CardFormState::Open {
        draft,
        focus,
        show_required,
    } = app.card_form()
    else {
        return;
    };

    let popup = centered_rect_by_size(area, FORM_WIDTH, FORM_HEIGHT);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(
            " Novo Cartão ",
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(" Esc fechar ", Style::default().fg(MUTED)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(popup).inner(Margin::new(2, 1));
    frame.render_widget(block, popup);

    let [fields, save] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)]).areas(inner);

    let mut lines = Vec::new();
    lines.extend(text_field(
        "Apelido do Cartão",
        &draft.name,
        "Ex: Pessoal, Trabalho...",
        *focus == CardField::Name,
        false,
    ));
    lines.push(required(*show_required && draft.name.is_empty()));
    lines.extend(text_field(
        "Número do Cartão",
        &draft.number,
        "0000 0000 0000 0000",
        *focus == CardField::Number,
        false,
    ));
    lines.push(required(*show_required && draft.number.is_empty()));
    lines.extend(selector_lines(draft, *focus));
    frame.render_widget(Paragraph::new(lines), fields);

    frame.render_widget(
        button("Salvar Cartão", ButtonState::Enabled, *focus == CardField::Save),
        save,
    );
}

fn selector_lines(draft: &CardDraft, focus: CardField) -> Vec<Line<'static>> {
    let label = Style::default().fg(MUTED).add_modifier(Modifier::BOLD);
    let marker = |field: CardField| {
        if focus == field {
            Span::styled("▸ ", Style::default().fg(ACCENT))
        } else {
            Span::raw("  ")
        }
    };

    let mut kind_line = vec![marker(CardField::Kind)];
    for kind in CardKind::ALL {
        let style = if kind == draft.kind {
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(MUTED)
        };
        kind_line.push(Span::styled(format!(" {} ", kind.short_label()), style));
        kind_line.push(Span::raw(" "));
    }

    let mut color_line = vec![marker(CardField::Color)];
    for color in CardColor::ALL {
        let swatch = if color == draft.color { "(●)" } else { " ● " };
        color_line.push(Span::styled(swatch, Style::default().fg(card_color(color))));
        color_line.push(Span::raw(" "));
    }
    color_line.push(Span::styled(
        draft.color.label(),
        Style::default().fg(GLOBAL_BORDER),
    ));

    vec![
        Line::from(Span::styled("TIPO", label)),
        Line::from(kind_line),
        Line::from(Span::styled("COR", label)),
        Line::from(color_line),
    ]
}

fn required(show: bool) -> Line<'static> {
    if show {
        Line::from(Span::styled("  Preencha este campo.", Style::default().fg(STATUS_ERROR)))
    } else {
        Line::from("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_window() {
        assert_eq!(first_visible(0, 3), 0);
        assert_eq!(first_visible(2, 3), 0);
        assert_eq!(first_visible(3, 3), 1);
        assert_eq!(first_visible(5, 1), 5);
        assert_eq!(first_visible(4, 0), 4);
    }
}
