use crate::ui::app::App;
use crate::ui::layout::{centered_rect_by_size, LOGIN_PANEL_HEIGHT, LOGIN_PANEL_WIDTH};
use crate::ui::login::{LoginField, LoginFormState};
use crate::ui::theme::{ACCENT, BRAND, GLOBAL_BORDER, MUTED, STATUS_ERROR, TEXT};
use crate::ui::widgets::{button, text_field, ButtonState, BUTTON_HEIGHT};
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

const REQUIRED: &str = "  Preencha este campo.";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let panel = centered_rect_by_size(area, LOGIN_PANEL_WIDTH, LOGIN_PANEL_HEIGHT);
    frame.render_widget(Clear, panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(panel).inner(Margin::new(2, 1));
    frame.render_widget(block, panel);

    let [brand, fields, submit, links] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(7),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("🚌", Style::default().fg(ACCENT))),
            Line::from(Span::styled(
                "Mobi Facil",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Sua mobilidade sem complicação",
                Style::default().fg(MUTED),
            )),
        ])
        .alignment(Alignment::Center),
        brand,
    );

    let authenticating = app.login_form().is_authenticating();
    let mut lines = Vec::new();
    match app.login_form() {
        LoginFormState::Editing {
            cpf,
            password,
            focus,
            show_required,
        } => {
            lines.extend(text_field("CPF", cpf, "000.000.000-00", *focus == LoginField::Cpf, false));
            lines.push(required_line(*show_required && cpf.is_empty()));
            lines.extend(text_field(
                "Senha",
                password,
                "••••••••",
                *focus == LoginField::Password,
                true,
            ));
            lines.push(required_line(*show_required && password.is_empty()));
        }
        LoginFormState::Authenticating => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Autenticando...",
                Style::default().fg(MUTED),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines), fields);

    let state = if authenticating {
        ButtonState::Loading {
            tick: app.animation_tick(),
        }
    } else {
        ButtonState::Enabled
    };
    frame.render_widget(button("Entrar", state, false), submit);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Esqueceu sua senha?", Style::default().fg(ACCENT))),
            Line::from(vec![
                Span::styled("Não tem uma conta? ", Style::default().fg(MUTED)),
                Span::styled(
                    "Cadastre-se agora",
                    Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
                ),
            ]),
        ])
        .alignment(Alignment::Center),
        links,
    );
}

fn required_line(show: bool) -> Line<'static> {
    if show {
        Line::from(Span::styled(REQUIRED, Style::default().fg(STATUS_ERROR)))
    } else {
        Line::from("")
    }
}
