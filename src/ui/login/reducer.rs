use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::{LoginField, LoginFormState};
use crate::ui::mvi::Reducer;

/// Longest accepted input, either field.
pub const MAX_FIELD_LEN: usize = 32;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginFormState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Reset => LoginFormState::default(),
            LoginIntent::InputChar(ch) => match state {
                LoginFormState::Editing {
                    mut cpf,
                    mut password,
                    focus,
                    show_required,
                } => {
                    let field = match focus {
                        LoginField::Cpf => &mut cpf,
                        LoginField::Password => &mut password,
                    };
                    if !ch.is_control() && field.chars().count() < MAX_FIELD_LEN {
                        field.push(ch);
                    }
                    LoginFormState::Editing {
                        cpf,
                        password,
                        focus,
                        show_required,
                    }
                }
                other => other,
            },
            LoginIntent::Backspace => match state {
                LoginFormState::Editing {
                    mut cpf,
                    mut password,
                    focus,
                    show_required,
                } => {
                    match focus {
                        LoginField::Cpf => cpf.pop(),
                        LoginField::Password => password.pop(),
                    };
                    LoginFormState::Editing {
                        cpf,
                        password,
                        focus,
                        show_required,
                    }
                }
                other => other,
            },
            LoginIntent::SwitchField => match state {
                LoginFormState::Editing {
                    cpf,
                    password,
                    focus,
                    show_required,
                } => LoginFormState::Editing {
                    cpf,
                    password,
                    focus: focus.toggle(),
                    show_required,
                },
                other => other,
            },
            LoginIntent::Submit => match state {
                LoginFormState::Editing { cpf, password, .. }
                    if !cpf.is_empty() && !password.is_empty() =>
                {
                    LoginFormState::Authenticating
                }
                LoginFormState::Editing { cpf, password, .. } => {
                    // Jump to the first empty field, like a browser's required check.
                    let focus = if cpf.is_empty() {
                        LoginField::Cpf
                    } else {
                        LoginField::Password
                    };
                    LoginFormState::Editing {
                        cpf,
                        password,
                        focus,
                        show_required: true,
                    }
                }
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(state: LoginFormState, text: &str) -> LoginFormState {
        text.chars()
            .fold(state, |state, ch| LoginReducer::reduce(state, LoginIntent::InputChar(ch)))
    }

    #[test]
    fn submit_with_empty_fields_flags_required() {
        let state = LoginReducer::reduce(LoginFormState::default(), LoginIntent::Submit);
        assert!(matches!(
            state,
            LoginFormState::Editing {
                show_required: true,
                focus: LoginField::Cpf,
                ..
            }
        ));
    }

    #[test]
    fn submit_with_only_cpf_focuses_password() {
        let state = typed(LoginFormState::default(), "12345678900");
        let state = LoginReducer::reduce(state, LoginIntent::Submit);
        assert!(matches!(
            state,
            LoginFormState::Editing {
                focus: LoginField::Password,
                show_required: true,
                ..
            }
        ));
    }

    #[test]
    fn filled_form_starts_authenticating() {
        let state = typed(LoginFormState::default(), "123");
        let state = LoginReducer::reduce(state, LoginIntent::SwitchField);
        let state = typed(state, "secret");
        let state = LoginReducer::reduce(state, LoginIntent::Submit);
        assert!(state.is_authenticating());
    }

    #[test]
    fn input_ignored_while_authenticating() {
        let state = LoginReducer::reduce(LoginFormState::Authenticating, LoginIntent::InputChar('x'));
        assert_eq!(state, LoginFormState::Authenticating);
    }

    #[test]
    fn backspace_edits_focused_field() {
        let state = typed(LoginFormState::default(), "12");
        let state = LoginReducer::reduce(state, LoginIntent::Backspace);
        match state {
            LoginFormState::Editing { cpf, .. } => assert_eq!(cpf, "1"),
            other => panic!("Expected Editing, got {:?}", other),
        }
    }

    #[test]
    fn field_length_is_capped() {
        let long = "9".repeat(MAX_FIELD_LEN + 10);
        match typed(LoginFormState::default(), &long) {
            LoginFormState::Editing { cpf, .. } => assert_eq!(cpf.len(), MAX_FIELD_LEN),
            other => panic!("Expected Editing, got {:?}", other),
        }
    }
}
