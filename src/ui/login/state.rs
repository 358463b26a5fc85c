use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Cpf,
    Password,
}

impl LoginField {
    pub fn toggle(self) -> Self {
        match self {
            LoginField::Cpf => LoginField::Password,
            LoginField::Password => LoginField::Cpf,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFormState {
    Editing {
        cpf: String,
        password: String,
        focus: LoginField,
        /// Set after a submit with an empty field.
        show_required: bool,
    },
    /// Credentials accepted, waiting for the simulated authentication delay.
    Authenticating,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::Editing {
            cpf: String::new(),
            password: String::new(),
            focus: LoginField::Cpf,
            show_required: false,
        }
    }
}

impl UiState for LoginFormState {}

impl LoginFormState {
    pub fn is_authenticating(&self) -> bool {
        matches!(self, Self::Authenticating)
    }
}
