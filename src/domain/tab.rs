/// Top-level screen selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Home,
    Cards,
    Recharge,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Cards, Tab::Recharge, Tab::Profile];

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Cards => 1,
            Tab::Recharge => 2,
            Tab::Profile => 3,
        }
    }

    /// Maps the `1`..`4` shortcut keys.
    pub fn from_digit(digit: char) -> Option<Tab> {
        let index = digit.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Label for the bottom navigation bar.
    pub fn short_label(&self) -> &'static str {
        match self {
            Tab::Home => "Início",
            Tab::Cards => "Cartões",
            Tab::Recharge => "Recarga",
            Tab::Profile => "Perfil",
        }
    }

    /// Label for the sidebar.
    pub fn long_label(&self) -> &'static str {
        match self {
            Tab::Home => "Início",
            Tab::Cards => "Meus Cartões",
            Tab::Recharge => "Recarga",
            Tab::Profile => "Meu Perfil",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_tabs() {
        assert_eq!(Tab::from_digit('1'), Some(Tab::Home));
        assert_eq!(Tab::from_digit('4'), Some(Tab::Profile));
        assert_eq!(Tab::from_digit('0'), None);
        assert_eq!(Tab::from_digit('5'), None);
        assert_eq!(Tab::from_digit('x'), None);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Tab::Profile.next(), Tab::Home);
        assert_eq!(Tab::Home.prev(), Tab::Profile);
    }
}
