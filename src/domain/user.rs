#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub photo_url: String,
}

impl User {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Two-letter monogram used where the photo would be.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_name_and_initials() {
        let user = User {
            id: "u1".into(),
            name: "Carlos Oliveira".into(),
            email: "carlos.oliveira@email.com".into(),
            photo_url: String::new(),
        };
        assert_eq!(user.first_name(), "Carlos");
        assert_eq!(user.initials(), "CO");
    }
}
