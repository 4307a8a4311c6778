//! Password strength scoring for the signup and reset forms

/// Strength of a password, scored 0..=4
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordStrength(u8);

pub const MAX_SCORE: u8 = 4;

impl PasswordStrength {
    /// One point each for: 8+ characters, an uppercase letter, a digit,
    /// a character that is neither letter nor digit
    pub fn of(password: &str) -> Self {
        let rules = [
            password.chars().count() >= 8,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];
        Self(rules.iter().filter(|&&passed| passed).count() as u8)
    }

    pub fn score(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            0 => "Very Weak",
            1 => "Weak",
            2 => "Fair",
            3 => "Good",
            _ => "Strong",
        }
    }

    /// Bar fill as a CSS percentage
    pub fn percent(&self) -> u8 {
        self.0 * 100 / MAX_SCORE
    }

    pub fn bar_class(&self) -> &'static str {
        match self.0 {
            0 => "bg-gray-300",
            1 => "bg-red-500",
            2 => "bg-yellow-500",
            3 => "bg-blue-500",
            _ => "bg-green-500",
        }
    }
}
