use serde::{Deserialize, Serialize};

/// The signed-in student's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub student_id: String,
    /// Prepaid canteen balance in đồng
    pub balance: f64,
}

impl UserProfile {
    /// Up to two initials for the avatar, e.g. "Nguyễn Văn An" -> "NA"
    pub fn initials(&self) -> String {
        let words: Vec<&str> = self.name.split_whitespace().collect();
        let pick = |word: Option<&&str>| word.and_then(|w| w.chars().next());
        [pick(words.first()), pick(words.last()).filter(|_| words.len() > 1)]
            .into_iter()
            .flatten()
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Given name: the last word of a Vietnamese full name
    pub fn given_name(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Vietnamese,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Vietnamese, Language::English];

    pub fn code(self) -> &'static str {
        match self {
            Language::Vietnamese => "vi",
            Language::English => "en",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Vietnamese => "Tiếng Việt",
            Language::English => "English",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }
}

/// User preferences edited on the settings page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub notifications: bool,
    pub order_updates: bool,
    pub dark_mode: bool,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: true,
            order_updates: true,
            dark_mode: false,
            language: Language::Vietnamese,
        }
    }
}

impl Settings {
    /// Cancelling an edit discards it and goes back to the defaults,
    /// not to the last saved values.
    pub fn cancelled(&self) -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> UserProfile {
        UserProfile {
            name: name.to_string(),
            email: "an@canteen.edu.vn".to_string(),
            phone: "0901234567".to_string(),
            student_id: "SV2024001".to_string(),
            balance: 250000.0,
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(profile("Nguyễn Văn An").initials(), "NA");
        assert_eq!(profile("an").initials(), "A");
        assert_eq!(profile("").initials(), "");
    }

    #[test]
    fn test_given_name() {
        assert_eq!(profile("Nguyễn Văn An").given_name(), "An");
    }

    #[test]
    fn test_cancel_resets_to_defaults() {
        let edited = Settings {
            notifications: false,
            order_updates: false,
            dark_mode: true,
            language: Language::English,
        };
        assert_eq!(edited.cancelled(), Settings::default());
    }

    #[test]
    fn test_language_codes() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("fr"), None);
    }
}
