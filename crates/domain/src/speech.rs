//! Spoken responses.

/// Language the skill answers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Portuguese,
    English,
}

impl Language {
    /// Pick a language from a BCP-47 locale such as `pt-BR` or `en-US`.
    ///
    /// Anything that is not English falls back to Portuguese.
    #[must_use]
    pub fn from_locale(locale: Option<&str>) -> Self {
        match locale {
            Some(tag) if tag.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("en")) => {
                Self::English
            }
            _ => Self::Portuguese,
        }
    }
}

/// What the skill says back, and whether it keeps listening.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Utterance {
    pub speech: Option<String>,
    pub reprompt: Option<String>,
}

impl Utterance {
    /// Say `text` and end the session.
    #[must_use]
    pub fn speak(text: impl Into<String>) -> Self {
        Self {
            speech: Some(text.into()),
            reprompt: None,
        }
    }

    /// Say `text` and keep the session open, repeating it as the reprompt.
    #[must_use]
    pub fn ask(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            speech: Some(text.clone()),
            reprompt: Some(text),
        }
    }

    /// Say nothing.
    #[must_use]
    pub fn silent() -> Self {
        Self::default()
    }

    /// The session closes unless there is a reprompt.
    #[must_use]
    pub fn ends_session(&self) -> bool {
        self.reprompt.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pick_english_for_en_locales() {
        assert_eq!(Language::from_locale(Some("en-US")), Language::English);
        assert_eq!(Language::from_locale(Some("EN-gb")), Language::English);
    }

    #[test]
    fn should_default_to_portuguese() {
        assert_eq!(Language::from_locale(Some("pt-BR")), Language::Portuguese);
        assert_eq!(Language::from_locale(Some("e")), Language::Portuguese);
        assert_eq!(Language::from_locale(None), Language::Portuguese);
    }

    #[test]
    fn should_keep_session_open_when_asking() {
        let utterance = Utterance::ask("What now?");
        assert_eq!(utterance.reprompt.as_deref(), Some("What now?"));
        assert!(!utterance.ends_session());
    }

    #[test]
    fn should_end_session_when_speaking() {
        assert!(Utterance::speak("Bye").ends_session());
        assert!(Utterance::silent().ends_session());
    }
}
