use serde::{Deserialize, Serialize};

/// Site display language. English is the initial language of every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl Language {
    /// Value for the `lang` attribute of the document root
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::En => TextDirection::Ltr,
            Language::Ar => TextDirection::Rtl,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    pub fn is_rtl(self) -> bool {
        self.direction() == TextDirection::Rtl
    }

    /// Picks the variant of a bilingual pair for this language
    pub fn pick<'a>(self, en: &'a str, ar: &'a str) -> &'a str {
        match self {
            Language::En => en,
            Language::Ar => ar,
        }
    }

    /// Caption of the language switch: always names the other language
    pub fn switch_label(self) -> &'static str {
        match self {
            Language::En => "عربي",
            Language::Ar => "English",
        }
    }
}

/// Static bilingual text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Text {
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Self { en, ar }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        lang.pick(self.en, self.ar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_english_ltr() {
        let lang = Language::default();
        assert_eq!(lang, Language::En);
        assert_eq!(lang.direction().as_str(), "ltr");
        assert_eq!(lang.code(), "en");
    }

    #[test]
    fn arabic_is_rtl() {
        assert!(Language::Ar.is_rtl());
        assert_eq!(Language::Ar.direction().as_str(), "rtl");
        assert_eq!(Language::Ar.code(), "ar");
    }

    #[test]
    fn toggle_twice_returns_to_start() {
        assert_eq!(Language::En.toggled(), Language::Ar);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn text_resolves_per_language() {
        let t = Text::new("Home", "الرئيسية");
        assert_eq!(t.get(Language::En), "Home");
        assert_eq!(t.get(Language::Ar), "الرئيسية");
        assert_eq!(Language::En.switch_label(), "عربي");
    }
}
