use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Languages a round can be played in. Card ids carry the two-letter code as prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "SP")]
    Spanish,
    #[serde(rename = "EN")]
    English,
    #[serde(rename = "PT")]
    Portuguese,
    #[serde(rename = "DT")]
    German,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Spanish,
        Language::English,
        Language::Portuguese,
        Language::German,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "SP",
            Language::English => "EN",
            Language::Portuguese => "PT",
            Language::German => "DT",
        }
    }

    /// Maximum number of words a card of this language may hold.
    pub fn word_limit(&self) -> usize {
        match self {
            Language::Spanish => 24,
            Language::English => 14,
            Language::Portuguese => 20,
            Language::German => 10,
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|language| language.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language code: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>(), Ok(language));
        }
        assert!("XX".parse::<Language>().is_err());
        assert!("sp".parse::<Language>().is_err());
    }

    #[test]
    fn test_word_limits() {
        assert_eq!(Language::Spanish.word_limit(), 24);
        assert_eq!(Language::English.word_limit(), 14);
        assert_eq!(Language::Portuguese.word_limit(), 20);
        assert_eq!(Language::German.word_limit(), 10);
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::German).unwrap(), "\"DT\"");
        let parsed: Language = serde_json::from_str("\"PT\"").unwrap();
        assert_eq!(parsed, Language::Portuguese);
    }
}
