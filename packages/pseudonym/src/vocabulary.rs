//! Word lists that synthetic names and addresses are drawn from
//!
//! Lists are immutable once built and shared cheaply between engine clones.
//! Order matters: an index selects a word, so reordering or resizing a list
//! changes every derived value that uses it.

use crate::{PseudonymError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Index;
use std::sync::Arc;

/// A non-empty, ordered, immutable list of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Arc<[String]>,
}

impl Vocabulary {
    /// Build a vocabulary from `words`
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::Configuration` if the list is empty or any
    /// entry is blank.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(PseudonymError::configuration(
                "vocabulary must contain at least one word",
            ));
        }
        if let Some(pos) = words.iter().position(|w| w.trim().is_empty()) {
            return Err(PseudonymError::configuration(format!(
                "vocabulary entry {pos} is blank"
            )));
        }
        Ok(Self {
            words: words.into(),
        })
    }

    fn from_static(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| (*w).to_owned()).collect(),
        }
    }

    /// Number of words; never zero
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty (never true for a built vocabulary)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `value mod len`
    #[must_use]
    pub fn pick(&self, value: u64) -> &str {
        // len fits in u64 and is non-zero, so the reduced index is in range
        let idx = (value % self.words.len() as u64) as usize;
        &self.words[idx]
    }

    /// Position of the first entry containing whitespace, if any
    #[must_use]
    pub fn first_multi_token(&self) -> Option<usize> {
        self.words
            .iter()
            .position(|w| w.chars().any(char::is_whitespace))
    }

    /// Whether `word` is one of the entries
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Iterate over the words in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Index<usize> for Vocabulary {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.words[index]
    }
}

impl Serialize for Vocabulary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.words.iter())
    }
}

impl<'de> Deserialize<'de> for Vocabulary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let words = Vec::<String>::deserialize(deserializer)?;
        Self::new(words).map_err(serde::de::Error::custom)
    }
}

const FIRST_NAMES: &[&str] = &[
    "Alex", "Taylor", "Jordan", "Casey", "Morgan", "Riley", "Avery", "Quinn", "Cameron", "Emery",
    "Sage", "River", "Rowan", "Skylar", "Dakota", "Phoenix",
];

const LAST_NAMES: &[&str] = &[
    "Johnson", "Williams", "Brown", "Davis", "Miller", "Wilson", "Moore", "Taylor", "Anderson",
    "Thomas", "Jackson", "White", "Harris", "Martin", "Thompson", "Garcia",
];

const STREETS: &[&str] = &[
    "Oak Ave", "Main St", "First Ave", "Second St", "Park Rd", "Hill St", "Lake Dr", "River Rd",
    "Pine St", "Elm Ave", "Maple St", "Cedar Ave", "Birch Dr", "Ash St",
];

const CITIES: &[&str] = &[
    "Springfield", "Franklin", "Georgetown", "Clinton", "Greenville", "Madison", "Oakland",
    "Salem", "Fairview", "Riverside", "Arlington", "Ashland", "Burlington",
];

const STATES: &[&str] = &[
    "NY", "CA", "TX", "FL", "PA", "IL", "OH", "GA", "NC", "MI", "NJ", "VA", "WA",
];

/// The five lists used for synthetic profile values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabularies {
    /// Given names for display names
    #[serde(default = "default_first_names")]
    pub first_names: Vocabulary,
    /// Family names for display names
    #[serde(default = "default_last_names")]
    pub last_names: Vocabulary,
    /// Street names for addresses
    #[serde(default = "default_streets")]
    pub streets: Vocabulary,
    /// City names for addresses
    #[serde(default = "default_cities")]
    pub cities: Vocabulary,
    /// State codes for addresses
    #[serde(default = "default_states")]
    pub states: Vocabulary,
}

fn default_first_names() -> Vocabulary {
    Vocabulary::from_static(FIRST_NAMES)
}

fn default_last_names() -> Vocabulary {
    Vocabulary::from_static(LAST_NAMES)
}

fn default_streets() -> Vocabulary {
    Vocabulary::from_static(STREETS)
}

fn default_cities() -> Vocabulary {
    Vocabulary::from_static(CITIES)
}

fn default_states() -> Vocabulary {
    Vocabulary::from_static(STATES)
}

impl Default for Vocabularies {
    fn default() -> Self {
        Self {
            first_names: default_first_names(),
            last_names: default_last_names(),
            streets: default_streets(),
            cities: default_cities(),
            states: default_states(),
        }
    }
}

impl Vocabularies {
    /// Replace the first-name list
    #[must_use]
    pub fn with_first_names(mut self, words: Vocabulary) -> Self {
        self.first_names = words;
        self
    }

    /// Replace the last-name list
    #[must_use]
    pub fn with_last_names(mut self, words: Vocabulary) -> Self {
        self.last_names = words;
        self
    }

    /// Replace the street list
    #[must_use]
    pub fn with_streets(mut self, words: Vocabulary) -> Self {
        self.streets = words;
        self
    }

    /// Replace the city list
    #[must_use]
    pub fn with_cities(mut self, words: Vocabulary) -> Self {
        self.cities = words;
        self
    }

    /// Replace the state list
    #[must_use]
    pub fn with_states(mut self, words: Vocabulary) -> Self {
        self.states = words;
        self
    }
}
