use std::collections::HashMap;

use super::config::SchemeConfigError;
use crate::unicode::{required_code_points, to_upper_char};

/// Source code point → destination grapheme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterMap {
    entries: HashMap<char, String>,
}

impl CharacterMap {
    /// Build from explicit entries, taken as-is.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, String)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Build from lowercase entries, deriving the uppercase half.
    ///
    /// Each source letter whose uppercase form differs gets an uppercase
    /// entry with the grapheme fully uppercased. `overrides` win over both
    /// the given and the derived entries.
    pub fn with_derived_uppercase<I, O>(lowercase: I, overrides: O) -> Self
    where
        I: IntoIterator<Item = (char, String)>,
        O: IntoIterator<Item = (char, String)>,
    {
        let mut entries = HashMap::new();
        for (src, dst) in lowercase {
            let upper = to_upper_char(src);
            if upper != src {
                entries.insert(upper, dst.to_uppercase());
            }
            entries.insert(src, dst);
        }
        entries.extend(overrides);
        Self { entries }
    }

    /// Zip two alphabets position-wise, then zip their uppercase forms.
    pub fn from_parallel(scheme: &str, from: &str, to: &str) -> Result<Self, SchemeConfigError> {
        let from_len = from.chars().count();
        let to_len = to.chars().count();
        if from_len != to_len {
            return Err(SchemeConfigError::LengthMismatch {
                scheme: scheme.to_string(),
                from: from_len,
                to: to_len,
            });
        }

        let mut entries = HashMap::with_capacity(from_len * 2);
        for (src, dst) in from.chars().zip(to.chars()) {
            let (upper_src, upper_dst) = (to_upper_char(src), to_upper_char(dst));
            if upper_src != src {
                entries.insert(upper_src, upper_dst.to_string());
            }
            entries.insert(src, dst.to_string());
        }
        Ok(Self { entries })
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First required code point (Russian letter or guillemet) with no entry.
    pub fn first_missing(&self) -> Option<char> {
        required_code_points().find(|c| !self.entries.contains_key(c))
    }
}
