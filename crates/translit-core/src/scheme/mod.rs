//! Transliteration scheme definitions.
//!
//! A `Scheme` bundles everything one standard needs: its identity, the
//! per-code-point `CharacterMap`, ordered `RewriteRule`s, an optional
//! `Fallback` for unmapped code points, and a `CasePolicy`. Schemes are
//! fully composed at construction time and immutable afterwards.

mod charmap;
mod config;
mod rewrite;
mod table;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use charmap::CharacterMap;
pub use config::{load_schemes_file, parse_schemes_toml, SchemeConfigError};
pub(crate) use rewrite::run_rules;
pub use rewrite::{expand_collapse, RewriteRule};
pub use table::{default_toml, DEFAULT_SCHEMES_TOML};

/// Stable identity of a scheme: a short code plus a human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemeId {
    code: String,
    name: String,
}

impl SchemeId {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CasePolicy {
    /// Case flows from the per-letter map.
    #[default]
    Preserve,
    /// Uppercase the whole output after mapping and rewriting.
    ForceUppercase,
}

/// How a scheme's base map was constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapStyle {
    /// Explicit per-letter grapheme table.
    #[default]
    Table,
    /// Two equal-length alphabets zipped position-wise.
    Parallel,
}

/// Code points that bypass the fallback grapheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Passthrough {
    Ascii,
}

impl Passthrough {
    pub fn contains(self, c: char) -> bool {
        match self {
            Passthrough::Ascii => c.is_ascii(),
        }
    }
}

/// Default output for code points that have neither a map entry nor
/// membership in the passthrough set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub grapheme: String,
    pub passthrough: Passthrough,
}

impl Fallback {
    pub fn new(grapheme: impl Into<String>, passthrough: Passthrough) -> Self {
        Self {
            grapheme: grapheme.into(),
            passthrough,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scheme {
    id: SchemeId,
    style: MapStyle,
    map: CharacterMap,
    rules: Vec<RewriteRule>,
    fallback: Option<Fallback>,
    case: CasePolicy,
}

impl Scheme {
    /// Scheme backed by an explicit per-letter table.
    pub fn table(
        id: SchemeId,
        map: CharacterMap,
        rules: Vec<RewriteRule>,
        fallback: Option<Fallback>,
        case: CasePolicy,
    ) -> Result<Self, SchemeConfigError> {
        let scheme = Self {
            id,
            style: MapStyle::Table,
            map,
            rules,
            fallback,
            case,
        };
        scheme.validate()?;
        Ok(scheme)
    }

    /// Scheme built by zipping a source and destination alphabet.
    ///
    /// Lowercase alphabets are extended with their uppercase forms. Parallel
    /// schemes carry no rewrite rules and no fallback.
    pub fn parallel(
        id: SchemeId,
        from: &str,
        to: &str,
        case: CasePolicy,
    ) -> Result<Self, SchemeConfigError> {
        let map = CharacterMap::from_parallel(id.code(), from, to)?;
        let scheme = Self {
            id,
            style: MapStyle::Parallel,
            map,
            rules: Vec::new(),
            fallback: None,
            case,
        };
        scheme.validate()?;
        Ok(scheme)
    }

    pub fn id(&self) -> &SchemeId {
        &self.id
    }

    pub fn style(&self) -> MapStyle {
        self.style
    }

    pub fn map(&self) -> &CharacterMap {
        &self.map
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn fallback(&self) -> Option<&Fallback> {
        self.fallback.as_ref()
    }

    pub fn case_policy(&self) -> CasePolicy {
        self.case
    }

    fn validate(&self) -> Result<(), SchemeConfigError> {
        let code = self.id.code();
        if code.trim().is_empty() {
            return Err(SchemeConfigError::EmptyCode);
        }
        if self.id.name().trim().is_empty() {
            return Err(SchemeConfigError::EmptyName(code.to_string()));
        }
        if let Some(missing) = self.map.first_missing() {
            return Err(SchemeConfigError::MissingEntry {
                scheme: code.to_string(),
                ch: missing,
            });
        }
        if let Some(rule) = self.rules.iter().find(|r| r.pattern().is_empty()) {
            return Err(SchemeConfigError::EmptyPattern {
                scheme: code.to_string(),
                replacement: rule.replacement().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_map() -> CharacterMap {
        let entries = crate::unicode::required_code_points().map(|c| (c, "x".to_string()));
        CharacterMap::from_entries(entries)
    }

    #[test]
    fn scheme_id_displays_name() {
        let id = SchemeId::new("iso9sysb", "ISO 9:1995, ГОСТ 7.79-2000 система Б");
        assert_eq!(id.code(), "iso9sysb");
        assert_eq!(id.to_string(), "ISO 9:1995, ГОСТ 7.79-2000 система Б");
    }

    #[test]
    fn passthrough_ascii() {
        assert!(Passthrough::Ascii.contains('-'));
        assert!(Passthrough::Ascii.contains('\n'));
        assert!(!Passthrough::Ascii.contains('—'));
        assert!(!Passthrough::Ascii.contains('ж'));
    }

    #[test]
    fn table_scheme_requires_full_map() {
        let map = CharacterMap::from_entries([('а', "a".to_string())]);
        let err = Scheme::table(
            SchemeId::new("t", "T"),
            map,
            Vec::new(),
            None,
            CasePolicy::Preserve,
        )
        .unwrap_err();
        assert!(matches!(err, SchemeConfigError::MissingEntry { .. }));
    }

    #[test]
    fn table_scheme_rejects_empty_pattern() {
        let err = Scheme::table(
            SchemeId::new("t", "T"),
            full_map(),
            vec![RewriteRule::new("", "y")],
            None,
            CasePolicy::Preserve,
        )
        .unwrap_err();
        assert!(matches!(err, SchemeConfigError::EmptyPattern { .. }));
    }

    #[test]
    fn scheme_rejects_blank_identity() {
        let err = Scheme::table(
            SchemeId::new(" ", "T"),
            full_map(),
            Vec::new(),
            None,
            CasePolicy::Preserve,
        )
        .unwrap_err();
        assert!(matches!(err, SchemeConfigError::EmptyCode));

        let err = Scheme::table(
            SchemeId::new("t", ""),
            full_map(),
            Vec::new(),
            None,
            CasePolicy::Preserve,
        )
        .unwrap_err();
        assert!(matches!(err, SchemeConfigError::EmptyName(_)));
    }

    #[test]
    fn parallel_scheme_maps_both_cases() {
        let from = format!("{}«»", crate::unicode::RUSSIAN_LOWERCASE);
        let to = format!("{}\"\"", "x".repeat(33));
        let scheme = Scheme::parallel(SchemeId::new("p", "P"), &from, &to, CasePolicy::Preserve)
            .unwrap();
        assert_eq!(scheme.style(), MapStyle::Parallel);
        assert_eq!(scheme.map().get('ж'), Some("x"));
        assert_eq!(scheme.map().get('Ж'), Some("X"));
        assert!(scheme.rules().is_empty());
        assert!(scheme.fallback().is_none());
    }
}
