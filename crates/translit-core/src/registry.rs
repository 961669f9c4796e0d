//! The scheme catalog.
//!
//! `RegistryBuilder` collects schemes and rejects identity collisions;
//! `build()` freezes it into a `Registry`, which has no mutating methods and
//! can be shared across threads behind an `Arc` without locking.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::debug;

use crate::scheme::{
    load_schemes_file, parse_schemes_toml, Scheme, SchemeConfigError, SchemeId,
    DEFAULT_SCHEMES_TOML,
};

#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),
    #[error("duplicate scheme: {0}")]
    DuplicateScheme(String),
    #[error(transparent)]
    Config(#[from] SchemeConfigError),
}

/// Lookup keys for a scheme: lowercased code and display name.
fn lookup_keys(id: &SchemeId) -> [String; 2] {
    [id.code().to_lowercase(), id.name().to_lowercase()]
}

#[derive(Default)]
pub struct RegistryBuilder {
    schemes: Vec<Scheme>,
    keys: HashSet<String>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-loaded with the builtin schemes.
    pub fn with_builtin() -> Result<Self, SchemeError> {
        let mut builder = Self::new();
        builder.extend_from_toml(DEFAULT_SCHEMES_TOML)?;
        Ok(builder)
    }

    /// Add a scheme. Fails if its code or display name collides
    /// (case-insensitively) with the code or name of a registered scheme.
    pub fn register(&mut self, scheme: Scheme) -> Result<(), SchemeError> {
        let keys = lookup_keys(scheme.id());
        if keys.iter().any(|k| self.keys.contains(k)) {
            return Err(SchemeError::DuplicateScheme(scheme.id().code().to_string()));
        }
        self.keys.extend(keys);
        self.schemes.push(scheme);
        Ok(())
    }

    /// Register every scheme defined in `toml_str`. Returns how many were added.
    pub fn extend_from_toml(&mut self, toml_str: &str) -> Result<usize, SchemeError> {
        let schemes = parse_schemes_toml(toml_str)?;
        self.register_all(schemes)
    }

    /// Register every scheme defined in the file at `path`.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize, SchemeError> {
        let schemes = load_schemes_file(path)?;
        self.register_all(schemes)
    }

    fn register_all(&mut self, schemes: Vec<Scheme>) -> Result<usize, SchemeError> {
        let count = schemes.len();
        for scheme in schemes {
            self.register(scheme)?;
        }
        Ok(count)
    }

    /// Freeze the catalog. Schemes are ordered by display name.
    pub fn build(mut self) -> Registry {
        self.schemes.sort_by(|a, b| a.id().name().cmp(b.id().name()));
        let mut index = HashMap::with_capacity(self.schemes.len() * 2);
        for (i, scheme) in self.schemes.iter().enumerate() {
            for key in lookup_keys(scheme.id()) {
                index.insert(key, i);
            }
        }
        debug!(count = self.schemes.len(), "scheme registry built");
        Registry {
            schemes: self.schemes,
            index,
        }
    }
}

/// Immutable catalog of transliteration schemes.
#[derive(Debug)]
pub struct Registry {
    /// Sorted by display name.
    schemes: Vec<Scheme>,
    /// Lowercased code and display name → position in `schemes`.
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry holding the builtin schemes.
    pub fn builtin() -> Result<Self, SchemeError> {
        Ok(RegistryBuilder::with_builtin()?.build())
    }

    /// Registry holding only the schemes defined in `toml_str`.
    pub fn from_toml(toml_str: &str) -> Result<Self, SchemeError> {
        let mut builder = RegistryBuilder::new();
        builder.extend_from_toml(toml_str)?;
        Ok(builder.build())
    }

    /// Find a scheme by code or display name, ignoring case and surrounding
    /// whitespace. Never falls back to a default.
    pub fn lookup(&self, name: &str) -> Result<&Scheme, SchemeError> {
        let key = name.trim().to_lowercase();
        match self.index.get(&key) {
            Some(&i) => Ok(&self.schemes[i]),
            None => {
                debug!(name, "unknown scheme");
                Err(SchemeError::UnknownScheme(name.to_string()))
            }
        }
    }

    /// Resolve a user-supplied name to its scheme identity.
    pub fn resolve(&self, name: &str) -> Result<&SchemeId, SchemeError> {
        self.lookup(name).map(Scheme::id)
    }

    /// Scheme for an identity previously returned by this registry.
    pub fn get(&self, id: &SchemeId) -> Result<&Scheme, SchemeError> {
        self.lookup(id.code())
    }

    /// All scheme identities, sorted by display name.
    pub fn list_all(&self) -> Vec<&SchemeId> {
        self.schemes.iter().map(Scheme::id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scheme> {
        self.schemes.iter()
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Resolve `name` and transliterate `text` with it.
    pub fn transliterate(&self, text: &str, name: &str) -> Result<String, SchemeError> {
        let scheme = self.lookup(name)?;
        Ok(crate::transliterate(text, scheme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::{CasePolicy, CharacterMap};
    use crate::unicode::required_code_points;

    fn scheme(code: &str, name: &str) -> Scheme {
        let map = CharacterMap::from_entries(required_code_points().map(|c| (c, "x".to_string())));
        Scheme::table(
            SchemeId::new(code, name),
            map,
            Vec::new(),
            None,
            CasePolicy::Preserve,
        )
        .unwrap()
    }

    #[test]
    fn builtin_has_all_standards() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.len(), 13);
        for code in [
            "pytrans",
            "nauchnaya",
            "iso9sysa",
            "iso9sysb",
            "isor9tab1",
            "isor9tab2",
            "bgnpcgn",
            "britstd",
            "alalc",
            "gostr",
            "inttele",
            "driverlic",
            "passport",
        ] {
            assert!(registry.lookup(code).is_ok(), "missing {code}");
        }
    }

    #[test]
    fn list_sorted_by_display_name() {
        let registry = Registry::builtin().unwrap();
        let names: Vec<&str> = registry.list_all().into_iter().map(|id| id.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.first(), Some(&"ALA-LC"));
        assert_eq!(names.last(), Some(&"Научная"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.resolve("ISO9SYSB").unwrap().code(), "iso9sysb");
        assert_eq!(
            registry
                .resolve("iso 9:1995, гост 7.79-2000 СИСТЕМА А")
                .unwrap()
                .code(),
            "iso9sysa"
        );
        assert_eq!(registry.resolve("  Научная ").unwrap().code(), "nauchnaya");
    }

    #[test]
    fn lookup_unknown_fails() {
        let registry = Registry::builtin().unwrap();
        let err = registry.resolve("not-a-real-standard").unwrap_err();
        assert!(matches!(err, SchemeError::UnknownScheme(ref n) if n == "not-a-real-standard"));
        assert!(matches!(
            registry.lookup("").unwrap_err(),
            SchemeError::UnknownScheme(_)
        ));
    }

    #[test]
    fn get_by_id() {
        let registry = Registry::builtin().unwrap();
        let id = registry.resolve("gostr").unwrap().clone();
        assert_eq!(
            registry.get(&id).unwrap().case_policy(),
            CasePolicy::ForceUppercase
        );
        let foreign = SchemeId::new("nope", "Nope");
        assert!(registry.get(&foreign).is_err());
    }

    #[test]
    fn register_duplicate_code() {
        let mut builder = Registry::builder();
        builder.register(scheme("abc", "First")).unwrap();
        let err = builder.register(scheme("ABC", "Second")).unwrap_err();
        assert!(matches!(err, SchemeError::DuplicateScheme(ref c) if c == "ABC"));
    }

    #[test]
    fn register_duplicate_name() {
        let mut builder = Registry::builder();
        builder.register(scheme("one", "Same Name")).unwrap();
        let err = builder.register(scheme("two", "same name")).unwrap_err();
        assert!(matches!(err, SchemeError::DuplicateScheme(_)));
    }

    #[test]
    fn register_code_colliding_with_name() {
        let mut builder = Registry::builder();
        builder.register(scheme("one", "Two")).unwrap();
        let err = builder.register(scheme("two", "Other")).unwrap_err();
        assert!(matches!(err, SchemeError::DuplicateScheme(_)));
    }

    #[test]
    fn extend_builtin_with_duplicate_fails() {
        let mut builder = RegistryBuilder::with_builtin().unwrap();
        let err = builder
            .extend_from_toml(DEFAULT_SCHEMES_TOML)
            .unwrap_err();
        assert!(matches!(err, SchemeError::DuplicateScheme(ref c) if c == "pytrans"));
    }

    #[test]
    fn from_toml_config_error() {
        let err = Registry::from_toml("[[scheme]]\ncode = \"x\"\nname = \"X\"\n").unwrap_err();
        assert!(matches!(
            err,
            SchemeError::Config(SchemeConfigError::MissingEntry { .. })
        ));
    }

    #[test]
    fn registry_transliterate_by_name() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(
            registry.transliterate("Волга", "BGN/PCGN (1944)").unwrap(),
            "Volga"
        );
        assert!(registry.transliterate("Волга", "klingon").is_err());
    }

    #[test]
    fn registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
        assert_send_sync::<Scheme>();
    }
}
