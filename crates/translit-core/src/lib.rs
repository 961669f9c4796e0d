//! Russian Cyrillic → Latin transliteration engine.
//!
//! A [`Registry`] holds the immutable catalog of [`Scheme`]s (one per
//! transliteration standard). [`transliterate`] applies a scheme to text in
//! three fixed stages: per-code-point base mapping, ordered rewrite rules,
//! and the scheme's case policy.

pub mod registry;
pub mod scheme;
pub mod settings;
mod transliterate;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use registry::{Registry, RegistryBuilder, SchemeError};
pub use scheme::{
    CasePolicy, CharacterMap, Fallback, MapStyle, Passthrough, RewriteRule, Scheme,
    SchemeConfigError, SchemeId,
};
pub use transliterate::transliterate;
