use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::rewrite::{expand_collapse, RewriteRule};
use super::{CasePolicy, CharacterMap, Fallback, MapStyle, Passthrough, Scheme, SchemeId};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemesFile {
    #[serde(default)]
    scheme: Vec<SchemeDef>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemeDef {
    code: String,
    name: String,
    #[serde(default)]
    style: MapStyle,
    #[serde(default)]
    case: CasePolicy,
    #[serde(default)]
    map: BTreeMap<String, String>,
    from: Option<String>,
    to: Option<String>,
    fallback: Option<String>,
    passthrough: Option<Passthrough>,
    #[serde(default)]
    collapse: Vec<CollapseDef>,
    #[serde(default)]
    rewrite: Vec<RewriteDef>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CollapseDef {
    digraph: String,
    single: String,
    before: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RewriteDef {
    pattern: String,
    replacement: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SchemeConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("cannot read {path}: {reason}")]
    Io { path: String, reason: String },
    #[error("no [[scheme]] entries")]
    Empty,
    #[error("scheme code is empty")]
    EmptyCode,
    #[error("scheme {0}: display name is empty")]
    EmptyName(String),
    #[error("scheme {scheme}: map key {key:?} is not a single character")]
    InvalidKey { scheme: String, key: String },
    #[error("scheme {scheme}: no mapping for {ch:?}")]
    MissingEntry { scheme: String, ch: char },
    #[error("scheme {scheme}: alphabets differ in length ({from} vs {to})")]
    LengthMismatch {
        scheme: String,
        from: usize,
        to: usize,
    },
    #[error("scheme {0}: parallel style needs both `from` and `to`")]
    MissingAlphabet(String),
    #[error("scheme {scheme}: `{field}` is not allowed with this style")]
    UnexpectedField { scheme: String, field: &'static str },
    #[error("scheme {0}: `fallback` and `passthrough` must be set together")]
    IncompleteFallback(String),
    #[error("scheme {scheme}: collapse digraph {digraph:?} must be two characters")]
    InvalidCollapse { scheme: String, digraph: String },
    #[error("scheme {scheme}: empty rewrite pattern (replacement {replacement:?})")]
    EmptyPattern { scheme: String, replacement: String },
}

/// Parse TOML scheme definitions into fully composed schemes.
///
/// Schemes are returned in file order. Identity collisions are not checked
/// here; the registry rejects them on registration.
pub fn parse_schemes_toml(toml_str: &str) -> Result<Vec<Scheme>, SchemeConfigError> {
    let file: SchemesFile =
        toml::from_str(toml_str).map_err(|e| SchemeConfigError::Parse(e.to_string()))?;

    if file.scheme.is_empty() {
        return Err(SchemeConfigError::Empty);
    }

    let schemes = file
        .scheme
        .into_iter()
        .map(build_scheme)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = schemes.len(), "parsed scheme definitions");
    Ok(schemes)
}

/// Read and parse a scheme definition file.
pub fn load_schemes_file(path: &Path) -> Result<Vec<Scheme>, SchemeConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| SchemeConfigError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_schemes_toml(&content)
}

fn build_scheme(def: SchemeDef) -> Result<Scheme, SchemeConfigError> {
    let id = SchemeId::new(def.code.trim(), def.name.trim());
    match def.style {
        MapStyle::Parallel => build_parallel(id, def),
        MapStyle::Table => build_table(id, def),
    }
}

fn build_parallel(id: SchemeId, def: SchemeDef) -> Result<Scheme, SchemeConfigError> {
    let unexpected = |field| SchemeConfigError::UnexpectedField {
        scheme: def.code.clone(),
        field,
    };
    if !def.map.is_empty() {
        return Err(unexpected("map"));
    }
    if !def.collapse.is_empty() {
        return Err(unexpected("collapse"));
    }
    if !def.rewrite.is_empty() {
        return Err(unexpected("rewrite"));
    }
    if def.fallback.is_some() || def.passthrough.is_some() {
        return Err(unexpected("fallback"));
    }

    match (&def.from, &def.to) {
        (Some(from), Some(to)) => Scheme::parallel(id, from, to, def.case),
        _ => Err(SchemeConfigError::MissingAlphabet(def.code.clone())),
    }
}

fn build_table(id: SchemeId, def: SchemeDef) -> Result<Scheme, SchemeConfigError> {
    if def.from.is_some() || def.to.is_some() {
        return Err(SchemeConfigError::UnexpectedField {
            scheme: def.code,
            field: "from",
        });
    }

    // Uppercase keys are explicit overrides of the derived uppercase half.
    let mut lowercase = Vec::new();
    let mut overrides = Vec::new();
    for (key, grapheme) in def.map {
        let mut chars = key.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(SchemeConfigError::InvalidKey {
                    scheme: def.code,
                    key,
                })
            }
        };
        if c.is_uppercase() {
            overrides.push((c, grapheme));
        } else {
            lowercase.push((c, grapheme));
        }
    }
    let map = CharacterMap::with_derived_uppercase(lowercase, overrides);

    let fallback = match (def.fallback, def.passthrough) {
        (Some(grapheme), Some(passthrough)) => Some(Fallback::new(grapheme, passthrough)),
        (None, None) => None,
        _ => return Err(SchemeConfigError::IncompleteFallback(def.code)),
    };

    let mut rules = Vec::new();
    for collapse in &def.collapse {
        if collapse.digraph.chars().count() != 2 || collapse.single.is_empty() {
            return Err(SchemeConfigError::InvalidCollapse {
                scheme: def.code.clone(),
                digraph: collapse.digraph.clone(),
            });
        }
        rules.extend(expand_collapse(
            &collapse.digraph,
            &collapse.single,
            &collapse.before,
        ));
    }
    rules.extend(
        def.rewrite
            .into_iter()
            .map(|r| RewriteRule::new(r.pattern, r.replacement)),
    );

    Scheme::table(id, map, rules, fallback, def.case)
}
