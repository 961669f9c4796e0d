/// Builtin scheme definitions, validated as TOML by `build.rs`.
pub const DEFAULT_SCHEMES_TOML: &str = include_str!("default_schemes.toml");

/// Returns the embedded default scheme definitions.
pub fn default_toml() -> &'static str {
    DEFAULT_SCHEMES_TOML
}
