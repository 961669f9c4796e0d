use std::fs;

use translit_engine::{parse_settings_toml, Registry, RegistryBuilder, SchemeError};

pub fn schemes_export() {
    print!("{}", translit_engine::scheme_defaults_toml());
}

/// Parse a scheme file and check it also registers cleanly next to the
/// builtin schemes, since `--schemes` always merges.
pub fn schemes_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let count = die!(check_schemes(&content), "Error: {}");
    println!("OK: {count} schemes");
}

/// Number of schemes defined in `content`, or the first error from parsing
/// them or merging them into the builtin set.
fn check_schemes(content: &str) -> Result<usize, SchemeError> {
    let own = Registry::from_toml(content)?;
    let mut merged = RegistryBuilder::with_builtin()?;
    merged.extend_from_toml(content)?;
    Ok(own.len())
}

pub fn settings_export() {
    print!("{}", translit_engine::settings_defaults_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: chat.default_scheme={}, chat.command_prefix={}, log.filter={}",
        s.chat.default_scheme,
        s.chat.command_prefix(),
        s.log.filter
    );
}
