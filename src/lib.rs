//! Russian Cyrillic → Latin transliteration engine.
//!
//! `TranslitEngine` owns the frozen scheme catalog and the engine settings
//! and exposes the three core operations: list, resolve, transliterate.
//! Scheme data and the transliteration pipeline live in `translit-core`;
//! the chat front end lives in `translit-chat`.

mod engine;
mod error;
pub mod trace_init;

pub use engine::TranslitEngine;
pub use error::EngineError;

pub use translit_core::scheme::default_toml as scheme_defaults_toml;
pub use translit_core::settings::default_toml as settings_defaults_toml;

pub use translit_chat::{ChatResponder, Command, Reply};
pub use translit_core::settings::{parse_settings_toml, Settings, SettingsError};
pub use translit_core::{
    CasePolicy, MapStyle, Registry, RegistryBuilder, Scheme, SchemeConfigError, SchemeError,
    SchemeId,
};
