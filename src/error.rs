use translit_core::settings::SettingsError;
use translit_core::SchemeError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Scheme(#[from] SchemeError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
}
