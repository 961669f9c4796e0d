pub mod chat_ops;
pub mod config_ops;
pub mod convert_ops;

use std::path::Path;

use translit_engine::{trace_init, TranslitEngine};

/// Build the engine from optional scheme and settings files and install
/// logging with the configured filter. Exits on any load error.
pub fn load_engine(schemes: Option<&str>, settings: Option<&str>) -> TranslitEngine {
    let engine = die!(
        TranslitEngine::load(schemes.map(Path::new), settings.map(Path::new)),
        "Error: {}"
    );
    trace_init::init_tracing(&engine.settings().log.filter);
    engine
}
