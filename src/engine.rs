use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::info;
use translit_chat::ChatResponder;
use translit_core::settings::Settings;
use translit_core::{Registry, RegistryBuilder, SchemeError, SchemeId};

use crate::EngineError;

/// Scheme catalog plus settings. Cheap to clone; the registry is shared.
#[derive(Debug, Clone)]
pub struct TranslitEngine {
    registry: Arc<Registry>,
    settings: Settings,
}

impl TranslitEngine {
    pub fn new(registry: Registry, settings: Settings) -> Self {
        Self {
            registry: Arc::new(registry),
            settings,
        }
    }

    /// Builtin schemes with the embedded default settings.
    pub fn builtin() -> Result<Self, EngineError> {
        Ok(Self::new(Registry::builtin()?, Settings::default_settings()))
    }

    /// Builtin schemes extended with an optional scheme file, and settings
    /// from an optional file (embedded defaults otherwise).
    pub fn load(schemes: Option<&Path>, settings: Option<&Path>) -> Result<Self, EngineError> {
        let mut builder = RegistryBuilder::with_builtin()?;
        if let Some(path) = schemes {
            let added = builder.extend_from_file(path)?;
            info!(path = %path.display(), added, "loaded custom schemes");
        }
        let settings = match settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default_settings(),
        };
        Ok(Self::new(builder.build(), settings))
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// All scheme identities, sorted by display name.
    pub fn list_schemes(&self) -> Vec<SchemeId> {
        self.registry.list_all().into_iter().cloned().collect()
    }

    /// Resolve a code or display name, case-insensitively.
    pub fn resolve_scheme(&self, name: &str) -> Result<SchemeId, SchemeError> {
        self.registry.resolve(name).cloned()
    }

    pub fn transliterate(&self, text: &str, scheme: &SchemeId) -> Result<String, SchemeError> {
        let scheme = self.registry.get(scheme)?;
        Ok(translit_core::transliterate(text, scheme))
    }

    /// Read all of `reader` and transliterate it.
    pub fn transliterate_reader<R: Read>(
        &self,
        mut reader: R,
        scheme: &SchemeId,
    ) -> Result<String, EngineError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(self.transliterate(&text, scheme)?)
    }

    /// The configured default scheme.
    pub fn default_scheme(&self) -> Result<SchemeId, SchemeError> {
        self.resolve_scheme(&self.settings.chat.default_scheme)
    }

    /// Chat responder over this engine's registry and chat settings.
    pub fn responder(&self) -> Result<ChatResponder, SchemeError> {
        ChatResponder::new(Arc::clone(&self.registry), self.settings.chat.clone())
    }
}
