//! Transport-agnostic chat front end for the transliteration engine.
//!
//! `ChatResponder` turns one incoming message from one user into at most one
//! [`Reply`]. It owns the only mutable state in the system: each user's
//! selected scheme. The transport (connection, roster, delivery) lives
//! outside this crate and only passes `(user, text)` in and sends the
//! rendered reply back.

mod command;
mod reply;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info, warn};
use translit_core::settings::ChatSettings;
use translit_core::{Registry, SchemeError, SchemeId};

pub use command::{parse_command, Command};
pub use reply::Reply;

pub struct ChatResponder {
    registry: Arc<Registry>,
    settings: ChatSettings,
    default_scheme: SchemeId,
    /// User → selected scheme. Holds identities only, never scheme data.
    selections: RwLock<HashMap<String, SchemeId>>,
}

impl ChatResponder {
    /// Fails with `UnknownScheme` if `settings.default_scheme` is not in
    /// the registry.
    pub fn new(registry: Arc<Registry>, settings: ChatSettings) -> Result<Self, SchemeError> {
        let default_scheme = registry.resolve(&settings.default_scheme)?.clone();
        Ok(Self {
            registry,
            settings,
            default_scheme,
            selections: RwLock::new(HashMap::new()),
        })
    }

    pub fn default_scheme(&self) -> &SchemeId {
        &self.default_scheme
    }

    /// The scheme `user` currently converts with.
    pub fn scheme_for(&self, user: &str) -> SchemeId {
        self.selections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user)
            .cloned()
            .unwrap_or_else(|| self.default_scheme.clone())
    }

    /// Handle one message. `None` means no reply should be sent.
    pub fn respond(&self, user: &str, input: &str) -> Option<Reply> {
        let command = parse_command(input, &self.settings);
        debug!(user, ?command, "chat message");

        match command {
            Command::Ignore => None,
            Command::Help => Some(self.help()),
            Command::Select(name) => Some(self.select(user, name, input.trim())),
            Command::Convert(text) => self.convert(user, text),
        }
    }

    /// Help reply listing every scheme display name, sorted.
    pub fn help(&self) -> Reply {
        Reply::Help {
            prefix: self.settings.command_prefix(),
            schemes: self
                .registry
                .list_all()
                .into_iter()
                .map(|id| id.name().to_string())
                .collect(),
        }
    }

    fn select(&self, user: &str, name: &str, raw: &str) -> Reply {
        let id = match self.registry.resolve(name) {
            Ok(id) => id.clone(),
            Err(_) => return Reply::UnknownCommand(raw.to_string()),
        };
        self.selections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.to_string(), id.clone());
        info!(user, scheme = id.code(), "scheme selected");
        Reply::SchemeSelected(id)
    }

    /// `None` only if the user's selection is not in the registry, which
    /// cannot happen for selections made through `respond`.
    fn convert(&self, user: &str, text: &str) -> Option<Reply> {
        let scheme = self.scheme_for(user);
        match self.registry.get(&scheme) {
            Ok(s) => Some(Reply::Converted {
                text: translit_core::transliterate(text, s),
                scheme,
            }),
            Err(e) => {
                warn!(user, error = %e, "selected scheme missing from registry");
                None
            }
        }
    }
}
