
use std::sync::Arc;

use translit_core::settings::Settings;
use translit_core::Registry;

use crate::ChatResponder;

pub(super) fn make_responder() -> ChatResponder {
    let registry = Arc::new(Registry::builtin().unwrap());
    ChatResponder::new(registry, Settings::default_settings().chat).unwrap()
}
