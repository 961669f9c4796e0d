
use crate::Registry;

pub(super) const LOWER_ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

pub(super) fn builtin() -> Registry {
    Registry::builtin().expect("builtin schemes must load")
}

/// Transliterate with a builtin scheme by code.
pub(super) fn tr(registry: &Registry, code: &str, text: &str) -> String {
    registry.transliterate(text, code).unwrap()
}
