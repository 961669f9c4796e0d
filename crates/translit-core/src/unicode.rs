//! Character-level classification for Russian Cyrillic text.

/// The 33-letter Russian alphabet in dictionary order (ё follows е).
pub const RUSSIAN_LOWERCASE: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// Uppercase counterpart of [`RUSSIAN_LOWERCASE`].
pub const RUSSIAN_UPPERCASE: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

/// Russian typographic quotation marks, normalized by every scheme.
pub const GUILLEMETS: [char; 2] = ['«', '»'];

pub fn is_russian_lowercase(c: char) -> bool {
    ('а'..='я').contains(&c) || c == 'ё'
}

pub fn is_russian_uppercase(c: char) -> bool {
    ('А'..='Я').contains(&c) || c == 'Ё'
}

pub fn is_russian_letter(c: char) -> bool {
    is_russian_lowercase(c) || is_russian_uppercase(c)
}

/// Every code point a scheme's character map must cover:
/// both cases of the Russian alphabet and the guillemets.
pub fn required_code_points() -> impl Iterator<Item = char> {
    RUSSIAN_LOWERCASE
        .chars()
        .chain(RUSSIAN_UPPERCASE.chars())
        .chain(GUILLEMETS)
}

/// Check if a string still contains Russian letters.
pub fn contains_cyrillic(s: &str) -> bool {
    s.chars().any(is_russian_letter)
}

/// Uppercase a single character, keeping it unchanged when the uppercase
/// form is not exactly one code point.
pub fn to_upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
