use deunicode::deunicode;

mod dates;

pub use self::dates::diff_for_humans;

const SEPARATOR: char = '-';

/// Turns a title into a url safe slug: lowercase ascii letters and digits
/// joined by single hyphens.
///
/// Letters outside ascii are transliterated first ("é" becomes "e", "д"
/// becomes "d"). Whitespace, hyphens and underscores separate words, `@`
/// reads as "at", and every other character is dropped. Anything that leaves
/// no letters or digits behind produces an empty string.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_separator = false;

    for c in deunicode(&value.replace('@', "-at-")).chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if c == SEPARATOR || c == '_' || c.is_whitespace() {
            pending_separator = true;
        }
    }

    slug
}
