//! Style classification.
//!
//! Each predicate is a structural scan rather than a segment-and-render
//! round trip. A predicate accepts text only if it is non-empty and, for
//! delimited styles, has no empty word around any separator.

use crate::style::Style;

/// Order in which `classify` tries the styles. Delimited styles come first;
/// a bare lowercase word such as `foobar` is therefore Snake.
const PRIORITY: [Style; 9] = [
    Style::Snake,
    Style::Kebab,
    Style::Lower,
    Style::Camel,
    Style::Constant,
    Style::Upper,
    Style::Pascal,
    Style::Header,
    Style::Capital,
];

/// Style that `text` already follows, or `Unknown`.
pub fn classify(text: &str) -> Style {
    PRIORITY
        .into_iter()
        .find(|&style| matches(text, style))
        .unwrap_or(Style::Unknown)
}

/// Whether `text` conforms to `style`.
///
/// `Unknown` matches exactly the texts that no other style matches.
pub fn matches(text: &str, style: Style) -> bool {
    match style {
        Style::Camel => is_camel_case(text),
        Style::Pascal => is_pascal_case(text),
        Style::Snake => is_snake_case(text),
        Style::Constant => is_constant_case(text),
        Style::Kebab => is_kebab_case(text),
        Style::Header => is_header_case(text),
        Style::Lower => is_lower_case(text),
        Style::Upper => is_upper_case(text),
        Style::Capital => is_capital_case(text),
        Style::Unknown => classify(text) == Style::Unknown,
    }
}

/// `fooBar`: letters and digits only, starting lowercase.
pub fn is_camel_case(text: &str) -> bool {
    undelimited(text, |first| first.is_ascii_lowercase())
}

/// `FooBar`: letters and digits only, starting uppercase.
pub fn is_pascal_case(text: &str) -> bool {
    undelimited(text, |first| first.is_ascii_uppercase())
}

/// `foo_bar`
pub fn is_snake_case(text: &str) -> bool {
    separated_by(text, b'_', all_lower)
}

/// `FOO_BAR`
pub fn is_constant_case(text: &str) -> bool {
    separated_by(text, b'_', all_upper)
}

/// `foo-bar`
pub fn is_kebab_case(text: &str) -> bool {
    separated_by(text, b'-', all_lower)
}

/// `Foo-Bar`
pub fn is_header_case(text: &str) -> bool {
    separated_by(text, b'-', capitalized)
}

/// `foo bar`
pub fn is_lower_case(text: &str) -> bool {
    separated_by(text, b' ', all_lower)
}

/// `FOO BAR`
pub fn is_upper_case(text: &str) -> bool {
    separated_by(text, b' ', all_upper)
}

/// `Foo Bar`
pub fn is_capital_case(text: &str) -> bool {
    separated_by(text, b' ', capitalized)
}

fn undelimited(text: &str, first_ok: impl Fn(u8) -> bool) -> bool {
    let bytes = text.as_bytes();
    bytes.first().is_some_and(|&b| first_ok(b)) && bytes.iter().all(u8::is_ascii_alphanumeric)
}

fn separated_by(text: &str, separator: u8, word_ok: impl Fn(&[u8]) -> bool) -> bool {
    !text.is_empty()
        && text
            .as_bytes()
            .split(|&b| b == separator)
            .all(|word| !word.is_empty() && word_ok(word))
}

fn is_lower_or_digit(b: &u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}

fn is_upper_or_digit(b: &u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit()
}

fn all_lower(word: &[u8]) -> bool {
    word.iter().all(is_lower_or_digit)
}

fn all_upper(word: &[u8]) -> bool {
    word.iter().all(is_upper_or_digit)
}

/// First byte uppercase (or a digit), the rest lowercase or digits.
fn capitalized(word: &[u8]) -> bool {
    match word.split_first() {
        Some((first, rest)) => is_upper_or_digit(first) && rest.iter().all(is_lower_or_digit),
        None => false,
    }
}
