//! Pure validation rules for the checkout fields.
//!
//! Each rule maps the current text of a field to a validity flag. The patterns
//! are intentionally loose (the email rule accepts plenty of addresses RFC 5322
//! would reject) and must stay that way.

use super::field::FieldId;
use once_cell::sync::Lazy;
use regex::Regex;

/// A rule mapping a field's raw value to its validity.
pub type ValidationRule = fn(&str) -> bool;

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_PHONE_DIGITS: usize = 10;

// `\s` plus U+FEFF, which browsers count as whitespace.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern compiles")
});

// ASCII digits only; `\d` would accept any Unicode decimal digit.
static POSTAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4,6}$").expect("postal pattern compiles"));

/// Trims the way a browser's `String.prototype.trim` does.
///
/// U+FEFF is stripped, U+0085 (NEL) is kept.
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
}

/// Length is measured in UTF-16 code units, as the input element reports it.
pub fn full_name(value: &str) -> bool {
    trim_input(value).encode_utf16().count() >= MIN_NAME_LEN
}

pub fn email(value: &str) -> bool {
    EMAIL_RE.is_match(trim_input(value))
}

/// Counts the digits left after dropping every non-digit character.
pub fn phone(value: &str) -> bool {
    value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

pub fn required(value: &str) -> bool {
    !trim_input(value).is_empty()
}

pub fn postal_code(value: &str) -> bool {
    POSTAL_RE.is_match(trim_input(value))
}

/// A select counts as chosen whenever its value is non-empty.
pub fn country(value: &str) -> bool {
    !value.is_empty()
}

/// Returns the rule that validates `id`.
pub fn rule_for(id: FieldId) -> ValidationRule {
    match id {
        FieldId::FullName => full_name,
        FieldId::Email => email,
        FieldId::Phone => phone,
        FieldId::Address | FieldId::City => required,
        FieldId::Zip => postal_code,
        FieldId::Country => country,
        FieldId::CardName | FieldId::CardNumber | FieldId::CardExpiry | FieldId::CardCvv => {
            required
        }
    }
}
