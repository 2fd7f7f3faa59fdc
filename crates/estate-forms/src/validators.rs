// File: src/validators.rs
// Purpose: Named predicates that can back a rule's custom check

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use crate::rule::Predicate;
use crate::value::FieldValue;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex")
});

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("url regex"));

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+\d{7,15}$").expect("phone regex"));

const PUBLIC_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "mail.ru",
    "yandex.ru",
    "yandex.com",
    "protonmail.com",
];

/// Names accepted by [`builtin`]
pub const BUILTIN_NAMES: &[&str] = &["email", "url", "phone", "password", "no_public_domain"];

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

/// International number: `+` then 7 to 15 digits, spaces and dashes ignored
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    PHONE_REGEX.is_match(&compact)
}

/// Check if email is from a public mail provider (case-insensitive)
pub fn is_public_domain(email: &str) -> bool {
    email
        .rsplit_once('@')
        .map(|(_, domain)| {
            let domain = domain.to_ascii_lowercase();
            PUBLIC_DOMAINS.iter().any(|pd| domain == *pd)
        })
        .unwrap_or(false)
}

/// 8+ characters with uppercase, lowercase, digit and special character
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(char::is_uppercase)
        && password.chars().any(char::is_lowercase)
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_alphanumeric())
}

/// Lift a text check into a predicate; non-text values pass
fn text_predicate(check: fn(&str) -> bool) -> Predicate {
    Arc::new(move |value: &FieldValue| value.as_text().map(check).unwrap_or(true))
}

/// Look up a named predicate
pub fn builtin(name: &str) -> Option<Predicate> {
    let predicate = match name {
        "email" => text_predicate(is_valid_email),
        "url" => text_predicate(is_valid_url),
        "phone" => text_predicate(is_valid_phone),
        "password" => text_predicate(is_strong_password),
        "no_public_domain" => text_predicate(|email| !is_public_domain(email)),
        _ => return None,
    };
    Some(predicate)
}
