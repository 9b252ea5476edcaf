//! Input checks shared by [`UserDataEditor`](crate::UserDataEditor) and event tracking.
//!
//! All length limits count characters, not bytes.
use std::sync::OnceLock;

use regex::Regex;

use crate::{Error, Result};

/// Maximum length of attribute keys, tag collections and event names.
pub const MAX_KEY_LENGTH: usize = 30;
/// Maximum length of string attribute values and tags.
pub const MAX_STRING_LENGTH: usize = 64;
/// Maximum length of a custom user identifier.
pub const MAX_IDENTIFIER_LENGTH: usize = 1024;

fn key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9_]{1,30}$").expect("key pattern is valid"))
}

fn language_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z]{2,3}$").expect("language pattern is valid"))
}

fn region_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]{2}$").expect("region pattern is valid"))
}

fn is_valid_key(key: &str) -> bool {
    key_regex().is_match(key)
}

/// Attribute keys are made of `[a-z0-9_]` and at most 30 characters long.
pub fn validate_attribute_key(key: &str) -> Result<()> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(Error::InvalidAttributeKey(key.to_owned()))
    }
}

/// Tag collections follow the attribute key rules.
pub fn validate_tag_collection(collection: &str) -> Result<()> {
    if is_valid_key(collection) {
        Ok(())
    } else {
        Err(Error::InvalidTagCollection(collection.to_owned()))
    }
}

/// Event names follow the attribute key rules.
pub fn validate_event_name(name: &str) -> Result<()> {
    if is_valid_key(name) {
        Ok(())
    } else {
        Err(Error::InvalidEventName(name.to_owned()))
    }
}

/// Tags are between 1 and 64 characters long.
pub fn validate_tag(tag: &str) -> Result<()> {
    let len = tag.chars().count();
    if (1..=MAX_STRING_LENGTH).contains(&len) {
        Ok(())
    } else {
        Err(Error::InvalidTag(tag.to_owned()))
    }
}

/// String attribute values are at most 64 characters long and may be empty.
pub fn validate_string_value(value: &str) -> Result<()> {
    if value.chars().count() <= MAX_STRING_LENGTH {
        Ok(())
    } else {
        Err(Error::AttributeValueTooLong)
    }
}

/// Language overrides are lowercase ISO 639 codes, e.g., `fr` or `haw`.
pub fn validate_language(language: &str) -> Result<()> {
    if language_regex().is_match(language) {
        Ok(())
    } else {
        Err(Error::InvalidLanguage(language.to_owned()))
    }
}

/// Region overrides are uppercase ISO 3166-1 alpha-2 codes, e.g., `FR`.
pub fn validate_region(region: &str) -> Result<()> {
    if region_regex().is_match(region) {
        Ok(())
    } else {
        Err(Error::InvalidRegion(region.to_owned()))
    }
}

/// Custom identifiers are between 1 and 1024 characters long.
pub fn validate_identifier(identifier: &str) -> Result<()> {
    let len = identifier.chars().count();
    if (1..=MAX_IDENTIFIER_LENGTH).contains(&len) {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_keys() {
        let longest = "k".repeat(MAX_KEY_LENGTH);
        for key in ["a", "age", "last_purchase_2", "_", "0", longest.as_str()] {
            assert_eq!(validate_attribute_key(key), Ok(()), "{key:?}");
        }
    }

    #[test]
    fn rejects_malformed_keys() {
        let too_long = "k".repeat(MAX_KEY_LENGTH + 1);
        for key in [
            "",
            "Age",
            "first name",
            "invalid name!",
            "clé",
            "dash-key",
            too_long.as_str(),
        ] {
            assert_eq!(
                validate_attribute_key(key),
                Err(Error::InvalidAttributeKey(key.to_owned())),
                "{key:?}"
            );
        }
    }

    #[test]
    fn key_rules_apply_to_collections_and_event_names() {
        assert!(validate_tag_collection("interests").is_ok());
        assert!(validate_tag_collection("Interests").is_err());
        assert!(validate_event_name("purchase_done").is_ok());
        assert!(validate_event_name("invalid name!").is_err());
    }

    #[test]
    fn tag_length_is_bounded() {
        assert!(validate_tag("").is_err());
        assert!(validate_tag("Some Tag!").is_ok());
        assert!(validate_tag(&"é".repeat(MAX_STRING_LENGTH)).is_ok());
        assert!(validate_tag(&"t".repeat(MAX_STRING_LENGTH + 1)).is_err());
    }

    #[test]
    fn string_values_count_characters() {
        assert!(validate_string_value("").is_ok());
        assert!(validate_string_value(&"ü".repeat(64)).is_ok());
        assert_eq!(
            validate_string_value(&"a".repeat(65)),
            Err(Error::AttributeValueTooLong)
        );
    }

    #[test]
    fn locale_overrides() {
        assert!(validate_language("fr").is_ok());
        assert!(validate_language("haw").is_ok());
        assert!(validate_language("FR").is_err());
        assert!(validate_language("f").is_err());
        assert!(validate_region("US").is_ok());
        assert!(validate_region("us").is_err());
        assert!(validate_region("USA").is_err());
    }

    #[test]
    fn identifier_length_is_bounded() {
        assert!(validate_identifier("user-42@example.com").is_ok());
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier(&"x".repeat(MAX_IDENTIFIER_LENGTH + 1)).is_err());
    }
}
