use thiserror::Error;

/// Result type of the validation helpers.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a call gets rejected.
///
/// Tracking and editing never return these: rejected calls are logged and dropped. They are
/// returned by the [`validation`](crate::validation) helpers and by [`Client::start()`](crate::Client::start).
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Attribute key is empty, too long or contains characters other than `[a-z0-9_]`.
    #[error("invalid attribute key {0:?}, expected [a-z0-9_] and at most 30 characters")]
    InvalidAttributeKey(String),
    /// Tag collection name is empty, too long or contains characters other than `[a-z0-9_]`.
    #[error("invalid tag collection {0:?}, expected [a-z0-9_] and at most 30 characters")]
    InvalidTagCollection(String),
    /// Event name is empty, too long or contains characters other than `[a-z0-9_]`.
    #[error("invalid event name {0:?}, expected [a-z0-9_] and at most 30 characters")]
    InvalidEventName(String),
    /// Tag is empty or too long.
    #[error("invalid tag {0:?}, expected between 1 and 64 characters")]
    InvalidTag(String),
    #[error("string attribute value is longer than 64 characters")]
    AttributeValueTooLong,
    #[error("number attribute value must be finite")]
    NonFiniteNumber,
    #[error("integer attribute value does not fit in a signed 64-bit integer")]
    IntegerOutOfRange,
    /// Arrays, objects and other values that can't be stored as an attribute.
    #[error("unsupported attribute value type: {0}")]
    UnsupportedAttributeType(&'static str),
    #[error("invalid language {0:?}, expected a lowercase ISO 639 code")]
    InvalidLanguage(String),
    #[error("invalid region {0:?}, expected an uppercase ISO 3166 code")]
    InvalidRegion(String),
    #[error("invalid identifier, expected between 1 and 1024 characters")]
    InvalidIdentifier,
    /// Event or transaction data is not a JSON object.
    #[error("event data must be a JSON object, got {0}")]
    InvalidEventData(&'static str),
    #[error("transaction amount must be finite")]
    InvalidAmount,
    /// The configured API key is blank.
    #[error("API key is empty")]
    MissingApiKey,
}
