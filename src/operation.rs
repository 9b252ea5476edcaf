use serde::Serialize;

use crate::{AttributeValue, UserData};

/// A single staged change to [`UserData`].
///
/// Operations are only constructed by [`UserDataEditor`](crate::UserDataEditor) after their input
/// has been validated, so applying them cannot fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum UserDataOperation {
    SetLanguage { language: Option<String> },
    SetRegion { region: Option<String> },
    SetIdentifier { identifier: Option<String> },
    /// Setting [`AttributeValue::Null`] removes the attribute.
    SetAttribute { key: String, value: AttributeValue },
    RemoveAttribute { key: String },
    ClearAttributes,
    /// Creates the collection if needed.
    AddTag { collection: String, tag: String },
    /// Drops the collection once it's empty.
    RemoveTag { collection: String, tag: String },
    ClearTags,
    ClearTagCollection { collection: String },
}

impl UserDataOperation {
    /// Apply the operation to `data`. Removing something that is absent is a no-op.
    pub fn apply(&self, data: &mut UserData) {
        match self {
            UserDataOperation::SetLanguage { language } => data.language = language.clone(),
            UserDataOperation::SetRegion { region } => data.region = region.clone(),
            UserDataOperation::SetIdentifier { identifier } => {
                data.identifier = identifier.clone()
            }
            UserDataOperation::SetAttribute { key, value } => {
                if value.is_null() {
                    data.attributes.remove(key);
                } else {
                    data.attributes.insert(key.clone(), value.clone());
                }
            }
            UserDataOperation::RemoveAttribute { key } => {
                data.attributes.remove(key);
            }
            UserDataOperation::ClearAttributes => data.attributes.clear(),
            UserDataOperation::AddTag { collection, tag } => {
                data.tags
                    .entry(collection.clone())
                    .or_default()
                    .insert(tag.clone());
            }
            UserDataOperation::RemoveTag { collection, tag } => {
                if let Some(tags) = data.tags.get_mut(collection) {
                    tags.remove(tag);
                    if tags.is_empty() {
                        data.tags.remove(collection);
                    }
                }
            }
            UserDataOperation::ClearTags => data.tags.clear(),
            UserDataOperation::ClearTagCollection { collection } => {
                data.tags.remove(collection);
            }
        }
    }
}

/// Apply `operations` in order on top of `data`, returning the new snapshot.
pub(crate) fn apply_all(data: &UserData, operations: &[UserDataOperation]) -> UserData {
    let mut data = data.clone();
    for operation in operations {
        operation.apply(&mut data);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_tag(collection: &str, tag: &str) -> UserDataOperation {
        UserDataOperation::AddTag {
            collection: collection.to_owned(),
            tag: tag.to_owned(),
        }
    }

    fn set(key: &str, value: impl Into<AttributeValue>) -> UserDataOperation {
        UserDataOperation::SetAttribute {
            key: key.to_owned(),
            value: value.into(),
        }
    }

    #[test]
    fn set_attribute_replaces_existing_value() {
        let data = apply_all(&UserData::default(), &[set("age", 30), set("age", "thirty")]);
        assert_eq!(data.attribute("age"), Some(&AttributeValue::from("thirty")));
    }

    #[test]
    fn null_attribute_removes_key() {
        let data = apply_all(&UserData::default(), &[set("age", 30), set("age", None::<i64>)]);
        assert!(data.attributes.is_empty());
    }

    #[test]
    fn removing_absent_attribute_is_noop() {
        let before = apply_all(&UserData::default(), &[set("age", 30)]);
        let after = apply_all(
            &before,
            &[UserDataOperation::RemoveAttribute {
                key: "missing".to_owned(),
            }],
        );
        assert_eq!(before, after);
    }

    #[test]
    fn add_tag_creates_collection() {
        let data = apply_all(
            &UserData::default(),
            &[add_tag("interests", "sports"), add_tag("interests", "music")],
        );
        assert!(data.has_tag("interests", "sports"));
        assert!(data.has_tag("interests", "music"));
        assert_eq!(data.tag_collection("interests").map(|t| t.len()), Some(2));
    }

    #[test]
    fn remove_last_tag_drops_collection() {
        let data = apply_all(
            &UserData::default(),
            &[
                add_tag("interests", "sports"),
                UserDataOperation::RemoveTag {
                    collection: "interests".to_owned(),
                    tag: "sports".to_owned(),
                },
            ],
        );
        assert_eq!(data.tag_collection("interests"), None);
    }

    #[test]
    fn removing_absent_tag_is_noop() {
        let before = apply_all(&UserData::default(), &[add_tag("interests", "sports")]);
        let after = apply_all(
            &before,
            &[
                UserDataOperation::RemoveTag {
                    collection: "interests".to_owned(),
                    tag: "music".to_owned(),
                },
                UserDataOperation::RemoveTag {
                    collection: "unknown".to_owned(),
                    tag: "sports".to_owned(),
                },
                UserDataOperation::ClearTagCollection {
                    collection: "unknown".to_owned(),
                },
            ],
        );
        assert_eq!(before, after);
    }

    #[test]
    fn operations_apply_in_order() {
        let data = apply_all(
            &UserData::default(),
            &[
                set("age", 30),
                add_tag("interests", "sports"),
                UserDataOperation::ClearAttributes,
                UserDataOperation::ClearTags,
                set("plan", "pro"),
                add_tag("devices", "tablet"),
            ],
        );
        assert_eq!(data.attributes.len(), 1);
        assert!(data.has_tag("devices", "tablet"));
        assert!(!data.has_tag("interests", "sports"));
    }

    #[test]
    fn locale_and_identifier_can_be_cleared() {
        let data = apply_all(
            &UserData::default(),
            &[
                UserDataOperation::SetLanguage {
                    language: Some("fr".to_owned()),
                },
                UserDataOperation::SetRegion {
                    region: Some("FR".to_owned()),
                },
                UserDataOperation::SetIdentifier {
                    identifier: Some("user-1".to_owned()),
                },
                UserDataOperation::SetRegion { region: None },
            ],
        );
        assert_eq!(data.language.as_deref(), Some("fr"));
        assert_eq!(data.region, None);
        assert_eq!(data.identifier.as_deref(), Some("user-1"));
    }
}
