use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::AttributeValue;

/// Committed profile of the current installation.
///
/// `UserData` is an immutable snapshot: [`UserDataEditor::save`](crate::UserDataEditor::save)
/// never modifies it in place, it replaces it with a new snapshot.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// Language override, `None` when the detected language is used.
    pub language: Option<String>,
    /// Region override, `None` when the detected region is used.
    pub region: Option<String>,
    /// Custom user identifier shared across installations of the same user.
    pub identifier: Option<String>,
    /// Custom attributes by key. Never contains [`AttributeValue::Null`].
    pub attributes: BTreeMap<String, AttributeValue>,
    /// Tags by collection name. Collections are never empty.
    pub tags: BTreeMap<String, BTreeSet<String>>,
}

impl UserData {
    /// Get an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Get tags of a collection. Returns `None` for unknown collections.
    pub fn tag_collection(&self, collection: &str) -> Option<&BTreeSet<String>> {
        self.tags.get(collection)
    }

    /// Returns `true` if `tag` is present in `collection`.
    pub fn has_tag(&self, collection: &str, tag: &str) -> bool {
        self.tags
            .get(collection)
            .is_some_and(|tags| tags.contains(tag))
    }
}
