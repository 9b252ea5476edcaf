use std::sync::Arc;

use crate::{
    user_data_store::UserDataStore, validation, AttributeValue, Result, UserDataOperation,
};

/// Editor for the user profile: language and region overrides, identifier, custom attributes and
/// tags.
///
/// Get an instance with [`Client::editor()`](crate::Client::editor). Changes are staged in the
/// editor and nothing is applied until [`UserDataEditor::save()`] is called, which commits all of
/// them at once.
///
/// Invalid input is never reported to the caller: the offending call is logged (target `batch`)
/// and ignored, while the other staged changes are kept.
///
/// # Examples
/// ```
/// # use batch_user::ClientConfig;
/// let client = ClientConfig::from_api_key("api-key").to_client();
///
/// let mut editor = client.editor();
/// editor
///     .set_attribute("age", 42)
///     .set_attribute("plan", "premium")
///     .add_tag("sports", "interests");
/// editor.save();
///
/// assert!(client.user_data().has_tag("interests", "sports"));
/// ```
#[derive(Debug)]
#[must_use = "changes are discarded unless `save()` is called"]
pub struct UserDataEditor {
    store: Arc<UserDataStore>,
    operations: Vec<UserDataOperation>,
}

impl UserDataEditor {
    pub(crate) fn new(store: Arc<UserDataStore>) -> Self {
        UserDataEditor {
            store,
            operations: Vec::new(),
        }
    }

    /// Override the detected user language with a lowercase ISO 639 code. `None` resets it.
    pub fn set_language(&mut self, language: Option<&str>) -> &mut Self {
        let checked = language.map_or(Ok(()), validation::validate_language);
        self.stage("set_language", checked, || UserDataOperation::SetLanguage {
            language: language.map(ToOwned::to_owned),
        })
    }

    /// Override the detected user region with an uppercase ISO 3166 code. `None` resets it.
    pub fn set_region(&mut self, region: Option<&str>) -> &mut Self {
        let checked = region.map_or(Ok(()), validation::validate_region);
        self.stage("set_region", checked, || UserDataOperation::SetRegion {
            region: region.map(ToOwned::to_owned),
        })
    }

    /// Set the custom user identifier. `None` removes it.
    ///
    /// Make sure the identifier uniquely identifies a user: every installation sharing an
    /// identifier receives pushes sent to it, and restore features rely on it.
    pub fn set_identifier(&mut self, identifier: Option<&str>) -> &mut Self {
        let checked = identifier.map_or(Ok(()), validation::validate_identifier);
        self.stage("set_identifier", checked, || UserDataOperation::SetIdentifier {
            identifier: identifier.map(ToOwned::to_owned),
        })
    }

    /// Set a custom attribute. Setting [`AttributeValue::Null`] (or an empty `Option`) removes
    /// the attribute.
    ///
    /// `key` must be made of `[a-z0-9_]` and can't be longer than 30 characters. String values
    /// can't be longer than 64 characters and floats must be finite.
    pub fn set_attribute(&mut self, key: &str, value: impl Into<AttributeValue>) -> &mut Self {
        let value = value.into();
        let checked = validation::validate_attribute_key(key).and_then(|()| value.validate());
        log::trace!(target: "batch", key, value_type = value.type_name(); "staging attribute");
        self.stage("set_attribute", checked, || UserDataOperation::SetAttribute {
            key: key.to_owned(),
            value,
        })
    }

    /// Remove the attribute for `key`. Removing a missing attribute does nothing.
    pub fn remove_attribute(&mut self, key: &str) -> &mut Self {
        let checked = validation::validate_attribute_key(key);
        self.stage("remove_attribute", checked, || {
            UserDataOperation::RemoveAttribute {
                key: key.to_owned(),
            }
        })
    }

    /// Remove all custom attributes. Once saved, this cannot be undone.
    pub fn clear_attributes(&mut self) -> &mut Self {
        self.stage("clear_attributes", Ok(()), || UserDataOperation::ClearAttributes)
    }

    /// Add `tag` to `collection`, creating the collection if needed.
    ///
    /// `tag` must be between 1 and 64 characters. `collection` must be made of `[a-z0-9_]` and
    /// can't be longer than 30 characters.
    pub fn add_tag(&mut self, tag: &str, collection: &str) -> &mut Self {
        let checked = validation::validate_tag(tag)
            .and_then(|()| validation::validate_tag_collection(collection));
        self.stage("add_tag", checked, || UserDataOperation::AddTag {
            collection: collection.to_owned(),
            tag: tag.to_owned(),
        })
    }

    /// Remove `tag` from `collection`. Does nothing if either is missing.
    pub fn remove_tag(&mut self, tag: &str, collection: &str) -> &mut Self {
        let checked = validation::validate_tag(tag)
            .and_then(|()| validation::validate_tag_collection(collection));
        self.stage("remove_tag", checked, || UserDataOperation::RemoveTag {
            collection: collection.to_owned(),
            tag: tag.to_owned(),
        })
    }

    /// Remove all tags from all collections. Once saved, this cannot be undone.
    pub fn clear_tags(&mut self) -> &mut Self {
        self.stage("clear_tags", Ok(()), || UserDataOperation::ClearTags)
    }

    /// Remove all tags of `collection`. Unknown collections are ignored and don't make
    /// [`save()`](UserDataEditor::save) fail. Once saved, this cannot be undone.
    pub fn clear_tag_collection(&mut self, collection: &str) -> &mut Self {
        let checked = validation::validate_tag_collection(collection);
        self.stage("clear_tag_collection", checked, || {
            UserDataOperation::ClearTagCollection {
                collection: collection.to_owned(),
            }
        })
    }

    /// Operations staged so far, in call order.
    pub fn pending_operations(&self) -> &[UserDataOperation] {
        &self.operations
    }

    /// Save all staged changes at once. Once saved, this cannot be undone.
    ///
    /// The editor is consumed: get a new one from [`Client::editor()`](crate::Client::editor) to
    /// make further changes. Saving an editor without staged changes does nothing.
    pub fn save(self) {
        if self.operations.is_empty() {
            log::debug!(target: "batch", "saving editor without changes");
            return;
        }

        let count = self.operations.len();
        let user_data = self.store.commit(&self.operations);
        log::debug!(target: "batch",
                    operations = count,
                    attributes = user_data.attributes.len(),
                    tag_collections = user_data.tags.len();
                    "saved user data changes");
    }

    fn stage(
        &mut self,
        method: &'static str,
        checked: Result<()>,
        operation: impl FnOnce() -> UserDataOperation,
    ) -> &mut Self {
        match checked {
            Ok(()) => self.operations.push(operation()),
            Err(err) => {
                log::warn!(target: "batch", method; "ignoring invalid editor call: {}", err);
            }
        }
        self
    }
}
