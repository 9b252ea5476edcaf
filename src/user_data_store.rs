//! A thread-safe in-memory storage for the committed [`UserData`]. [`UserDataStore`] provides
//! concurrent access for readers (debug dumps, inspection) and writers (editors being saved).
use std::sync::{Arc, RwLock};

use crate::{operation, UserData, UserDataOperation};

/// `UserDataStore` holds the current [`UserData`] snapshot.
///
/// `UserData` itself is always immutable and can only be replaced completely, so a reader never
/// observes a partially applied batch.
#[derive(Debug, Default)]
pub(crate) struct UserDataStore {
    user_data: RwLock<Arc<UserData>>,
}

impl UserDataStore {
    pub fn new() -> Self {
        UserDataStore::default()
    }

    pub fn get_user_data(&self) -> Arc<UserData> {
        // A poisoned lock still holds a consistent snapshot because writers only swap the `Arc`.
        let user_data = self
            .user_data
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        user_data.clone()
    }

    /// Apply `operations` on top of the current snapshot as one unit and return the new snapshot.
    ///
    /// Commits are serialized: each batch sees every batch committed before it.
    pub fn commit(&self, operations: &[UserDataOperation]) -> Arc<UserData> {
        let mut slot = self
            .user_data
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if operations.is_empty() {
            return slot.clone();
        }

        let new_value = Arc::new(operation::apply_all(&slot, operations));
        *slot = new_value.clone();
        new_value
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::UserDataStore;
    use crate::{AttributeValue, UserDataOperation};

    fn set(key: &str, value: i64) -> UserDataOperation {
        UserDataOperation::SetAttribute {
            key: key.to_owned(),
            value: AttributeValue::Integer(value),
        }
    }

    #[test]
    fn empty_commit_keeps_snapshot() {
        let store = UserDataStore::new();
        let before = store.get_user_data();
        let after = store.commit(&[]);
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn earlier_snapshots_are_not_affected_by_commits() {
        let store = UserDataStore::new();
        let before = store.get_user_data();
        store.commit(&[set("age", 30)]);
        assert!(before.attributes.is_empty());
        assert_eq!(
            store.get_user_data().attribute("age"),
            Some(&AttributeValue::Integer(30))
        );
    }

    #[test]
    fn can_commit_from_other_threads() {
        let store = Arc::new(UserDataStore::new());

        let handles = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store.commit(&[set(&format!("key_{i}"), i), set("shared", i)]);
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }

        let user_data = store.get_user_data();
        // 8 distinct keys plus the shared one
        assert_eq!(user_data.attributes.len(), 9);
        assert!(matches!(
            user_data.attribute("shared"),
            Some(AttributeValue::Integer(0..=7))
        ));
    }
}
