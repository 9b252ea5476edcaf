use std::sync::{Arc, OnceLock};

use serde::Serialize;
use uuid::Uuid;

use crate::{
    events::{Event, Transaction},
    user_data_store::UserDataStore,
    ClientConfig, Error, Result, TrackedEvent, UserData, UserDataEditor,
};

/// A client for Batch user features: installation identity, profile edition and event tracking.
///
/// In order to create a client instance, first create [`ClientConfig`]. A client is `Send + Sync`
/// and every method can be called from any thread.
///
/// # Starting
///
/// Until [`Client::start()`] is called, the client has no installation ID and tracked events and
/// transactions are dropped. Profile changes made with [`Client::editor()`] are kept either way.
///
/// # Examples
/// ```
/// # use batch_user::{Client, ClientConfig};
/// let client = Client::new(ClientConfig::from_api_key("api-key"));
/// assert_eq!(client.installation_id(), None);
///
/// client.start().unwrap();
/// assert!(client.installation_id().is_some());
/// ```
pub struct Client<'a> {
    user_data_store: Arc<UserDataStore>,
    installation_id: OnceLock<String>,
    config: ClientConfig<'a>,
}

impl<'a> Client<'a> {
    /// Create a new `Client` using the specified configuration.
    ///
    /// ```
    /// # use batch_user::{ClientConfig, Client};
    /// let client = Client::new(ClientConfig::from_api_key("api-key"));
    /// ```
    pub fn new(config: ClientConfig<'a>) -> Self {
        Client {
            user_data_store: Arc::new(UserDataStore::new()),
            installation_id: OnceLock::new(),
            config,
        }
    }

    /// Start Batch, assigning the installation ID.
    ///
    /// The installation ID is the one set with [`ClientConfig::installation_id()`] or, if none was
    /// set, a newly generated one. Calling `start()` again keeps the same ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] if the configured API key is blank. The client stays
    /// stopped in that case.
    pub fn start(&self) -> Result<()> {
        if self.config.api_key.trim().is_empty() {
            log::warn!(target: "batch", "cannot start Batch without an API key");
            return Err(Error::MissingApiKey);
        }

        let installation_id = self.installation_id.get_or_init(|| {
            match self.config.installation_id.as_deref() {
                Some(id) if !id.is_empty() => id.to_owned(),
                _ => Uuid::new_v4().to_string().to_uppercase(),
            }
        });
        log::debug!(target: "batch", installation_id = installation_id.as_str(); "Batch started");

        Ok(())
    }

    /// Returns `true` once [`Client::start()`] has succeeded.
    pub fn is_started(&self) -> bool {
        self.installation_id.get().is_some()
    }

    /// Get the unique installation ID, generated by Batch. Returns `None` if Batch isn't started.
    pub fn installation_id(&self) -> Option<String> {
        self.installation_id.get().cloned()
    }

    /// Get a new user data editor. Do not forget to call [`UserDataEditor::save()`] once you're
    /// done with your changes.
    pub fn editor(&self) -> UserDataEditor {
        UserDataEditor::new(self.user_data_store.clone())
    }

    /// Get the currently saved user data.
    pub fn user_data(&self) -> Arc<UserData> {
        self.user_data_store.get_user_data()
    }

    /// Track an event.
    ///
    /// `name` must be made of `[a-z0-9_]` and can't be longer than 30 characters. `data`, if
    /// present, must be a JSON object.
    ///
    /// Invalid events, and events tracked before [`Client::start()`], are logged and dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use serde_json::json;
    /// # fn test(client: &batch_user::Client) {
    /// client.track_event("purchase_done", Some("sale"), Some(json!({"amount": 10})));
    /// # }
    /// ```
    pub fn track_event(&self, name: &str, label: Option<&str>, data: Option<serde_json::Value>) {
        let Some(installation_id) = self.installation_id() else {
            log::warn!(target: "batch", name; "tracking an event before Batch has been started, dropping it");
            return;
        };

        match Event::new(installation_id, name, label, data) {
            Ok(event) => {
                log::trace!(target: "batch", event:serde; "tracking event");
                self.config.event_logger.log_event(TrackedEvent::Event(event));
            }
            Err(err) => {
                log::warn!(target: "batch", name; "ignoring invalid event: {}", err);
            }
        }
    }

    /// Track a transaction. `data`, if present, must be a JSON object.
    ///
    /// Invalid transactions, and transactions tracked before [`Client::start()`], are logged and
    /// dropped.
    pub fn track_transaction(&self, amount: f64, data: Option<serde_json::Value>) {
        let Some(installation_id) = self.installation_id() else {
            log::warn!(target: "batch", amount; "tracking a transaction before Batch has been started, dropping it");
            return;
        };

        match Transaction::new(installation_id, amount, data) {
            Ok(transaction) => {
                log::trace!(target: "batch", transaction:serde; "tracking transaction");
                self.config
                    .event_logger
                    .log_event(TrackedEvent::Transaction(transaction));
            }
            Err(err) => {
                log::warn!(target: "batch", amount; "ignoring invalid transaction: {}", err);
            }
        }
    }

    /// Render the installation ID and the saved user data as pretty-printed JSON.
    pub fn debug_information(&self) -> String {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct DebugInformation<'d> {
            installation_id: Option<&'d str>,
            #[serde(flatten)]
            user_data: &'d UserData,
        }

        let user_data = self.user_data();
        let info = DebugInformation {
            installation_id: self.installation_id.get().map(String::as_str),
            user_data: &user_data,
        };
        // Only strings, numbers and dates: serialization cannot fail.
        serde_json::to_string_pretty(&info).unwrap_or_default()
    }

    /// Print the currently known attributes and tags to the logs (`info` level, target `batch`).
    pub fn print_debug_information(&self) {
        log::info!(target: "batch", "user data debug information:\n{}", self.debug_information());
    }
}
