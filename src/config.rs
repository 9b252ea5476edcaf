use crate::{event_logger::NoopEventLogger, Client, EventLogger};

/// Configuration for [`Client`].
///
/// # Examples
/// ```
/// # use batch_user::ClientConfig;
/// let client = ClientConfig::from_api_key("api-key")
///     .event_logger(|event| {
///         println!("{:?}", event);
///     })
///     .to_client();
/// ```
pub struct ClientConfig<'a> {
    pub(crate) api_key: String,
    pub(crate) installation_id: Option<String>,
    pub(crate) event_logger: Box<dyn EventLogger + Send + Sync + 'a>,
}

impl<'a> ClientConfig<'a> {
    /// Create a default Batch configuration using the specified API key.
    ///
    /// ```
    /// # use batch_user::ClientConfig;
    /// ClientConfig::from_api_key("api-key");
    /// ```
    pub fn from_api_key(api_key: impl Into<String>) -> Self {
        ClientConfig {
            api_key: api_key.into(),
            installation_id: None,
            event_logger: Box::new(NoopEventLogger),
        }
    }

    /// Set event logger to receive tracked events and transactions.
    ///
    /// ```
    /// # use batch_user::ClientConfig;
    /// let config = ClientConfig::from_api_key("api-key").event_logger(|event| {
    ///   println!("{:?}", event);
    /// });
    /// ```
    pub fn event_logger(mut self, event_logger: impl EventLogger + Send + Sync + 'a) -> Self {
        self.event_logger = Box::new(event_logger);
        self
    }

    /// Restore a previously assigned installation ID instead of generating a new one on
    /// [`Client::start()`].
    pub fn installation_id(mut self, installation_id: impl Into<String>) -> Self {
        self.installation_id = Some(installation_id.into());
        self
    }

    /// Create a new [`Client`] using the specified configuration.
    ///
    /// ```
    /// # use batch_user::{ClientConfig, Client};
    /// let client: Client = ClientConfig::from_api_key("api-key").to_client();
    /// ```
    pub fn to_client(self) -> Client<'a> {
        Client::new(self)
    }
}
