//! The Rust SDK for Batch user features: installation identity, user profile edition and event
//! tracking.
//!
//! # Overview
//!
//! The SDK revolves around a [`Client`], created from a [`ClientConfig`]. Once started with
//! [`Client::start()`], the client has an installation ID and can track events and transactions.
//!
//! The user profile (language and region overrides, custom identifier, attributes and tags) is
//! changed through a [`UserDataEditor`]. An editor stages changes and applies them all at once
//! when [`UserDataEditor::save()`] is called:
//!
//! ```
//! # use batch_user::ClientConfig;
//! let client = ClientConfig::from_api_key("api-key").to_client();
//! client.start().unwrap();
//!
//! let mut editor = client.editor();
//! editor
//!     .set_identifier(Some("user-42"))
//!     .set_attribute("age", 42)
//!     .add_tag("premium", "plans");
//! editor.save();
//! ```
//!
//! # Event logger
//!
//! An [`EventLogger`] should be provided to receive tracked events and transactions and hand them
//! over to your delivery pipeline.
//!
//! ```
//! # use batch_user::ClientConfig;
//! let config = ClientConfig::from_api_key("api-key").event_logger(|event| {
//!   println!("{:?}", event);
//! });
//! ```
//!
//! # Error Handling
//!
//! Tracking and editing never fail from the caller's point of view: invalid input (bad key
//! format, too long values, unsupported types, non-object JSON data) is logged and ignored.
//!
//! The reasons are represented by the [`Error`] enum, which the [`validation`] helpers return
//! for callers who want to check their input upfront.
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate for logging
//! messages, under the `batch` target. Consider integrating a `log`-compatible logger
//! implementation for better visibility into SDK operations, in particular to see why a call was
//! ignored.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(missing_docs)]

mod attributes;
mod client;
mod config;
mod editor;
mod error;
mod event_logger;
mod events;
mod operation;
mod user_data;
mod user_data_store;
pub mod validation;

pub use attributes::AttributeValue;
pub use client::Client;
pub use config::ClientConfig;
pub use editor::UserDataEditor;
pub use error::{Error, Result};
pub use event_logger::EventLogger;
pub use events::{Event, EventData, TrackedEvent, Transaction};
pub use operation::UserDataOperation;
pub use user_data::UserData;
