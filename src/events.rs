use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{validation, Error, Result};

/// Structured data attached to an event or a transaction. Always a JSON object.
pub type EventData = serde_json::Map<String, serde_json::Value>;

/// A custom event tracked with [`Client::track_event`](crate::Client::track_event).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event name, made of `[a-z0-9_]` and at most 30 characters long.
    pub name: String,
    /// Optional free-form label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Optional structured data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<EventData>,
    /// The installation the event was tracked on.
    pub installation_id: String,
    /// When the event was tracked.
    pub timestamp: DateTime<Utc>,
}

/// A transaction tracked with [`Client::track_transaction`](crate::Client::track_transaction).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction amount.
    pub amount: f64,
    /// Optional structured data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<EventData>,
    /// The installation the transaction was tracked on.
    pub installation_id: String,
    /// When the transaction was tracked.
    pub timestamp: DateTime<Utc>,
}

/// Anything passed to an [`EventLogger`](crate::EventLogger).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrackedEvent {
    /// A custom event.
    Event(Event),
    /// A transaction.
    Transaction(Transaction),
}

/// Check that `data` is a JSON object and unwrap it.
pub(crate) fn event_data(data: Option<serde_json::Value>) -> Result<Option<EventData>> {
    use serde_json::Value;

    match data {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(Value::Array(_)) => Err(Error::InvalidEventData("array")),
        Some(Value::Null) => Err(Error::InvalidEventData("null")),
        Some(Value::Bool(_)) => Err(Error::InvalidEventData("boolean")),
        Some(Value::Number(_)) => Err(Error::InvalidEventData("number")),
        Some(Value::String(_)) => Err(Error::InvalidEventData("string")),
    }
}

impl Event {
    pub(crate) fn new(
        installation_id: String,
        name: &str,
        label: Option<&str>,
        data: Option<serde_json::Value>,
    ) -> Result<Event> {
        validation::validate_event_name(name)?;
        Ok(Event {
            name: name.to_owned(),
            label: label.map(ToOwned::to_owned),
            data: event_data(data)?,
            installation_id,
            timestamp: Utc::now(),
        })
    }
}

impl Transaction {
    pub(crate) fn new(
        installation_id: String,
        amount: f64,
        data: Option<serde_json::Value>,
    ) -> Result<Transaction> {
        if !amount.is_finite() {
            return Err(Error::InvalidAmount);
        }
        Ok(Transaction {
            amount,
            data: event_data(data)?,
            installation_id,
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_object_data() {
        let event = Event::new(
            "install".to_owned(),
            "purchase_done",
            Some("sale"),
            Some(json!({"amount": 10})),
        )
        .unwrap();
        assert_eq!(event.name, "purchase_done");
        assert_eq!(event.label.as_deref(), Some("sale"));
        assert_eq!(event.data.unwrap()["amount"], json!(10));
    }

    #[test]
    fn rejects_non_object_data() {
        assert_eq!(
            event_data(Some(json!([{"amount": 10}]))),
            Err(Error::InvalidEventData("array"))
        );
        assert_eq!(
            event_data(Some(json!("amount"))),
            Err(Error::InvalidEventData("string"))
        );
        assert_eq!(event_data(None), Ok(None));
    }

    #[test]
    fn rejects_invalid_event_names() {
        assert_eq!(
            Event::new("install".to_owned(), "invalid name!", None, None),
            Err(Error::InvalidEventName("invalid name!".to_owned()))
        );
    }

    #[test]
    fn rejects_non_finite_amounts() {
        assert_eq!(
            Transaction::new("install".to_owned(), f64::NAN, None),
            Err(Error::InvalidAmount)
        );
        assert!(Transaction::new("install".to_owned(), -12.5, None).is_ok());
    }

    #[test]
    fn serializes_with_kind() {
        let event = TrackedEvent::Transaction(
            Transaction::new("install".to_owned(), 9.99, Some(json!({"sku": "a1"}))).unwrap(),
        );
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["kind"], json!("transaction"));
        assert_eq!(value["amount"], json!(9.99));
        assert_eq!(value["installationId"], json!("install"));
        assert_eq!(value["data"], json!({"sku": "a1"}));
    }
}
