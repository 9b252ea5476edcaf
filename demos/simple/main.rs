use batch_user::TrackedEvent;
use serde_json::json;

pub fn main() -> batch_user::Result<()> {
    // Configure env_logger to see Batch SDK logs.
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("batch")).init();

    let api_key = std::env::var("BATCH_API_KEY").unwrap_or_else(|_| "DEV_API_KEY".to_owned());
    let client = batch_user::ClientConfig::from_api_key(api_key)
        .event_logger(|event: TrackedEvent| match event {
            TrackedEvent::Event(event) => println!("Tracked event: {:?}", event),
            TrackedEvent::Transaction(transaction) => {
                println!("Tracked transaction: {:?}", transaction)
            }
        })
        .to_client();

    client.start()?;
    println!("Installation ID: {:?}", client.installation_id());

    let mut editor = client.editor();
    editor
        .set_language(Some("fr"))
        .set_region(Some("FR"))
        .set_attribute("age", 42)
        .set_attribute("favorite_color", "blue")
        .set_attribute("invalid key!", "ignored")
        .add_tag("sports", "interests")
        .add_tag("music", "interests");
    editor.save();

    client.track_event("purchase_done", Some("sale"), Some(json!({"amount": 10})));
    // Dropped: event data must be a JSON object.
    client.track_event("purchase_done", None, Some(json!([10])));
    client.track_transaction(19.99, Some(json!({"currency": "EUR"})));

    client.print_debug_information();

    Ok(())
}
