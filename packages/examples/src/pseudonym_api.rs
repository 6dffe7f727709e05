//! Pseudonym API walkthrough
//!
//! Run with `RUST_LOG=debug` to see engine events. The secret can be supplied
//! through `CONSENTKEYS_SECRET`; a demo secret is used otherwise.

use consentkeys_pseudonym::{verify, ConsentKeys, DataType, PseudonymEngine};
use log::{error, info};
use std::sync::Once;

const DEMO_SECRET: &str = "super-secret-key-at-least-32-chars-long-for-safe-use";

static INIT_LOGGER: Once = Once::new();

fn init_logging() {
    INIT_LOGGER.call_once(|| {
        env_logger::Builder::from_default_env()
            .format_timestamp_micros()
            .init();
    });
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let secret = std::env::var("CONSENTKEYS_SECRET").unwrap_or_else(|_| DEMO_SECRET.to_string());
    let engine = ConsentKeys::pseudonym().with_key(secret).build()?;
    info!("engine ready (email domain: {})", engine.email_domain());

    println!("=== Consistency ===");
    let first = engine.derive("user123", "shopping-app", DataType::Id)?;
    let again = engine.derive("user123", "shopping-app", DataType::Id)?;
    println!("user123 + shopping-app:          {first}");
    println!("user123 + shopping-app (again):  {again}");
    println!("same user, different app:        {}", engine.derive("user123", "social-app", DataType::Id)?);

    println!("\n=== App isolation ===");
    println!("user456 + shopping-app: {}", engine.derive("user456", "shopping-app", DataType::Id)?);
    println!("user456 + social-app:   {}", engine.derive("user456", "social-app", DataType::Id)?);

    println!("\n=== Data type variations ===");
    for dt in DataType::ALL {
        println!("{dt:<8} {}", engine.derive("user123", "shopping-app", dt)?);
    }

    println!("\n=== Fake profile ===");
    let profile = engine.fake_profile("user123", "shopping-app")?;
    println!("{}", serde_json::to_string_pretty(&profile)?);

    println!("\n=== Cross-app profile ===");
    println!("shopping-app email: {}", engine.fake_email("user123", "shopping-app")?);
    println!("social-app email:   {}", engine.fake_email("user123", "social-app")?);

    println!("\n=== Error handling ===");
    report(engine.derive_named("", "test", "id").map(drop));
    report(engine.derive_named("user123", "", "id").map(drop));
    report(engine.derive_named("user123", "shopping-app", "bogus").map(drop));
    report(PseudonymEngine::new("short").map(drop));

    println!("\n=== Verification ===");
    println!("valid pseudonym:   {}", verify(&first));
    println!("invalid pseudonym: {}", verify("invalid_pseudonym"));
    println!("same inputs match: {}", PseudonymEngine::compare(&first, &again));

    Ok(())
}

fn report(result: consentkeys_pseudonym::Result<()>) {
    match result {
        Ok(()) => println!("unexpected success"),
        Err(e) => {
            error!("rejected: {e}");
            println!("rejected: {e}");
        }
    }
}
