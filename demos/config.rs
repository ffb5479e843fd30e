//! Config example: Starting from a custom pet
//!
//! This example demonstrates:
//! - Parsing a `PetConfig` from JSON
//! - Invariant validation of starting stats
//! - Danger states firing on a fragile pet

use zzpet::*;

fn main() -> Result<(), PetError> {
    // A tired, hungry pet at level 3
    let config = PetConfig::from_json(
        r#"{
            "name": "Mochi",
            "hunger": 10,
            "energy": 15,
            "level": 3
        }"#,
    )?;
    let mut engine = ActionEngine::with_view(config.into_state()?, RecordingView::new());

    println!("Exercising {}...", engine.state().name());
    let outcome = engine.exercise();

    println!("\nEvents:");
    for event in &outcome.events {
        println!("  {:?}: {}", event, event.message());
    }
    println!("\nOn screen: {:?}", engine.view().current_message());
    println!("Level: {} -> {}", outcome.before.level(), outcome.after.level());

    // Out-of-range starting stats are rejected, not clamped
    let invalid = PetConfig::from_json(r#"{ "energy": 140 }"#)?.into_state();
    match invalid {
        Ok(_) => println!("\nUnexpectedly valid"),
        Err(err) => println!("\nRejected: {}", err),
    }

    Ok(())
}
