//! Basic example: Applying actions and reading the outcome
//!
//! This example demonstrates:
//! - Creating an engine with the default pet
//! - Applying each action
//! - Reading the per-action breakdown

use zzpet::*;

fn main() {
    // Create an engine that owns a default pet
    let mut engine = ActionEngine::new(PetState::default());
    println!("Starting pet: {:?}", engine.state());

    // Apply every action once
    for action in Action::ALL {
        let outcome = engine.apply(action);

        println!("\n=== {} ===", action);
        for (stat, delta) in action.effect().deltas() {
            println!(
                "  {:<10} {:>4} -> {:>4} ({:+})",
                stat,
                outcome.before.get(stat),
                outcome.after.get(stat),
                delta
            );
        }
        println!(
            "  exp        {:>4} -> {:>4} (+{})",
            outcome.before.exp(),
            outcome.after.exp(),
            action.effect().exp
        );

        println!("Messages:");
        for message in outcome.messages() {
            println!("  {}", message);
        }
    }

    println!("\nFinal level: {}", engine.state().level());
}
