//! Terminal example: A text view driven by typed commands
//!
//! This example demonstrates:
//! - Implementing `PetView` for a terminal
//! - The startup sequence (refresh, then one automatic treat)
//! - Dispatching named triggers from user input
//!
//! Run with `RUST_LOG=zzpet=debug` to see the pipeline logs on stderr.

use std::io::{self, BufRead, Write};
use zzpet::view::fill_percent;
use zzpet::*;

const BAR_WIDTH: usize = 20;

/// Renders the pet as a block of text on stdout.
struct TerminalView {
    out: io::Stdout,
}

impl TerminalView {
    fn bar(value: i64) -> String {
        let filled = usize::from(fill_percent(value)) * BAR_WIDTH / 100;
        format!("[{}{}] {:>3}%", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled), value)
    }
}

impl PetView for TerminalView {
    fn render(&mut self, state: &PetState) {
        let _ = writeln!(
            self.out,
            "{}  weight {}  happiness {}  level {}\n  hunger {}\n  energy {}",
            state.name(),
            state.weight(),
            state.happiness(),
            state.level(),
            Self::bar(state.hunger()),
            Self::bar(state.energy()),
        );
    }

    fn show_message(&mut self, message: &str) {
        let _ = writeln!(self.out, "  > {}", message);
    }

    fn animate(&mut self) {
        let _ = writeln!(self.out, "  *boing*");
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let view = TerminalView { out: io::stdout() };
    let mut engine = ActionEngine::with_view(PetState::default(), view);
    engine.start();

    println!("\nCommands: treat, play, exercise, nap, quit");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command == "quit" {
            break;
        }
        if let Err(err) = engine.dispatch(command) {
            println!("  {}", err);
        }
    }

    Ok(())
}
