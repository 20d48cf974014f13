//! Capturing Announcements
//!
//! This example drives the selector with an in-memory announcer instead of
//! standard output.
//!
//! Key concepts:
//! - Fluent builder with a custom initial input
//! - `Vec<String>` as an announcement sink
//! - Reading back the switch history
//!
//! Run with: cargo run --example capture

use input_selector::{Input, InputContextBuilder, State};

fn main() {
    println!("=== Capturing Announcements ===\n");

    let mut context = InputContextBuilder::new()
        .initial(Input::Coaxial)
        .announcer(Vec::<String>::new())
        .build();

    println!("Initial input: {}\n", context.current_state());

    for _ in 0..Input::ALL.len() {
        context.advance();
    }

    println!("Switch history:");
    for transition in context.history().transitions() {
        println!(
            "  #{} {} -> {}",
            transition.sequence,
            transition.from.name(),
            transition.to.name()
        );
    }

    println!("\nCaptured announcements:");
    for line in context.into_announcer() {
        println!("  {line}");
    }

    println!("\n=== Example Complete ===");
}
