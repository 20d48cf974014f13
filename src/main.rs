//! input-selector: press the switch button five times and watch the input cycle.

use input_selector::{InputContext, State};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Number of button presses in the demo run; one full lap of the cycle.
const PRESSES: usize = 5;

fn main() {
    // Diagnostics go to stderr; stdout carries only the announcements.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut context = InputContext::new();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        initial = context.current_state().name(),
        "input selector starting"
    );

    for _ in 0..PRESSES {
        context.advance();
    }

    info!(
        current = context.current_state().name(),
        switches = context.history().len(),
        "input selector finished"
    );
}
