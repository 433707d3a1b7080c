//! Opt-in tracing output.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical subscriber when `MANG_LOG` (or `RUST_LOG`) is set.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Some(directives) = std::env::var("MANG_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
        else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true),
            )
            .with(EnvFilter::new(directives))
            .init();
    });
}
