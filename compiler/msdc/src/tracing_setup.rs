//! Log output for the `msd` binary.

use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Variable read first for the log filter.
pub const LOG_ENV: &str = "MSD_LOG";

/// Install the tracing subscriber.
///
/// Safe to call more than once. Nothing is installed unless `MSD_LOG` or
/// `RUST_LOG` is set, e.g. `MSD_LOG=msd_eval=trace msd run prog.msd`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(directives) = filter_directives() else {
            return;
        };
        let filter = match EnvFilter::try_new(&directives) {
            Ok(filter) => filter,
            Err(e) => {
                eprintln!("warning: ignoring invalid log filter `{directives}`: {e}");
                return;
            }
        };
        tracing_subscriber::registry()
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_indent_lines(true),
            )
            .with(filter)
            .init();
    });
}

/// `MSD_LOG`, falling back to `RUST_LOG`.
fn filter_directives() -> Option<String> {
    std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .filter(|value| !value.trim().is_empty())
}
