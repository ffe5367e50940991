//! UVM command-line front end: commands, memory dumps, and the
//! assemble-and-run pipeline shared with interactive front ends.

pub mod commands;
pub mod dump;
pub mod pipeline;

pub use dump::{dump_csv, parse_range, UsageError};
pub use pipeline::{assemble_and_run, Session};

/// Install the stderr log subscriber.
///
/// `RUST_LOG` controls the level; the default is `warn`.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
