//! Logging initialization.
//!
//! Diagnostics go to stderr through a `tracing` subscriber so stdout stays
//! reserved for route output (which is often piped into other tools).

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Verbosity requested on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbosity {
    pub verbose: bool,
    pub quiet: bool,
    /// The command emits machine-readable output.
    pub machine_output: bool,
}

impl Verbosity {
    /// WARN by default, DEBUG when verbose, ERROR when quiet or emitting JSON.
    pub fn level(self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet || self.machine_output {
            Level::ERROR
        } else {
            Level::WARN
        }
    }
}

/// Install the global tracing subscriber.
pub fn initialize_logging(verbosity: Verbosity) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(verbosity.level())
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
