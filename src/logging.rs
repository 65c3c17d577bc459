//! Diagnostic logging to stderr
//!
//! The report goes to stdout, so every log line is written to stderr.

use is_terminal::IsTerminal;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use crate::config::LogLevel;

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Effective level: the configured one, raised by each `-v`.
pub fn effective_level(verbose: u8, configured: LogLevel) -> LevelFilter {
    let from_flags = match verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    from_flags.max(configured.into())
}

/// Handle to the installed filter, used to apply the configured level once
/// the config file has been read.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
}

impl LogHandle {
    /// Replace the default level. `RUST_LOG` still takes precedence.
    pub fn set_level(&self, level: LevelFilter) -> Result<(), reload::Error> {
        self.filter.reload(build_filter(level))
    }
}

fn build_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init(level: LevelFilter) -> Result<LogHandle, Box<dyn std::error::Error + Send + Sync>> {
    let (filter, handle) = reload::Layer::new(build_filter(level));

    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry().with(filter).with(stderr).try_init()?;
    Ok(LogHandle { filter: handle })
}
