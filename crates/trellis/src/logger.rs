//! Stderr logger for the CLI.
//!
//! Level comes from the `TRELLIS_LOG` environment variable (`error`,
//! `warn`, `info`, `debug`, `trace`); defaults to `info`.

use anyhow::Result;
use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!(
            "[{}] [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Install the logger; call once at startup
pub fn init() -> Result<()> {
    let level = match std::env::var("TRELLIS_LOG").ok().as_deref() {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
