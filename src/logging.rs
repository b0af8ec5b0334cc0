//! Optional file-backed logging setup.
//!
//! The engine instruments its own hot paths with `tracing` but, being a
//! library, never installs a global subscriber on its own initiative.
//! [`init_file_logger`] is offered as an opt-in convenience for embedders
//! that want a quick default.

use std::fs::File;
use std::path::Path;

use time::{format_description, OffsetDateTime};
use tracing::subscriber::set_global_default;
use tracing::Level;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::FmtSubscriber;

/// Install a global `tracing` subscriber that writes timestamped TRACE-level
/// output to a fresh file under `dir`.
///
/// # Panics
///
/// Panics if `dir` cannot be written to, or if a global subscriber is
/// already installed.
pub fn init_file_logger(dir: impl AsRef<Path>) {
    let file_name = dir.as_ref().join(log_file_name());
    let file = File::create(file_name).expect("could not create log file");
    let writer = BoxMakeWriter::new(file);
    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = tracing_subscriber::fmt::time::OffsetTime::new(
        local_offset,
        format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]").unwrap(),
    );

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_timer(timer)
        .with_writer(writer)
        .finish();

    set_global_default(subscriber)
        .expect("could not set global default tracing subscriber — one is already installed");
}

fn log_file_name() -> String {
    let format =
        format_description::parse("[year]-[month]-[day]_[hour]:[minute]:[second]_log.txt")
            .unwrap();
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(&format).unwrap()
}
