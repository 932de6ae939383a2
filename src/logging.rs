//! Logging setup for the command-line tool.

use flexi_logger::{DeferredNow, FlexiLoggerError, Logger, LoggerHandle};
use log::Record;

/// Starts logging to stderr. `RUST_LOG` overrides `level` when set.
///
/// The returned handle must be kept alive for as long as logging is needed.
pub fn init_logging(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .format(simple_format)
        .start()
}

// Format: "YYYY-MM-DD HH:mm:ss.fff INF message (document/vocabulary.rs:42)"
fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr(record.level()),
        record.args(),
        format_target_as_path(record.target(), record.line())
    )
}

fn level_abbr(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

// vocab2doc::document::vocabulary -> document/vocabulary.rs
fn format_target_as_path(target: &str, line: Option<u32>) -> String {
    let path = target
        .split("::")
        .skip(1)
        .collect::<Vec<_>>()
        .join("/");
    let path = if path.is_empty() {
        format!("{}.rs", target)
    } else {
        format!("{}.rs", path)
    };
    match line {
        Some(line) => format!("{}:{}", path, line),
        None => path,
    }
}
