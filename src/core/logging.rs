//! Logging initialisation built on flexi_logger
//!
//! The CLI surface is fixed to a single path argument, so logging is tuned
//! through environment variables instead of flags:
//!
//! - `ECLOCATE_LOG` - log level spec (default "info")
//! - `ECLOCATE_LOG_FORMAT` - "text" or "json" (default "text")
//! - `ECLOCATE_LOG_FILE` - log file path (default: stderr)

use std::io::IsTerminal;
use std::sync::OnceLock;

use flexi_logger::{FileSpec, Logger, LoggerHandle};

// Keeps the logger alive for the life of the process; flexi_logger flushes
// buffered output when the handle drops.
static LOGGER_HANDLE: OnceLock<LoggerHandle> = OnceLock::new();

/// Initialise logging from the `ECLOCATE_LOG*` environment variables
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let level_spec = std::env::var("ECLOCATE_LOG").unwrap_or_else(|_| "info".to_string());
    let format_type = std::env::var("ECLOCATE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let color_enabled =
        std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    let mut logger = Logger::try_with_str(&level_spec)?;

    logger = match format_type.as_str() {
        "json" => logger.format(json_format),
        _ => {
            if color_enabled {
                logger.format(simple_color_format)
            } else {
                logger.format(simple_format)
            }
        }
    };

    if let Ok(file_path) = std::env::var("ECLOCATE_LOG_FILE") {
        let file_spec = FileSpec::try_from(std::path::Path::new(&file_path))?;
        logger = logger.log_to_file(file_spec);
    }

    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(handle);

    Ok(())
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

// Plain text format: "YYYY-MM-DD HH:mm:ss.fff INF message (locator/api.rs:42)"
fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let target_formatted = format_target_as_path(record.target(), record.line());

    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr(record.level()),
        record.args(),
        target_formatted
    )
}

// Text format with fern-style level colouring for terminals
fn simple_color_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use colored::*;

    let level_colored = match record.level() {
        log::Level::Error => "ERR".red().bold(),
        log::Level::Warn => "WRN".yellow(),
        log::Level::Info => "INF".green(),
        log::Level::Debug => "DBG".blue(),
        log::Level::Trace => "TRC".magenta(),
    };

    let target_formatted = format_target_as_path(record.target(), record.line());

    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        level_colored,
        record.args(),
        target_formatted.dimmed()
    )
}

// One compact JSON object per line: timestamp, level, message, target
fn json_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use serde_json::{json, to_string};

    let json_obj = json!({
        "timestamp": now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        "level": level_abbr(record.level()),
        "message": record.args().to_string(),
        "target": format_target_as_path(record.target(), record.line())
    });

    match to_string(&json_obj) {
        Ok(json_string) => w.write_all(json_string.as_bytes()),
        Err(_) => w.write_all(b"{\"error\":\"Failed to serialize log message\"}"),
    }
}

// Convert eclocate::locator::api -> locator/api.rs:42
fn format_target_as_path(target: &str, line: Option<u32>) -> String {
    let path_like = if let Some(without_prefix) = target.strip_prefix("eclocate::") {
        without_prefix.replace("::", "/") + ".rs"
    } else {
        target.replace("::", "/")
    };

    if let Some(line_num) = line {
        format!("{}:{}", path_like, line_num)
    } else {
        path_like
    }
}
