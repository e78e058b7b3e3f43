use crate::error::{Result as ServerErrorResult, ServerError};

use ca_config::{Config, LogLevel, LoggingConfig};

use std::fmt::{Arguments, Display};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// HTTP stack targets that flood the log at debug with connection chatter
/// for every Gemini call.
const HTTP_CLIENT_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest"];

/// Where server log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Append plain lines to a file
    File(PathBuf),
    /// Level names colored for a terminal
    ColoredStdout,
    /// Plain stdout for systemd and container logs
    PlainStdout,
}

impl LogSink {
    /// Pick the sink for a logging section. A file, when configured, lives
    /// under `config_dir/logging.dir` and takes precedence over stdout.
    pub fn resolve(logging: &LoggingConfig, config_dir: &Path) -> Self {
        match &logging.file {
            Some(name) => LogSink::File(config_dir.join(&logging.dir).join(name)),
            None if logging.colored => LogSink::ColoredStdout,
            None => LogSink::PlainStdout,
        }
    }

    /// [`LogSink::resolve`] against the real config directory, creating the
    /// log directory when a file is configured.
    pub fn from_config(logging: &LoggingConfig) -> ServerErrorResult<Self> {
        if logging.file.is_none() {
            return Ok(Self::resolve(logging, Path::new(".")));
        }

        let config_dir = Config::config_dir()?;
        let log_dir = config_dir.join(&logging.dir);
        std::fs::create_dir_all(&log_dir).map_err(|source| ServerError::LogFile {
            path: log_dir.display().to_string(),
            source,
        })?;

        Ok(Self::resolve(logging, &config_dir))
    }
}

/// Level applied to the HTTP client targets: never chattier than info.
pub fn http_client_level(level: LevelFilter) -> LevelFilter {
    level.min(LevelFilter::Info)
}

/// Install the global fern logger for handlers, the Gemini client and the
/// model output parsers.
pub fn initialize(level: LogLevel, sink: LogSink) -> ServerErrorResult<()> {
    let level_filter = level.0;

    let mut dispatch = Dispatch::new().level(level_filter);
    for target in HTTP_CLIENT_TARGETS {
        dispatch = dispatch.level_for(*target, http_client_level(level_filter));
    }

    let output = match &sink {
        LogSink::File(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ServerError::LogFile {
                    path: path.display().to_string(),
                    source,
                })?;
            Dispatch::new()
                .format(|out, message, record| format_line(out, message, record, None))
                .chain(file)
        }
        LogSink::ColoredStdout => {
            let colors = level_colors();
            Dispatch::new()
                .format(move |out, message, record| {
                    format_line(out, message, record, Some(&colors))
                })
                .chain(std::io::stdout())
        }
        LogSink::PlainStdout => Dispatch::new()
            .format(|out, message, record| format_line(out, message, record, None))
            .chain(std::io::stdout()),
    };

    dispatch
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match &sink {
        LogSink::File(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        _ => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// `[{rfc3339} - {LEVEL}] {message} [{file}:{line}]`
fn format_line(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    colors: Option<&ColoredLevelConfig>,
) {
    match colors {
        Some(colors) => write_line(out, message, record, colors.color(record.level())),
        None => write_line(out, message, record, record.level()),
    }
}

fn write_line(out: FormatCallback, message: &Arguments, record: &Record, level: impl Display) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
