use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::{self, File},
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    sync::{Mutex, OnceLock},
};
use tracing::{Event, Level, Subscriber, info};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

/// Local timestamp, level, source location, then the event fields.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} ")?;
        }

        let colour = match *meta.level() {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        };
        if ansi {
            write!(writer, "{colour}{:>5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{:>5} ", meta.level())?;
        }

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file
                .strip_prefix("src/")
                .or_else(|| file.strip_prefix("src\\"))
                .unwrap_or(file);
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

static APP_NAME: OnceLock<String> = OnceLock::new();

/// Returns the process name derived from the executable path.
/// Falls back to "app" if the path cannot be determined.
pub fn app_name() -> &'static str {
    APP_NAME.get_or_init(|| {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "app".to_string())
    })
}

/// Path of the log file inside `directory`.
pub fn log_file_path(directory: &Path) -> PathBuf {
    directory.join(format!("{}.log", app_name()))
}

/// Picks the filter directive: `RUST_LOG`, then the command-line override,
/// then the configured level.
fn make_filter(
    config: &LoggingConfig,
    level_override: Option<&str>,
) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = level_override.unwrap_or(&config.level);
    EnvFilter::try_new(directive).with_context(|| format!("invalid log level '{directive}'"))
}

fn open_log_file(directory: &Path) -> Result<File> {
    fs::create_dir_all(directory)
        .with_context(|| format!("cannot create log directory '{}'", directory.display()))?;
    let path = log_file_path(directory);
    File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

/// Initializes logging. Call once at startup.
///
/// - Stdout: colored when attached to a terminal, plain when piped, off when
///   `stdout = false`.
/// - File: appended to `<directory>/<app name>.log` when a directory is set.
pub fn init_logging(
    config: &LoggingConfig,
    level_override: Option<&str>,
) -> Result<()> {
    let filter = make_filter(config, level_override)?;

    let stdout_layer = config.stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .event_format(LocalFmt)
            .with_ansi(io::stdout().is_terminal())
    });

    let file_layer = match &config.directory {
        Some(directory) => {
            let file = open_log_file(directory)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(LocalFmt)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    if let Some(directory) = &config.directory {
        info!(path = %log_file_path(directory).display(), "file logging enabled");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn log_file_is_named_after_the_executable() {
        let path = log_file_path(Path::new("logs"));

        assert_eq!(path, Path::new("logs").join(format!("{}.log", app_name())));
        assert!(!app_name().is_empty());
    }

    #[test]
    fn bad_override_is_reported() {
        // Only meaningful when RUST_LOG does not take precedence.
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = make_filter(&LoggingConfig::default(), Some("info,=[bad")).unwrap_err();

        assert!(err.to_string().contains("invalid log level"));
    }

    #[test]
    fn log_directory_is_created_on_demand() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("logs");

        open_log_file(&nested).unwrap();

        assert!(log_file_path(&nested).is_file());
    }
}
