use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal},
    sync::{Mutex, OnceLock},
};
use tracing::{Event, Level, Subscriber, debug};
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

use crate::config::LogConfig;

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
const DEFAULT_FILTER: &str = "info,wage_ui=debug,wage_core=debug";

// --- Formatter ---

/// One line per event: local timestamp, level, crate, source line, fields.
struct TrackerFmt;

impl<S, N> FormatEvent<S, N> for TrackerFmt
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
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        if ansi {
            let colour = match *meta.level() {
                Level::ERROR => "31",
                Level::WARN => "33",
                Level::INFO => "32",
                Level::DEBUG => "34",
                Level::TRACE => "35",
            };
            write!(
                writer,
                "\x1b[2m{timestamp}\x1b[0m \x1b[1;{colour}m{:>5}\x1b[0m ",
                meta.level()
            )?;
        } else {
            write!(writer, "{timestamp} {:>5} ", meta.level())?;
        }

        let krate = meta.target().split("::").next().unwrap_or_default();
        match meta.line() {
            Some(line) => write!(writer, "[{krate}:{line}] ")?,
            None => write!(writer, "[{krate}] ")?,
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Runtime level control ---

type SetLevelFn = Box<dyn Fn(&str) -> Result<()> + Send + Sync>;

static SET_LOG_LEVEL: OnceLock<SetLevelFn> = OnceLock::new();

fn parse_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))
}

fn startup_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(config: &LogConfig) -> Result<Option<File>> {
    config
        .file
        .as_ref()
        .map(|path| {
            File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))
        })
        .transpose()
}

// --- Public API ---

/// Installs the global subscriber. Call once at startup.
///
/// - Stdout: coloured when attached to a terminal, plain when piped.
/// - File: only when `config.file` is set; always plain text, appended.
/// - Level: `RUST_LOG`, else [`DEFAULT_FILTER`], then replaced through
///   [`set_log_level`] when `config.level` is set.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    // Reject a bad directive before anything is installed.
    if let Some(level) = &config.level {
        parse_filter(level)?;
    }
    let (level_filter, level_handle) = reload::Layer::new(startup_filter());

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(TrackerFmt)
        .with_ansi(io::stdout().is_terminal());

    let file_layer = open_log_file(config)?.map(|file| {
        tracing_subscriber::fmt::layer()
            .event_format(TrackerFmt)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("a global subscriber is already installed")?;

    store_level_handle(level_handle);
    if let Some(level) = &config.level {
        set_log_level(level)?;
    }
    debug!(file = ?config.file, level = ?config.level, "logging initialised");
    Ok(())
}

fn store_level_handle(handle: reload::Handle<EnvFilter, Registry>) {
    let _ = SET_LOG_LEVEL.set(Box::new(move |level: &str| {
        let filter = parse_filter(level)?;
        handle
            .reload(filter)
            .context("log filter reload failed")
    }));
}

/// Replaces the active log filter.
///
/// Accepts a bare level (`"warn"`) or any `EnvFilter` directive.
pub fn set_log_level(level: &str) -> Result<()> {
    match SET_LOG_LEVEL.get() {
        Some(set) => set(level),
        None => anyhow::bail!("logging not yet initialised"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn explicit_level_must_be_a_valid_directive() {
        let err = parse_filter("wage_core=loud").unwrap_err();

        assert!(err.to_string().contains("invalid log level 'wage_core=loud'"));
    }

    #[test]
    fn explicit_level_is_accepted() {
        assert!(parse_filter("warn,wage_core=trace").is_ok());
    }

    #[test]
    fn bad_level_fails_init_before_installing() {
        let config = LogConfig {
            level: Some("wage_core=loud".to_string()),
            file: None,
        };

        assert!(init_logging(&config).is_err());
        assert!(SET_LOG_LEVEL.get().is_none());
    }

    #[test]
    fn no_log_file_means_no_file_layer() {
        assert!(open_log_file(&LogConfig::default()).unwrap().is_none());
    }

    #[test]
    fn unopenable_log_file_is_reported() {
        let config = LogConfig {
            level: None,
            file: Some(PathBuf::from("/nonexistent-dir/for/wage-ui/test.log")),
        };

        let err = open_log_file(&config).unwrap_err();

        assert!(err.to_string().contains("cannot open log file"));
    }

    #[test]
    fn set_level_before_init_fails() {
        if SET_LOG_LEVEL.get().is_none() {
            assert!(set_log_level("debug").is_err());
        }
    }
}
