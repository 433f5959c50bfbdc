//! Logging system for NovaWM.
//!
//! Built on the `tracing` ecosystem: a console layer on stdout plus an
//! optional daily-rolling file layer, each in text or JSON format. Library
//! code only emits `tracing` events; the binary that embeds NovaWM calls
//! [`init_logging`] (or [`init_minimal_logging`] early during startup).

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};

use once_cell::sync::Lazy;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Keeps the file writer's guard alive so buffered lines are flushed on exit.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes a minimal logging setup on `stderr`.
///
/// Intended for tests and early startup before the configuration is loaded.
/// Honors `RUST_LOG`, defaulting to "info". Errors (e.g. a global subscriber
/// already being installed) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Creates the file logging layer and its worker guard, creating the log
/// file's parent directory if needed.
fn create_file_layer(log_path: &Path, format: &str) -> Result<(BoxedLayer, WorkerGuard), CoreError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory).map_err(|source| CoreError::Filesystem {
        message: "Failed to create log directory".to_string(),
        path: directory.to_path_buf(),
        source,
    })?;

    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("novawm.log"));
    let file_appender = tracing_appender::rolling::daily(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer: BoxedLayer = if format.eq_ignore_ascii_case("json") {
        Box::new(fmt::layer().json().with_writer(writer).with_ansi(false))
    } else {
        Box::new(fmt::layer().with_writer(writer).with_ansi(false))
    };
    Ok((layer, guard))
}

fn level_filter(level: &str) -> Result<String, CoreError> {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        invalid => {
            return Err(LoggingError::InitializationFailure(format!(
                "Invalid log level in config: {}",
                invalid
            ))
            .into())
        }
    };
    Ok(level.to_string())
}

/// Initializes the global logging system from a [`LoggingConfig`].
///
/// With `is_reload == false` a failure to install the global subscriber is an
/// error; with `is_reload == true` it is reported on stderr and ignored, since
/// the previously installed subscriber keeps working. The file guard is
/// replaced in both cases.
///
/// # Errors
///
/// [`LoggingError::InitializationFailure`] for an invalid level or an
/// already-installed subscriber on first initialization;
/// [`CoreError::Filesystem`] if the log directory cannot be created.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let level = level_filter(&config.level)?;

    let stdout_filter = EnvFilter::new(level.clone());
    let stdout_layer: BoxedLayer = if config.format.eq_ignore_ascii_case("json") {
        fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(stdout_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(stdout_filter)
            .boxed()
    };

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer];
    let mut new_file_guard = None;
    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        layers.push(file_layer.with_filter(EnvFilter::new(level)).boxed());
        new_file_guard = Some(guard);
    }

    let result = Registry::default().with(layers).try_init();

    match LOG_WORKER_GUARD.lock() {
        // Dropping the previous guard flushes its pending lines.
        Ok(mut slot) => *slot = new_file_guard,
        Err(e) => eprintln!("[ERROR] Failed to lock log worker guard: {}. Log flushing may be affected.", e),
    }

    match result {
        Ok(()) => Ok(()),
        Err(e) if is_reload => {
            eprintln!("[INFO] Logging re-initialization kept the previous subscriber: {}", e);
            Ok(())
        }
        Err(e) => Err(LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        ))
        .into()),
    }
}
