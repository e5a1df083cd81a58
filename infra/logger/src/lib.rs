//! # Logger
//!
//! Tracing setup for the catalog binaries: a compact stderr layer and an optional
//! daily-rolling, non-blocking file layer (plain text or JSON lines). The level set here
//! is the default directive; `RUST_LOG` still refines it per target.
//!
//! Library crates never install a subscriber. They emit `tracing` events and leave the
//! sinks to whoever owns `main`.
//!
//! ## Example
//!
//! ```rust
//! # use apb_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("appueblear")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

#[derive(Debug)]
struct Sinks {
    console: bool,
    directory: Option<PathBuf>,
    level: LevelFilter,
    max_files: usize,
    json: bool,
}

impl Default for Sinks {
    fn default() -> Self {
        Self {
            console: true,
            directory: None,
            level: LevelFilter::INFO,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Configures the global subscriber.
///
/// [`LoggerBuilder::init`] needs a name; file options unlock after
/// [`LoggerBuilder::path`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    sinks: Sinks,
    name: N,
    file_state: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Names the logger; the name doubles as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { name: WithName(name.into()), sinks: self.sinks, file_state: PhantomData }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Rotated files kept on disk.
    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.sinks.max_files = max;
        self
    }

    /// Writes file records as JSON lines.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.sinks.json = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.sinks.level = level;
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.sinks.console = enabled;
        self
    }

    /// Enables the rolling file sink under `directory`.
    pub fn path(self, directory: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut sinks = self.sinks;
        sinks.directory = Some(directory.into());
        LoggerBuilder { sinks, name: self.name, file_state: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown; it owns the file writer's
    /// [`WorkerGuard`].
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files` or
    ///   no enabled sink.
    /// * [`LoggerError::Appender`] if the rolling appender cannot be created.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { sinks, name: WithName(name), .. } = self;
        sinks.validate(&name)?;

        let mut layers = Vec::new();
        if sinks.console {
            layers.push(console_layer());
        }

        let guard = match &sinks.directory {
            Some(directory) => {
                let (file, guard) = file_layer(&name, directory, &sinks)?;
                layers.push(file);
                Some(guard)
            },
            None => None,
        };

        let filter =
            EnvFilter::builder().with_default_directive(sinks.level.into()).from_env_lossy();
        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

impl Sinks {
    fn validate(&self, name: &str) -> Result<(), LoggerError> {
        let problem = if name.trim().is_empty() {
            "Logger name cannot be empty"
        } else if self.directory.is_some() && self.max_files == 0 {
            "max_files must be greater than zero"
        } else if !self.console && self.directory.is_none() {
            "No logging sink enabled. Enable console or file output."
        } else {
            return Ok(());
        };

        Err(LoggerError::InvalidConfiguration { message: problem.into(), context: None })
    }
}

fn console_layer<S>() -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    layer().compact().with_ansi(true).with_writer(std::io::stderr).boxed()
}

fn file_layer<S>(
    name: &str,
    directory: &Path,
    sinks: &Sinks,
) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fs::create_dir_all(directory).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Creating log directory {}", directory.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(sinks.max_files)
        .build(directory)
        .context("Building rolling file appender")?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file = layer().with_writer(writer).with_ansi(false);
    let file = if sinks.json { file.json().boxed() } else { file.boxed() };

    Ok((file, guard))
}

/// Handle to the installed subscriber.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { sinks: Sinks::default(), name: NoName, file_state: PhantomData }
    }

    /// Console logging at `level`, plus a file sink when `directory` is set.
    ///
    /// This is the shape the `[logging]` config section describes.
    ///
    /// # Errors
    /// Unknown level names, plus everything [`LoggerBuilder::init`] reports.
    pub fn for_app(
        name: &str,
        level: &str,
        directory: Option<&Path>,
        json: bool,
    ) -> Result<Self, LoggerError> {
        let builder = Self::builder().name(name).level(parse_level(level)?);
        match directory {
            Some(directory) => builder.path(directory).json(json).init(),
            None => builder.init(),
        }
    }

    /// File writer guard, if file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log files");
        }
    }
}

/// Parses a level name such as `"info"` or `"WARN"` (`"off"` disables output).
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown names.
pub fn parse_level(name: &str) -> Result<LevelFilter, LoggerError> {
    name.trim().parse::<LevelFilter>().map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{name}': {e}").into(),
        context: None,
    })
}
