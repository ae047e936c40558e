use crate::{
    formats::standard_format, log_bridge::LogBridge, writers::LogWriter, FormatFunction,
    LogConfig, LoggerError, LoggerHandle, Runtime,
};
use std::{path::PathBuf, sync::OnceLock};

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

// The process-wide runtime, if it was set up already.
pub(crate) fn started_runtime() -> Option<&'static Runtime> {
    RUNTIME.get()
}

// The process-wide runtime; if it was not started explicitly,
// it is set up from the environment on first use.
pub(crate) fn global_runtime() -> &'static Runtime {
    RUNTIME.get_or_init(|| Runtime::from_config(&LogConfig::from_env()))
}

/// The entry-point for setting up `pkg_logger`.
///
/// Create a `Logger` with your desired configuration
///
/// * by reading it from the environment,
///   using [`Logger::with_env()`],
/// * or by providing the package settings string,
///   using [`Logger::with_str()`],
/// * or by providing an explicitly built [`LogConfig`],
///   using [`Logger::with_config()`],
///
/// then use `Logger`'s configuration methods, and finally call
/// [`start()`](Logger::start) to set up the process-wide runtime,
/// or [`build()`](Logger::build) to get an independent [`Runtime`].
///
/// ## Examples
///
/// ### Use the environment
///
/// ```rust
/// use pkg_logger::Logger;
///
/// // LOG="users,database@timer,*@error" LOG_LEVEL="" LOG_FILE=/tmp/app.log
/// let _logger = Logger::with_env()
///     .start()
///     .unwrap_or_else(|e| panic!("Logger initialization failed with {e}"));
/// ```
///
/// ### Write to a file, and route the `log` macros into the same writers
///
/// ```rust
/// use pkg_logger::Logger;
///
/// let _logger = Logger::with_str("users,*@error")
///     .log_to_file("log_files/app.log")
///     .bridge_log_crate()
///     .start()
///     .unwrap();
/// log::info!(target: "users", "karl logged in");
/// ```
pub struct Logger {
    config: LogConfig,
    format: FormatFunction,
    other_writers: Vec<Box<dyn LogWriter>>,
    bridge_log_crate: bool,
}

/// Create a Logger instance and define how to access the (initial)
/// configuration.
impl Logger {
    /// Creates a Logger that reads its configuration from the environment
    /// (see [`LogConfig::from_env`]).
    #[must_use]
    pub fn with_env() -> Self {
        Self::with_config(LogConfig::from_env())
    }

    /// Creates a Logger with the given package settings string and
    /// otherwise default configuration.
    #[must_use]
    pub fn with_str<S: AsRef<str>>(package_rules: S) -> Self {
        Self::with_config(LogConfig::default()).package_rules(package_rules.as_ref())
    }

    /// Creates a Logger with the given configuration.
    #[must_use]
    pub fn with_config(config: LogConfig) -> Self {
        Self {
            config,
            format: standard_format,
            other_writers: Vec::new(),
            bridge_log_crate: false,
        }
    }
}

/// Simple methods for influencing the behavior of the Logger.
impl Logger {
    /// Sets the default verbosity for packages without explicit verbosity.
    #[must_use]
    pub fn default_level<S: Into<String>>(mut self, default_level: S) -> Self {
        self.config.default_level = default_level.into();
        self
    }

    /// Sets the package settings string.
    #[must_use]
    pub fn package_rules<S: Into<String>>(mut self, package_rules: S) -> Self {
        self.config.package_rules = package_rules.into();
        self
    }

    /// Makes the logger additionally append all logs to the given file.
    #[must_use]
    pub fn log_to_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.log_file = Some(path.into());
        self
    }

    /// Switches the colors of the console output on or off.
    #[must_use]
    pub fn colors(mut self, colors: bool) -> Self {
        self.config.colors = colors;
        self
    }

    /// Makes the console and file writers use the provided format function,
    /// rather than [`standard_format`](crate::standard_format).
    #[must_use]
    pub fn format(mut self, format: FormatFunction) -> Self {
        self.format = format;
        self
    }

    /// Registers an additional writer, after the console and file writers.
    #[must_use]
    pub fn add_writer(mut self, writer: Box<dyn LogWriter>) -> Self {
        self.other_writers.push(writer);
        self
    }

    /// Makes [`start()`](Logger::start) install a backend for the `log` crate,
    /// so that `log::info!` and friends end up in the same writers.
    ///
    /// The target of a `log` record is used as package name;
    /// `log::Level::Error` becomes [`Level::Error`](crate::Level::Error),
    /// all other levels become [`Level::Info`](crate::Level::Info).
    #[must_use]
    pub fn bridge_log_crate(mut self) -> Self {
        self.bridge_log_crate = true;
        self
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &LogConfig {
        &self.config
    }
}

/// Alternative set of methods to start the logger.
impl Logger {
    /// Consumes the Logger object and builds an independent [`Runtime`].
    ///
    /// The process-wide runtime is not affected.
    #[must_use]
    pub fn build(self) -> Runtime {
        let runtime = Runtime::new();
        runtime.hook_standard_writers(&self.config, self.format);
        for writer in self.other_writers {
            runtime.hook(writer);
        }
        runtime
    }

    /// Consumes the Logger object and sets up the process-wide runtime,
    /// which is then used by [`log`](crate::log), [`hook`](crate::hook),
    /// [`package`](crate::package) etc.
    ///
    /// Keep the returned [`LoggerHandle`] alive until the end of your program:
    /// when it is dropped, all writers are flushed and log files are closed.
    ///
    /// # Errors
    ///
    /// [`LoggerError::AlreadyInitialized`] if the process-wide runtime was already set up,
    /// either by an earlier call of this method, or implicitly, by logging before.
    ///
    /// [`LoggerError::Log`] if the bridge to the `log` crate was requested,
    /// but another logger is already registered with the `log` crate.
    /// The process-wide runtime is then left untouched, so `start` can be retried
    /// without the bridge.
    pub fn start(self) -> Result<LoggerHandle, LoggerError> {
        if RUNTIME.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }
        if self.bridge_log_crate {
            log::set_boxed_logger(Box::new(LogBridge))?;
            log::set_max_level(log::LevelFilter::Trace);
        }
        RUNTIME
            .set(self.build())
            .map_err(|_runtime| LoggerError::AlreadyInitialized)?;
        Ok(LoggerHandle::new(global_runtime()))
    }
}
