// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![allow(clippy::needless_doctest_main)]
//! A logger that routes log events of named packages to one or more writers,
//! each of which decides on its own, per package and per level, what it writes.
//!
//! The configuration is usually taken from the environment:
//!
//! * `LOG` defines which packages are logged, and how verbosely, e.g.
//!   `users,database@timer,*@error`
//!   (see [`PackageSettings`] for the syntax),
//! * `LOG_LEVEL` defines the verbosity of the packages in `LOG` that have none
//!   (see [`Visibility::parse`]),
//! * `LOG_FILE` names a file to which the log is written in addition to stderr.
//!
//! There are three levels, [`Level::Info`], [`Level::Timer`], and [`Level::Error`];
//! each can be switched on or off independently.
//!
//! ```rust
//! use pkg_logger::{Log, Logger};
//!
//! fn main() {
//!     let _logger = Logger::with_env()
//!         .start()
//!         .unwrap_or_else(|e| panic!("Logger initialization failed with {e}"));
//!
//!     let users = pkg_logger::package("users");
//!     users.info("karl logged in");
//!
//!     let timer = users.timer();
//!     // load the profile
//!     timer.end("profile loaded");
//!
//!     pkg_logger::log(&Log::error("database", "connection lost").with_attr("retry", 3));
//! }
//! ```
//!
//! Output, with `LOG=*`:
//!
//! ```text
//! 10:44:11.047 users: karl logged in
//! 10:44:11.051 users(1.2ms): profile loaded
//! 10:44:11.052 database(ERROR!): connection lost retry=3
//! ```
//!
//! Additional output channels are added with [`hook`]; see module [`writers`].
//!
//! By default, i.e. if feature `colors` is not switched off, the labels of the log lines
//! on stderr are colored, with a stable color per package (see [`Palette`]).
//! Setting `NO_COLOR` switches colors off.

mod deferred_now;
mod event;
mod formats;
mod level;
mod log_bridge;
mod log_config;
mod logger;
mod logger_error;
mod logger_handle;
mod package_logger;
mod package_settings;
mod palette;
mod runtime;
mod util;
mod visibility;

pub mod writers;

pub use crate::deferred_now::DeferredNow;
pub use crate::event::{Attrs, Log};
pub use crate::formats::*;
pub use crate::level::Level;
pub use crate::log_config::{LogConfig, ENV_LOG, ENV_LOG_FILE, ENV_LOG_LEVEL, ENV_NO_COLOR};
pub use crate::logger::Logger;
pub use crate::logger_error::LoggerError;
pub use crate::logger_handle::LoggerHandle;
pub use crate::package_logger::{PackageLogger, Timer};
pub use crate::package_settings::{PackageSettings, WILDCARD};
pub use crate::palette::Palette;
pub use crate::runtime::Runtime;
pub use crate::visibility::Visibility;

/// Sets up the process-wide runtime with the given configuration.
///
/// Shortcut for `Logger::with_config(config).start()`.
///
/// # Errors
///
/// See [`Logger::start`].
pub fn initialize(config: LogConfig) -> Result<LoggerHandle, LoggerError> {
    Logger::with_config(config).start()
}

/// Hands the event to all writers of the process-wide runtime.
///
/// If the runtime was not set up explicitly, it is set up from the environment.
pub fn log(log: &Log) {
    logger::global_runtime().log(log);
}

/// Registers an additional writer with the process-wide runtime.
pub fn hook(writer: Box<dyn writers::LogWriter>) {
    logger::global_runtime().hook(writer);
}

/// Replaces the first writer of the process-wide runtime (by default the console writer).
pub fn set_output(writer: Box<dyn writers::LogWriter>) {
    logger::global_runtime().set_output(writer);
}

/// A logger for the given package that logs into the process-wide runtime.
#[must_use]
pub fn package<S: Into<String>>(package: S) -> PackageLogger<'static> {
    logger::global_runtime().package(package)
}

/// Flushes all writers of the process-wide runtime.
pub fn flush() {
    logger::global_runtime().flush();
}

/// Flushes all writers of the process-wide runtime and closes the log file.
///
/// Call this before the program ends, unless you keep a [`LoggerHandle`] alive,
/// which does this when it is dropped.
pub fn shutdown() {
    logger::global_runtime().shutdown();
}
