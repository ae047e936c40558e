use std::path::PathBuf;
use thiserror::Error;

/// Describes errors in the initialization of `pkg_logger`.
///
/// Logging itself never fails; errors only appear when the logger or one of its
/// writers is set up explicitly.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoggerError {
    /// The log file could not be opened.
    #[error("log file {path} cannot be opened")]
    OpenLogFile {
        /// The path of the log file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The global logger was already initialized.
    #[error("the global logger was already initialized")]
    AlreadyInitialized,

    /// Installing the bridge for the `log` crate failed.
    #[error("the bridge for the log crate cannot be installed")]
    Log(#[from] log::SetLoggerError),

    /// The given level name is not one of `INFO`, `TIMER`, `ERROR`.
    #[error("unknown level '{0}'")]
    UnknownLevel(String),
}
