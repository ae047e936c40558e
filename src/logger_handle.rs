use crate::{writers::LogWriter, Runtime};

/// Gives access to the process-wide runtime, and
/// **shuts down the writers when it is dropped**.
///
/// A `LoggerHandle` is returned from [`Logger::start()`](crate::Logger::start).
///
/// Keep it alive until the very end of your program, because it flushes the writers and
/// closes the log file when it is dropped!
///
/// ```rust
/// use pkg_logger::{Log, Logger};
/// use std::error::Error;
/// fn main() -> Result<(), Box<dyn Error>> {
///     let _logger = Logger::with_env().start()?;
///     pkg_logger::log(&Log::info("main", "started"));
///     // do work
///     Ok(())
/// }
/// ```
pub struct LoggerHandle {
    runtime: &'static Runtime,
}

impl LoggerHandle {
    pub(crate) fn new(runtime: &'static Runtime) -> Self {
        Self { runtime }
    }

    /// The process-wide runtime.
    #[must_use]
    pub fn runtime(&self) -> &'static Runtime {
        self.runtime
    }

    /// Registers an additional writer.
    pub fn hook(&self, writer: Box<dyn LogWriter>) {
        self.runtime.hook(writer);
    }

    /// Replaces the first writer (by default the console writer).
    pub fn set_output(&self, writer: Box<dyn LogWriter>) {
        self.runtime.set_output(writer);
    }

    /// Flush all writers.
    pub fn flush(&self) {
        self.runtime.flush();
    }

    /// Flushes all writers and closes log files.
    ///
    /// Is called automatically when the handle is dropped.
    pub fn shutdown(&self) {
        self.runtime.shutdown();
    }
}

impl Drop for LoggerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
