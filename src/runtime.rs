use crate::{
    formats::standard_format,
    util::{eprint_err, ErrorCode},
    writers::{LogWriter, StandardWriter},
    DeferredNow, FormatFunction, Log, LogConfig, PackageLogger, Palette,
};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Writers = Arc<Vec<Arc<dyn LogWriter>>>;

/// The ordered set of writers to which log events are dispatched.
///
/// Writers can be added at any time, but not removed. Each event is handed to all
/// writers in the order in which they were registered, synchronously, on the calling thread.
///
/// Writers are called without any lock of the runtime being held, so a writer
/// may itself log, or register further writers; the latter only see subsequent events.
///
/// A `Runtime` can be used directly (e.g. in tests, or to run several independent
/// logging setups side by side), or as the process-wide runtime that is set up with
/// [`Logger::start`](crate::Logger::start).
pub struct Runtime {
    // copy-on-write: dispatching works on a snapshot
    writers: RwLock<Writers>,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    /// A runtime without writers; it swallows all events.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writers: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// A runtime with a console writer on stderr and, if configured,
    /// a plain writer that appends to the log file.
    ///
    /// If the log file cannot be opened, this is reported to stderr and
    /// only the console writer is used.
    #[must_use]
    pub fn from_config(config: &LogConfig) -> Self {
        let runtime = Self::new();
        runtime.hook_standard_writers(config, standard_format);
        runtime
    }

    pub(crate) fn hook_standard_writers(&self, config: &LogConfig, format: FormatFunction) {
        let palette = if config.colors {
            Palette::colored()
        } else {
            Palette::plain()
        };
        self.hook(Box::new(
            StandardWriter::stderr(config.package_settings())
                .palette(palette)
                .format(format),
        ));
        if let Some(ref path) = config.log_file {
            match StandardWriter::try_file(path, config.package_settings()) {
                Ok(file_writer) => self.hook(Box::new(file_writer.format(format))),
                Err(e) => eprint_err(
                    ErrorCode::LogFile,
                    &format!("continuing without log file {}", path.display()),
                    &e,
                ),
            }
        }
    }

    // The vector is only modified by push and replace, which cannot leave it
    // inconsistent, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Writers> {
        self.writers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Writers> {
        self.writers.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn snapshot(&self) -> Writers {
        let guard = self.read();
        Arc::clone(&*guard)
    }

    /// Hands the event to all writers.
    ///
    /// Never fails: if a writer fails, the error is reported to stderr
    /// and the remaining writers still get the event.
    pub fn log(&self, log: &Log) {
        let writers = self.snapshot();
        let mut now = DeferredNow::new();
        match writers.as_slice() {
            [] => {}
            [writer] => write_isolated(writer.as_ref(), &mut now, log),
            writers => {
                for writer in writers {
                    write_isolated(writer.as_ref(), &mut now, log);
                }
            }
        }
    }

    /// Initializes the writer and appends it to the list of writers.
    pub fn hook(&self, mut writer: Box<dyn LogWriter>) {
        writer.init();
        Arc::make_mut(&mut self.write()).push(Arc::from(writer));
    }

    /// Replaces the first writer, or registers the writer if there is none yet.
    ///
    /// The replaced writer is shut down, all other writers are kept unchanged.
    pub fn set_output(&self, mut writer: Box<dyn LogWriter>) {
        writer.init();
        let writer: Arc<dyn LogWriter> = Arc::from(writer);
        let replaced = {
            let mut guard = self.write();
            let writers = Arc::make_mut(&mut guard);
            match writers.first_mut() {
                Some(first) => Some(std::mem::replace(first, writer)),
                None => {
                    writers.push(writer);
                    None
                }
            }
        };
        if let Some(replaced) = replaced {
            replaced.shutdown();
        }
    }

    /// Number of registered writers.
    #[must_use]
    pub fn writer_count(&self) -> usize {
        self.read().len()
    }

    /// A logger for the given package that logs into this runtime.
    #[must_use]
    pub fn package<S: Into<String>>(&self, package: S) -> PackageLogger<'_> {
        PackageLogger::new(self, package)
    }

    /// Flushes all writers.
    pub fn flush(&self) {
        for writer in self.snapshot().iter() {
            writer
                .flush()
                .unwrap_or_else(|e| eprint_err(ErrorCode::Flush, "flushing failed", &e));
        }
    }

    /// Flushes all writers and closes their files.
    ///
    /// Should be called before the program ends if a log file is used.
    pub fn shutdown(&self) {
        for writer in self.snapshot().iter() {
            writer.shutdown();
        }
    }
}

fn write_isolated(writer: &dyn LogWriter, now: &mut DeferredNow, log: &Log) {
    writer
        .write(now, log)
        .unwrap_or_else(|e| eprint_err(ErrorCode::Write, "writing log line failed", &e));
}
