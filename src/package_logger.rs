use crate::{Attrs, Log, Runtime};
use std::time::Instant;

/// Logs events of a single package into a runtime.
///
/// ```rust
/// let logger = pkg_logger::package("database");
/// logger.info("connected");
///
/// let timer = logger.timer();
/// // run a query
/// timer.end("query done");
/// ```
pub struct PackageLogger<'r> {
    runtime: &'r Runtime,
    package: String,
}

impl<'r> PackageLogger<'r> {
    pub(crate) fn new<S: Into<String>>(runtime: &'r Runtime, package: S) -> Self {
        Self {
            runtime,
            package: package.into(),
        }
    }

    /// The package name.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Logs an info message.
    pub fn info<M: Into<String>>(&self, message: M) {
        self.runtime.log(&Log::info(self.package.as_str(), message));
    }

    /// Logs an info message with attributes.
    pub fn info_with<M: Into<String>>(&self, message: M, attrs: Attrs) {
        self.runtime
            .log(&Log::info(self.package.as_str(), message).with_attrs(attrs));
    }

    /// Logs an error message.
    pub fn error<M: Into<String>>(&self, message: M) {
        self.runtime.log(&Log::error(self.package.as_str(), message));
    }

    /// Logs an error message with attributes.
    pub fn error_with<M: Into<String>>(&self, message: M, attrs: Attrs) {
        self.runtime
            .log(&Log::error(self.package.as_str(), message).with_attrs(attrs));
    }

    /// Starts measuring the time of some operation.
    #[must_use]
    pub fn timer(&self) -> Timer<'_, 'r> {
        Timer {
            logger: self,
            start: Instant::now(),
        }
    }
}

/// Measures the time since it was created with [`PackageLogger::timer`].
///
/// Nothing is logged if the timer is dropped without calling one of its `end` methods.
pub struct Timer<'l, 'r> {
    logger: &'l PackageLogger<'r>,
    start: Instant,
}

impl Timer<'_, '_> {
    /// Logs a timer event with the elapsed time.
    pub fn end<M: Into<String>>(self, message: M) {
        self.logger.runtime.log(&Log::timer(
            self.logger.package.as_str(),
            message,
            self.start.elapsed(),
        ));
    }

    /// Logs a timer event with the elapsed time and attributes.
    pub fn end_with<M: Into<String>>(self, message: M, attrs: Attrs) {
        self.logger.runtime.log(
            &Log::timer(
                self.logger.package.as_str(),
                message,
                self.start.elapsed(),
            )
            .with_attrs(attrs),
        );
    }
}

#[cfg(test)]
mod test {
    use crate::{writers::LogWriter, Attrs, DeferredNow, Level, Log, Runtime};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Collector(Arc<Mutex<Vec<Log>>>);
    impl LogWriter for Collector {
        fn write(&self, _now: &mut DeferredNow, log: &Log) -> std::io::Result<()> {
            self.0.lock().unwrap().push(log.clone());
            Ok(())
        }
    }

    #[test]
    fn package_logger_emits_events() {
        let collected = Arc::new(Mutex::new(Vec::new()));
        let runtime = Runtime::new();
        runtime.hook(Box::new(Collector(Arc::clone(&collected))));

        let logger = runtime.package("database");
        logger.info("connected");
        let mut attrs = Attrs::new();
        attrs.insert("table".to_string(), "users".to_string());
        logger.error_with("query failed", attrs);
        let timer = logger.timer();
        std::thread::sleep(std::time::Duration::from_millis(2));
        timer.end("query done");

        let logs = collected.lock().unwrap();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0], Log::info("database", "connected"));
        assert_eq!(logs[1].level(), Level::Error);
        assert_eq!(logs[1].attrs().unwrap()["table"], "users");
        assert_eq!(logs[2].level(), Level::Timer);
        assert_eq!(logs[2].package(), "database");
        assert!(logs[2].elapsed_nanos() >= 2_000_000);
    }
}
