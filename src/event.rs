use crate::Level;
use std::{collections::HashMap, fmt::Display, time::Duration};

/// Key-value attributes of a log event.
pub type Attrs = HashMap<String, String>;

/// A single log event.
///
/// A `Log` is created by the caller for each log call, handed to
/// [`Runtime::log`](crate::Runtime::log), and dropped after all writers have seen it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Log {
    package: String,
    level: Level,
    message: String,
    attrs: Option<Attrs>,
    elapsed_nanos: u64,
}

impl Log {
    /// Creates an event of the given package, level, and message.
    #[must_use]
    pub fn new<P: Into<String>, M: Into<String>>(package: P, level: Level, message: M) -> Self {
        Self {
            package: package.into(),
            level,
            message: message.into(),
            attrs: None,
            elapsed_nanos: 0,
        }
    }

    /// Creates an info event.
    #[must_use]
    pub fn info<P: Into<String>, M: Into<String>>(package: P, message: M) -> Self {
        Self::new(package, Level::Info, message)
    }

    /// Creates an error event.
    #[must_use]
    pub fn error<P: Into<String>, M: Into<String>>(package: P, message: M) -> Self {
        Self::new(package, Level::Error, message)
    }

    /// Creates a timer event that reports the given elapsed time.
    ///
    /// Durations beyond `u64::MAX` nanoseconds (ca. 584 years) are capped.
    #[must_use]
    pub fn timer<P: Into<String>, M: Into<String>>(
        package: P,
        message: M,
        elapsed: Duration,
    ) -> Self {
        let mut log = Self::new(package, Level::Timer, message);
        log.elapsed_nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        log
    }

    /// Replaces the attributes.
    #[must_use]
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Adds a single attribute; an existing value for the same key is replaced.
    #[must_use]
    pub fn with_attr<K: Into<String>, V: Display>(mut self, key: K, value: V) -> Self {
        self.attrs
            .get_or_insert_with(Attrs::new)
            .insert(key.into(), value.to_string());
        self
    }

    /// The package that emitted the event.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The level of the event.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// The message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The attributes, if any were given.
    #[must_use]
    pub fn attrs(&self) -> Option<&Attrs> {
        self.attrs.as_ref()
    }

    /// The elapsed time in nanoseconds; zero for events that are no timer events.
    #[must_use]
    pub fn elapsed_nanos(&self) -> u64 {
        self.elapsed_nanos
    }
}
