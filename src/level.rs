use crate::LoggerError;
use std::{fmt, str::FromStr};

/// The kind of a log event.
///
/// The three levels are independent of each other: there is no ordering, and enabling
/// one level for a package says nothing about the others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// A normal log message.
    Info,
    /// A message that reports the elapsed time of some operation.
    Timer,
    /// An error message.
    Error,
}

impl Level {
    /// The textual name of the level, as accepted by
    /// [`PackageSettings::is_enabled_by_name`](crate::PackageSettings::is_enabled_by_name).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Timer => "TIMER",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    // Only the exact names are accepted, anything else is unknown.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(Self::Info),
            "TIMER" => Ok(Self::Timer),
            "ERROR" => Ok(Self::Error),
            _ => Err(LoggerError::UnknownLevel(s.to_string())),
        }
    }
}
