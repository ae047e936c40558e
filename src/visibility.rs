use crate::Level;

/// Defines which levels of a package are written.
///
/// A `Visibility` is always fully determined; missing configuration resolves to
/// [`Visibility::MUTED`] rather than to an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Visibility {
    /// Write [`Level::Info`] events.
    pub info: bool,
    /// Write [`Level::Timer`] events.
    pub timer: bool,
    /// Write [`Level::Error`] events.
    pub error: bool,
}

impl Visibility {
    /// Nothing is written.
    pub const MUTED: Self = Self {
        info: false,
        timer: false,
        error: false,
    };

    /// Everything is written.
    pub const VERBOSE: Self = Self {
        info: true,
        timer: true,
        error: true,
    };

    /// Parses a single verbosity token.
    ///
    /// The token is trimmed and compared case-insensitively:
    ///
    /// * `mute` writes nothing,
    /// * `timer` writes timers and errors,
    /// * `error` writes errors only,
    /// * every other value, including the empty string, writes everything.
    ///
    /// Parsing never fails.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token.trim().to_uppercase().as_str() {
            "MUTE" => Self::MUTED,
            "TIMER" => Self {
                info: false,
                ..Self::VERBOSE
            },
            "ERROR" => Self {
                error: true,
                ..Self::MUTED
            },
            _ => Self::VERBOSE,
        }
    }

    /// Returns true if events of the given level are to be written.
    #[must_use]
    pub fn allows(&self, level: Level) -> bool {
        match level {
            Level::Info => self.info,
            Level::Timer => self.timer,
            Level::Error => self.error,
        }
    }
}
