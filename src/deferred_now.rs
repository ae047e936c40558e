use chrono::{DateTime, Local};

/// Deferred timestamp creation.
///
/// Is used to ensure that a log event that is sent to multiple writers
/// always shows the same timestamp.
#[derive(Debug, Default)]
pub struct DeferredNow(Option<DateTime<Local>>);

impl DeferredNow {
    /// Constructs a new instance, but does not generate the timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self(None)
    }

    /// Retrieve the timestamp.
    ///
    /// Requires mutability because the first caller will generate the timestamp.
    pub fn now(&mut self) -> &DateTime<Local> {
        self.0.get_or_insert_with(Local::now)
    }

    /// Convert into a formatted String, using `chrono`'s `strftime` syntax.
    #[must_use]
    pub fn format(&mut self, fmt: &str) -> String {
        self.now().format(fmt).to_string()
    }
}
