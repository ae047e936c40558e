use crate::{DeferredNow, Log};
use std::io;

/// Writes to a single log output stream.
///
/// Boxed instances of `LogWriter` are registered with
/// [`Runtime::hook`](crate::Runtime::hook). Every registered writer sees every log event,
/// and decides on its own whether to write it.
pub trait LogWriter: Sync + Send {
    /// Is called once, when the writer is registered.
    fn init(&mut self) {}

    /// Writes out a log event, if this writer is configured to show it.
    ///
    /// # Errors
    ///
    /// If writing to the output stream fails. The runtime reports the error
    /// and continues with the other writers.
    fn write(&self, now: &mut DeferredNow, log: &Log) -> io::Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// If flushing the output stream fails.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }

    /// Flushes and closes the output; subsequent writes may fail.
    fn shutdown(&self) {}
}
