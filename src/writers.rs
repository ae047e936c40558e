//! Contains the trait [`LogWriter`] for extending `pkg_logger`
//! with additional log writers,
//! and the concrete implementation [`StandardWriter`]
//! for writing human-readable lines to stderr, to files, or to other byte streams.
//!
//! Every writer that is registered with the runtime receives every log event,
//! in the order of registration, and decides on its own whether to write it.
//! A writer that fails does not affect the others.
//!
//! ```rust
//! use pkg_logger::{
//!     writers::{LogWriter, StandardWriter},
//!     DeferredNow, Log, Logger, PackageSettings, Visibility,
//! };
//!
//! // A writer that collects error messages for an alert channel
//! struct AlertWriter;
//! impl LogWriter for AlertWriter {
//!     fn write(&self, _now: &mut DeferredNow, log: &Log) -> std::io::Result<()> {
//!         if log.level() == pkg_logger::Level::Error {
//!             // send log.message() somewhere
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let runtime = Logger::with_str("users,*@error").build();
//! runtime.hook(Box::new(AlertWriter));
//! runtime.hook(Box::new(StandardWriter::to_stream(
//!     Box::new(std::io::sink()),
//!     PackageSettings::parse("*", Visibility::VERBOSE),
//! )));
//! runtime.log(&Log::error("server", "connection lost"));
//! ```

mod destination;
mod log_writer;
mod standard_writer;

pub use self::log_writer::LogWriter;
pub use self::standard_writer::StandardWriter;
