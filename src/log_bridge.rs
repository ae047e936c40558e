use crate::{logger::started_runtime, Level, Log};

// Backend for the `log` crate that forwards records into the process-wide runtime.
// It is installed before the runtime is set up; records that arrive in between are dropped.
pub(crate) struct LogBridge;

pub(crate) fn to_log(record: &log::Record) -> Log {
    let level = match record.level() {
        log::Level::Error => Level::Error,
        log::Level::Warn | log::Level::Info | log::Level::Debug | log::Level::Trace => Level::Info,
    };
    Log::new(record.target(), level, record.args().to_string())
}

impl log::Log for LogBridge {
    // The writers decide.
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Some(runtime) = started_runtime() {
            runtime.log(&to_log(record));
        }
    }

    fn flush(&self) {
        if let Some(runtime) = started_runtime() {
            runtime.flush();
        }
    }
}
