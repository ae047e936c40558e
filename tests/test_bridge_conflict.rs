
use pkg_logger::{Log, Logger, LoggerError};
use test_utils::{entries, JournalWriter};

struct OtherLogger;
impl log::Log for OtherLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        false
    }
    fn log(&self, _record: &log::Record) {}
    fn flush(&self) {}
}

// Only one test function: both the `log` crate's logger and the
// process-wide runtime can be set only once.
#[test]
fn test_bridge_conflict() {
    log::set_boxed_logger(Box::new(OtherLogger)).unwrap();

    match Logger::with_str("*").bridge_log_crate().start() {
        Err(LoggerError::Log(_)) => {}
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("the bridge must not be installed twice"),
    }

    // the failed attempt left the process-wide runtime alone
    let (writer, journal) = JournalWriter::new("capture");
    let handle = Logger::with_str("*")
        .colors(false)
        .add_writer(writer)
        .start()
        .unwrap();
    assert_eq!(handle.runtime().writer_count(), 2);

    pkg_logger::log(&Log::info("users", "karl logged in"));
    assert_eq!(entries(&journal), ["capture: users INFO karl logged in"]);
}
