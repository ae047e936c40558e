
use pkg_logger::{Log, Logger, LoggerError};
use test_utils::{entries, JournalWriter};

// Only one test function: the process-wide runtime can be set up only once.
#[test]
fn test_global() {
    let handle = Logger::with_str("*")
        .colors(false)
        .bridge_log_crate()
        .start()
        .unwrap();
    assert_eq!(handle.runtime().writer_count(), 1);

    let (writer, journal) = JournalWriter::new("capture");
    pkg_logger::hook(writer);
    assert_eq!(handle.runtime().writer_count(), 2);

    pkg_logger::log(&Log::info("users", "karl logged in"));
    pkg_logger::package("database").error("connection lost");
    log::error!(target: "server", "out of memory");
    log::warn!(target: "server", "almost out of memory");
    log::debug!(target: "server", "{} bytes left", 17);

    assert_eq!(
        entries(&journal),
        [
            "capture: users INFO karl logged in",
            "capture: database ERROR connection lost",
            "capture: server ERROR out of memory",
            "capture: server INFO almost out of memory",
            "capture: server INFO 17 bytes left",
        ]
    );

    match Logger::with_env().start() {
        Err(LoggerError::AlreadyInitialized) => {}
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("second start must fail"),
    }

    pkg_logger::flush();
    drop(handle);
}
