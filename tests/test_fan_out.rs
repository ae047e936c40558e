
use pkg_logger::{
    writers::StandardWriter, Level, Log, LogConfig, Logger, PackageSettings, Runtime, Visibility,
};
use std::time::Duration;
use test_utils::{entries, JournalWriter, SharedBuffer};

#[test]
fn test_hooked_writers_see_every_event_in_order() {
    let runtime = Runtime::new();
    let (w1, journal) = JournalWriter::new("w1");
    runtime.hook(w1);
    runtime.hook(JournalWriter::sharing("w2", &journal));

    runtime.log(&Log::info("users", "first"));
    runtime.log(&Log::error("database", "second"));

    assert_eq!(
        entries(&journal),
        [
            "w1: users INFO first",
            "w2: users INFO first",
            "w1: database ERROR second",
            "w2: database ERROR second",
        ]
    );
}

#[test]
fn test_writers_filter_independently() {
    let all = SharedBuffer::default();
    let errors_only = SharedBuffer::default();

    let runtime = Logger::with_str("*@mute")
        .add_writer(Box::new(StandardWriter::to_stream(
            Box::new(all.clone()),
            PackageSettings::parse("*", Visibility::VERBOSE),
        )))
        .add_writer(Box::new(StandardWriter::to_stream(
            Box::new(errors_only.clone()),
            PackageSettings::parse("*@error", Visibility::VERBOSE),
        )))
        .build();
    // console writer plus the two additional ones
    assert_eq!(runtime.writer_count(), 3);

    runtime.log(&Log::info("users", "karl logged in").with_attr("user", "karl"));
    runtime.log(&Log::timer("database", "query done", Duration::from_millis(12)));
    runtime.log(&Log::error("server", "connection lost"));

    let all = all.lines();
    assert_eq!(all.len(), 3);
    assert!(all[0].ends_with(" users: karl logged in user=karl"));
    assert!(all[1].ends_with(" database(12ms): query done"));
    assert!(all[2].ends_with(" server(ERROR!): connection lost"));

    let errors_only = errors_only.lines();
    assert_eq!(errors_only.len(), 1);
    assert!(errors_only[0].ends_with(" server(ERROR!): connection lost"));
}

#[test]
fn test_documented_example_settings() {
    let config = LogConfig {
        package_rules: "users,database@timer,*@error".to_string(),
        ..LogConfig::default()
    };
    let settings = config.package_settings();
    assert!(settings.is_enabled("users", Level::Info));
    assert!(settings.is_enabled("database", Level::Timer));
    assert!(!settings.is_enabled("database", Level::Info));
    assert!(settings.is_enabled("server", Level::Error));
    assert!(!settings.is_enabled("server", Level::Info));

    assert!(settings.is_enabled_by_name("users", "INFO"));
    assert!(!settings.is_enabled_by_name("server", "WARN"));
}

#[test]
fn test_package_logger_and_timer() {
    let buffer = SharedBuffer::default();
    let runtime = Runtime::new();
    runtime.hook(Box::new(StandardWriter::to_stream(
        Box::new(buffer.clone()),
        PackageSettings::parse("users@timer", Visibility::VERBOSE),
    )));

    let users = runtime.package("users");
    users.info("must not be seen");
    users.error("must be seen");
    users.timer().end("profile loaded");
    runtime.package("other").error("must not be seen");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" users(ERROR!): must be seen"));
    assert!(lines[1].contains(" users("));
    assert!(lines[1].ends_with("): profile loaded"));
}
