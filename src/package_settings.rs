use crate::{Level, Visibility};
use std::collections::HashMap;

/// The package name that matches all packages without an explicit entry.
pub const WILDCARD: &str = "*";

/// Immutable struct that defines which log events are to be written,
/// based on the package and the level.
///
/// The textual form (see [`PackageSettings::parse`]) is a comma-separated
/// list of packages, each with an optional verbosity:
///
/// ```text
/// <package_settings> ::= <package_entry>[{,<package_entry>}]
/// <package_entry>    ::= <package_name>|<package_name>@<verbosity>
/// <verbosity>        ::= mute|timer|error|<anything else>
/// ```
///
/// * A package without verbosity gets the fallback visibility,
///   which is usually derived from `LOG_LEVEL`.
/// * The package name `*` applies to all packages that are not listed explicitly.
/// * Packages that are neither listed nor covered by `*` are muted.
/// * If a package is listed more than once, the last entry wins.
///
/// Example: `users,database@timer,*@error`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageSettings {
    packages: HashMap<String, Visibility>,
}

impl PackageSettings {
    /// Parses a package settings string.
    ///
    /// Parsing never fails; unknown verbosity values mean "write everything".
    ///
    /// Note that an empty input yields a single entry for the empty package name,
    /// which then has the fallback visibility.
    #[must_use]
    pub fn parse(input: &str, fallback: Visibility) -> Self {
        let mut packages = HashMap::new();
        for item in input.split(',') {
            let (name, o_visibility) = parse_package(item);
            packages.insert(name.to_string(), o_visibility.unwrap_or(fallback));
        }
        Self { packages }
    }

    /// Returns the visibility for the given package:
    /// its own entry, or the wildcard entry, or [`Visibility::MUTED`].
    #[must_use]
    pub fn visibility(&self, package: &str) -> Visibility {
        self.packages
            .get(package)
            .or_else(|| self.packages.get(WILDCARD))
            .copied()
            .unwrap_or(Visibility::MUTED)
    }

    /// Returns true if events of the given package and level are to be written.
    #[must_use]
    pub fn is_enabled(&self, package: &str, level: Level) -> bool {
        self.visibility(package).allows(level)
    }

    /// Like [`PackageSettings::is_enabled`], with the level given by its name
    /// (`INFO`, `TIMER`, `ERROR`). Unknown level names are never enabled.
    #[must_use]
    pub fn is_enabled_by_name(&self, package: &str, level: &str) -> bool {
        level
            .parse::<Level>()
            .is_ok_and(|level| self.is_enabled(package, level))
    }

    /// The explicit entry for the given package, if any.
    #[must_use]
    pub fn get(&self, package: &str) -> Option<Visibility> {
        self.packages.get(package).copied()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// True if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterates over all entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Visibility)> {
        self.packages.iter().map(|(name, v)| (name.as_str(), *v))
    }
}

// "database@timer" -> ("database", Some(timer)), "users" -> ("users", None)
fn parse_package(item: &str) -> (&str, Option<Visibility>) {
    let mut parts = item.split('@');
    let name = parts.next().unwrap_or_default().trim();
    (name, parts.next().map(Visibility::parse))
}

#[cfg(test)]
mod test {
    use super::PackageSettings;
    use crate::{Level, Visibility};

    fn timer_only() -> Visibility {
        Visibility::parse("timer")
    }

    #[test]
    fn parse_settings_valid() {
        let settings =
            PackageSettings::parse("users,database@timer,*@error", Visibility::VERBOSE);
        assert_eq!(settings.len(), 3);
        assert_eq!(settings.get("users"), Some(Visibility::VERBOSE));
        assert_eq!(settings.get("database"), Some(timer_only()));
        assert_eq!(settings.get("*"), Some(Visibility::parse("error")));
    }

    #[test]
    fn parse_settings_with_spaces() {
        let settings = PackageSettings::parse(" users , database @ timer ", Visibility::MUTED);
        assert_eq!(settings.len(), 2);
        assert_eq!(settings.get("users"), Some(Visibility::MUTED));
        assert_eq!(settings.get("database"), Some(timer_only()));
    }

    #[test]
    fn parse_settings_uses_fallback_verbatim() {
        let fallback = Visibility::parse("error");
        let settings = PackageSettings::parse("users,server", fallback);
        assert_eq!(settings.get("users"), Some(fallback));
        assert_eq!(settings.get("server"), Some(fallback));
    }

    #[test]
    fn parse_settings_last_duplicate_wins() {
        let settings = PackageSettings::parse("users@mute,users@timer", Visibility::VERBOSE);
        assert_eq!(settings.len(), 1);
        assert_eq!(settings.get("users"), Some(timer_only()));
    }

    #[test]
    fn parse_settings_only_reads_first_suffix() {
        let settings = PackageSettings::parse("users@timer@mute", Visibility::VERBOSE);
        assert_eq!(settings.get("users"), Some(timer_only()));
    }

    #[test]
    fn parse_settings_empty_input() {
        let fallback = Visibility::parse("timer");
        let settings = PackageSettings::parse("", fallback);
        assert_eq!(settings.len(), 1);
        assert_eq!(settings.get(""), Some(fallback));
        assert!(!settings.is_enabled("users", Level::Error));
    }

    #[test]
    fn parse_settings_size_matches_tokens() {
        for (input, expected) in [
            ("a", 1),
            ("a,b", 2),
            ("a,b,c@mute", 3),
            ("a,,b", 3),
            ("a,a,a", 1),
            (",", 1),
        ] {
            let settings = PackageSettings::parse(input, Visibility::VERBOSE);
            assert_eq!(settings.len(), expected, "{input:?}");
        }
    }

    #[test]
    fn parse_settings_is_pure() {
        let input = "users,database@timer,*@error";
        assert_eq!(
            PackageSettings::parse(input, Visibility::VERBOSE),
            PackageSettings::parse(input, Visibility::VERBOSE)
        );
    }

    #[test]
    fn lookup_exact_then_wildcard_then_muted() {
        let settings =
            PackageSettings::parse("users,database@timer,*@error", Visibility::VERBOSE);
        assert!(settings.is_enabled("users", Level::Info));
        assert!(settings.is_enabled("database", Level::Timer));
        assert!(!settings.is_enabled("database", Level::Info));
        assert!(settings.is_enabled("server", Level::Error));
        assert!(!settings.is_enabled("server", Level::Info));

        let settings = PackageSettings::parse("users", Visibility::VERBOSE);
        assert_eq!(settings.visibility("server"), Visibility::MUTED);
    }

    #[test]
    fn lookup_by_name() {
        let settings =
            PackageSettings::parse("users,database@timer,*@error", Visibility::VERBOSE);
        assert!(settings.is_enabled_by_name("users", "INFO"));
        assert!(settings.is_enabled_by_name("database", "TIMER"));
        assert!(!settings.is_enabled_by_name("database", "INFO"));
        assert!(settings.is_enabled_by_name("server", "ERROR"));
        assert!(!settings.is_enabled_by_name("users", "DEBUG"));
        assert!(!settings.is_enabled_by_name("users", ""));
    }

    #[test]
    fn empty_settings_enable_nothing() {
        let settings = PackageSettings::default();
        assert!(settings.is_empty());
        for level in [Level::Info, Level::Timer, Level::Error] {
            assert!(!settings.is_enabled("users", level));
            assert!(!settings.is_enabled("", level));
        }
    }

    #[test]
    fn wildcard_mute_suppresses_everything() {
        let settings = PackageSettings::parse("*@mute", Visibility::VERBOSE);
        for package in ["users", "database", "*", ""] {
            for level in [Level::Info, Level::Timer, Level::Error] {
                assert!(!settings.is_enabled(package, level));
            }
        }
    }
}
