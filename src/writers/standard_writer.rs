use super::destination::Destination;
use crate::{
    formats::standard_format,
    util::{eprint_err, ErrorCode},
    writers::LogWriter,
    DeferredNow, FormatFunction, Level, Log, LoggerError, PackageSettings, Palette,
};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Writes log events as single human-readable lines to stderr, to a file,
/// or to some other byte stream.
///
/// Each `StandardWriter` has its own [`PackageSettings`], which decide which events it writes.
/// By default, lines are formatted with [`standard_format`];
/// the console writer uses colors, file writers don't.
pub struct StandardWriter {
    settings: PackageSettings,
    palette: Palette,
    format: FormatFunction,
    destination: Destination,
}

impl StandardWriter {
    fn new(destination: Destination, settings: PackageSettings, palette: Palette) -> Self {
        Self {
            settings,
            palette,
            format: standard_format,
            destination,
        }
    }

    /// A writer to stderr, with the default colored palette.
    #[must_use]
    pub fn stderr(settings: PackageSettings) -> Self {
        Self::new(Destination::stderr(), settings, Palette::colored())
    }

    /// A writer that appends to the given file, which is created if necessary.
    ///
    /// Colors are switched off. Output is buffered; call [`LogWriter::flush`]
    /// or [`LogWriter::shutdown`] to make sure everything is written.
    ///
    /// # Errors
    ///
    /// [`LoggerError::OpenLogFile`] if the file cannot be opened.
    pub fn try_file<P: AsRef<Path>>(
        path: P,
        settings: PackageSettings,
    ) -> Result<Self, LoggerError> {
        let path = path.as_ref();
        let destination =
            Destination::append_to_file(path).map_err(|source| LoggerError::OpenLogFile {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(destination, settings, Palette::plain()))
    }

    /// A writer to an arbitrary byte stream, without colors.
    #[must_use]
    pub fn to_stream(w: Box<dyn Write + Send>, settings: PackageSettings) -> Self {
        Self::new(Destination::stream(w), settings, Palette::plain())
    }

    /// Replaces the palette; use [`Palette::plain`] to switch colors off.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Switches colors on (with the default palette) or off.
    #[must_use]
    pub fn colors(self, colors: bool) -> Self {
        self.palette(if colors {
            Palette::colored()
        } else {
            Palette::plain()
        })
    }

    /// Makes the writer use the provided format function, rather than [`standard_format`].
    #[must_use]
    pub fn format(mut self, format: FormatFunction) -> Self {
        self.format = format;
        self
    }

    /// The package settings of this writer.
    #[must_use]
    pub fn settings(&self) -> &PackageSettings {
        &self.settings
    }

    /// True if this writer writes colored output.
    #[must_use]
    pub fn is_colored(&self) -> bool {
        self.palette.is_colored()
    }

    /// The path of the log file, if this writer writes to a file.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        self.destination.path().map(Path::to_path_buf)
    }

    /// Returns true if this writer writes events of the given package and level.
    #[must_use]
    pub fn is_enabled(&self, package: &str, level: Level) -> bool {
        self.settings.is_enabled(package, level)
    }
}

impl LogWriter for StandardWriter {
    #[inline]
    fn write(&self, now: &mut DeferredNow, log: &Log) -> std::io::Result<()> {
        if !self.is_enabled(log.package(), log.level()) {
            return Ok(());
        }
        self.destination
            .write_line(|w| (self.format)(w, now, log, &self.palette))
    }

    #[inline]
    fn flush(&self) -> std::io::Result<()> {
        self.destination.flush()
    }

    fn shutdown(&self) {
        self.destination
            .close()
            .unwrap_or_else(|e| eprint_err(ErrorCode::Flush, "closing the output failed", &e));
    }
}
