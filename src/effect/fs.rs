//! File helpers producing IO actions.
//!
//! Each helper only captures its path and content; the filesystem is
//! touched when the returned action is run, and again on every re-run.
//! Failures become [`Fault::Io`] carrying the path.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use super::error::Fault;
use super::io::IO;

impl IO<String, Fault> {
    /// Reads the whole file at `path` as UTF-8.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use rivulet::effect::IO;
    ///
    /// let config = IO::read_file("settings.toml").map(|text| text.lines().count());
    /// let _lines = config.run()?;
    /// # Ok::<(), rivulet::effect::Fault>(())
    /// ```
    pub fn read_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        IO::new(move || {
            #[cfg(feature = "tracing")]
            tracing::trace!(path = %path.display(), "reading file");
            fs::read_to_string(&path).map_err(|error| Fault::io(path.clone(), error))
        })
    }
}

impl IO<(), Fault> {
    /// Replaces the contents of the file at `path`, creating it if needed.
    pub fn write_file(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        let content = content.into();
        IO::new(move || {
            #[cfg(feature = "tracing")]
            tracing::trace!(path = %path.display(), bytes = content.len(), "writing file");
            fs::write(&path, &content).map_err(|error| Fault::io(path.clone(), error))
        })
    }

    /// Appends `content` to the file at `path`, creating it if needed.
    pub fn append_file(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        let content = content.into();
        IO::new(move || {
            #[cfg(feature = "tracing")]
            tracing::trace!(path = %path.display(), bytes = content.len(), "appending to file");
            fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&path)
                .and_then(|mut file| file.write_all(content.as_bytes()))
                .map_err(|error| Fault::io(path.clone(), error))
        })
    }
}
