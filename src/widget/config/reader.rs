use std::fs::File;
use std::io::{Error as IoError, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use snafu::prelude::*;

pub const DEFAULT_CONTENT: &str = r#"
# This configuration file is generated automatically. Feel free to do some
# modification.

# The `duration` section specifies the duration of each mode in seconds.
[duration]
focus = 1500
short_break = 300
long_break = 900

# The `alarm` section specifies what happens when a countdown completes.
# `backend` is either "sound", which plays `asset` with the `player` program,
# or "notification", which shows a desktop notification using `asset` as its
# sound.
[alarm]
backend = "sound"
asset = "/usr/share/sounds/freedesktop/stereo/complete.oga"
player = "paplay"
"#;

/// A reader which reads the configuration content and creates a default
/// configuration file if it is missing.
pub struct ContentReader {
    path: PathBuf,
    create_new: bool,
}

impl ContentReader {
    /// Creates a new [`ContentReader`].
    pub fn new<P: AsRef<Path>>(path: P, create_new: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            create_new,
        }
    }

    /// Read content from the file.
    ///
    /// # Errors
    ///
    /// This function will return an error if file doesn't exist or it fails to
    /// create a configuration file.
    pub fn read(self) -> Result<String, ReadContentError> {
        let mut file = self.open()?;
        let mut content = String::new();
        file.read_to_string(&mut content).context(FileSystemSnafu {
            when: "Reading configuration",
        })?;
        Ok(content)
    }

    fn open(self) -> Result<File, ReadContentError> {
        let err = match File::open(&self.path) {
            Ok(file) => return Ok(file),
            Err(err) => err,
        };

        match (err.kind(), self.create_new) {
            (ErrorKind::NotFound, true) => {
                tracing::info!(path = %self.path.display(), "Creating default configuration");
                create_default(&self.path)
            }
            (ErrorKind::NotFound, false) => NotFoundSnafu { path: self.path }.fail(),
            _ => Err(err).context(FileSystemSnafu {
                when: "Opening configuration file",
            }),
        }
    }
}

fn create_default(path: &Path) -> Result<File, ReadContentError> {
    let mut file = File::options()
        .read(true)
        .write(true)
        .create_new(true)
        .open(path)
        .context(FileSystemSnafu {
            when: "Creating configuration file",
        })?;

    file.write_all(DEFAULT_CONTENT.as_bytes())
        .context(FileSystemSnafu {
            when: "Writing default configuration content",
        })?;

    file.seek(SeekFrom::Start(0)).context(FileSystemSnafu {
        when: "Reseting file cursor position to start",
    })?;

    Ok(file)
}

/// An error type for reading content from the configuration file.
#[derive(Debug, Snafu, Clone)]
#[non_exhaustive]
pub enum ReadContentError {
    #[snafu(display("Could not open inexistent file {}", path.display()))]
    NotFound { path: PathBuf },
    #[snafu(display("Could not access configuration: {when}"))]
    FileSystem {
        when: String,
        #[snafu(source(from(IoError, Arc::new)))]
        source: Arc<IoError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use predicates::path as path_pred;

    #[test]
    fn read_configuration() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let file = tmp.child("config.toml");
        let content = "content for testing";
        file.write_str(content).unwrap();

        let reader = ContentReader::new(file.path(), false);
        assert_eq!(reader.read().unwrap(), content);
    }

    #[test]
    fn read_configuration_not_found() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let file = tmp.child("config.toml");
        file.assert(path_pred::missing());
        assert!(matches!(
            ContentReader::new(file.path(), false).read(),
            Err(ReadContentError::NotFound { .. })
        ));
        file.assert(path_pred::missing());
    }

    #[test]
    fn read_configuration_create_default() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let file = tmp.child("config.toml");
        file.assert(path_pred::missing());
        assert_eq!(
            ContentReader::new(file.path(), true).read().unwrap(),
            DEFAULT_CONTENT
        );
        file.assert(DEFAULT_CONTENT);
    }
}
