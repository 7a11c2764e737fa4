//! Plain-text export of a [`Person`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use syntaxlab_core::{Error, Result};

use crate::person::Person;

impl Person {
    /// Write `Name:`, `Age:` and `Hobbies:` lines to `path`.
    ///
    /// Failures are logged at error level and returned. The writer is
    /// dropped on every path, so the file handle never outlives the call.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match self.write_lines(path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "person saved");
                Ok(())
            }
            Err(source) => {
                tracing::error!(
                    path = %path.display(),
                    error = %source,
                    "error writing to file"
                );
                Err(Error::io(path, source))
            }
        }
    }

    fn write_lines(&self, path: &Path) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "Name: {}", self.name())?;
        writeln!(writer, "Age: {}", self.age())?;
        write!(writer, "Hobbies: {}", self.hobbies().join(", "))?;
        writer.flush()
    }
}
