use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use giongo_core::error::OutputWriteError;

/// Line-oriented export file.
///
/// The file is created up front so a bad path fails before any work is done;
/// nothing is guaranteed on disk until [`DeckWriter::finish`] returns.
pub struct DeckWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    lines: usize,
}

impl DeckWriter {
    pub fn create(path: &Path) -> Result<Self, OutputWriteError> {
        let file = File::create(path).map_err(|source| OutputWriteError::Create {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            lines: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_line(&mut self, line: &str) -> Result<(), OutputWriteError> {
        writeln!(self.writer, "{line}").map_err(|source| self.write_error(source))?;
        self.lines += 1;
        Ok(())
    }

    /// Flush and close the file, returning the number of lines written
    pub fn finish(mut self) -> Result<usize, OutputWriteError> {
        self.writer
            .flush()
            .map_err(|source| self.write_error(source))?;
        self.writer
            .get_ref()
            .sync_all()
            .map_err(|source| self.write_error(source))?;
        Ok(self.lines)
    }

    fn write_error(&self, source: std::io::Error) -> OutputWriteError {
        OutputWriteError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
