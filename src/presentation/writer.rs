use std::{
    io::{self, BufWriter, Stdout, Write},
    path::{Path, PathBuf},
};

use country_table_infra::persistence::FileWriter;
use country_table_shared_kernel::Result;

/// Sink for rendered output: buffered stdout, or a file replaced atomically on [`finish`](Self::finish).
pub enum OutputWriter {
    Stdout(BufWriter<Stdout>),
    File { path: PathBuf, buffer: Vec<u8> },
}

impl OutputWriter {
    pub fn create(output: Option<&Path>) -> Self {
        match output {
            Some(path) => Self::File { path: path.to_path_buf(), buffer: Vec::new() },
            None => Self::Stdout(BufWriter::new(io::stdout())),
        }
    }

    /// Flushes stdout or writes the buffered file.
    ///
    /// # Errors
    ///
    /// Fails when flushing stdout or writing the file fails.
    pub fn finish(self) -> Result<()> {
        match self {
            Self::Stdout(mut w) => w.flush()?,
            Self::File { path, buffer } => {
                FileWriter::atomic_write(&path, &buffer)?;
                tracing::info!(path = %path.display(), bytes = buffer.len(), "output written");
            }
        }
        Ok(())
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(buf),
            Self::File { buffer, .. } => buffer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File { .. } => Ok(()),
        }
    }
}
