// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use country_table_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> InfraResult<()> {
        let path = path.as_ref();
        let wrap = |source: std::io::Error| InfrastructureError::FileWrite { path: path.to_path_buf(), source };

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        // Temp file lives next to the target so the rename stays on one filesystem.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = File::create(&tmp).map_err(wrap)?;
        let mut w = BufWriter::new(file);
        w.write_all(data).map_err(wrap)?;
        w.flush().map_err(wrap)?;
        let _ = w.get_ref().sync_all();

        if let Err(source) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(wrap(source));
        }

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
