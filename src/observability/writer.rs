//! Append-only JSON-lines file with a single rotated backup.
//!
//! When the file grows past the size cap it is renamed to
//! `<stem>.<UTC timestamp>.jsonl` and a fresh file is started. Only the newest
//! backup is kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default size cap before rotation (5 MB).
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug)]
pub struct RotatingWriter {
    path: PathBuf,
    max_bytes: u64,
    file: Option<File>,
}

impl RotatingWriter {
    /// The file is opened lazily on the first write.
    pub const fn new(path: PathBuf, max_bytes: u64) -> Self {
        Self {
            path,
            max_bytes,
            file: None,
        }
    }

    /// Appends one line, rotating first if the file is over the cap.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        if fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes) {
            self.file = None;
            self.rotate()?;
        }

        if self.file.is_none() {
            self.file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = self.file.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "span file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let stem = file_stem(&self.path)?;
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));

        for stale in backups(parent, &stem)? {
            let _ = fs::remove_file(stale);
        }

        let backup = parent.join(format!(
            "{stem}.{}.jsonl",
            Utc::now().format("%Y%m%dT%H%M%S%.3fZ")
        ));
        fs::rename(&self.path, backup)
    }
}

fn file_stem(path: &Path) -> io::Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "span file has no name"))
}

/// Existing backups of `<stem>.jsonl` in `dir`.
fn backups(dir: &Path, stem: &str) -> io::Result<Vec<PathBuf>> {
    let prefix = format!("{stem}.");
    let current = format!("{stem}.jsonl");
    Ok(fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(&prefix) && name.ends_with(".jsonl") && name != current)
        })
        .collect())
}
