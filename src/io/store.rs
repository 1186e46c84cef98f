use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::Task;

/// Storage key the task list is persisted under. The on-disk file is
/// `<key>.json` inside the data directory.
pub const STORAGE_KEY: &str = "planificador-diario-tareas";

/// Error type for store writes. Reads never fail; see [`Store::load`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize task list: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// File-backed task store: one fixed key, whole-list reads and writes.
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Store {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the persisted task list.
    pub fn path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", STORAGE_KEY))
    }

    /// Load the saved task list. A missing file is an empty list; an
    /// unreadable or malformed one is reported on stderr and treated the
    /// same way. Callers never see a load failure.
    pub fn load(&self) -> Vec<Task> {
        let path = self.path();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                eprintln!("warning: could not read {}: {}", path.display(), e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Task>>(&text) {
            Ok(tasks) => tasks,
            Err(e) => {
                eprintln!("warning: ignoring corrupt task list at {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored list with `tasks`. The whole list is written
    /// every time; there is no merging.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let path = self.path();
        fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::WriteError {
            path: self.data_dir.clone(),
            source: e,
        })?;
        let content = serde_json::to_string_pretty(tasks)?;
        atomic_write(&path, content.as_bytes())
            .map_err(|e| StoreError::WriteError { path, source: e })?;
        Ok(())
    }
}

/// Resolve the data directory: explicit override, else `~/.dayplan`.
pub fn resolve_data_dir(explicit: Option<&str>) -> PathBuf {
    match explicit {
        Some(dir) => PathBuf::from(dir),
        None => std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dayplan"),
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
