use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::store::TaskStore;
use crate::model::task::Task;

/// Error type for reading and writing the task file
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Load the task store from `path`.
///
/// A missing file is a fresh start, not an error. Tasks are split into the
/// pending and done lists by their `is_done` flag, so the order of records in
/// the file only matters within each list.
pub fn load_store(path: &Path) -> Result<TaskStore, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("no task file at {}, starting empty", path.display());
            return Ok(TaskStore::new());
        }
        Err(e) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    let store = TaskStore::from_tasks(tasks);
    log::info!(
        "loaded {} pending and {} done tasks from {}",
        store.pending().len(),
        store.done().len(),
        path.display()
    );
    Ok(store)
}

/// Write every task to `path` as one JSON array, pending tasks first.
/// The previous file is replaced in full.
pub fn save_store(path: &Path, store: &TaskStore) -> Result<(), StoreError> {
    let tasks: Vec<&Task> = store.tasks().collect();
    let content = serde_json::to_string(&tasks)?;
    atomic_write(path, content.as_bytes()).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::info!("saved {} tasks to {}", tasks.len(), path.display());
    Ok(())
}

/// Write `content` to `path` through a temp file in the same directory,
/// renamed over the target once fully written.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
