use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::engine::Engine;

/// Storage backend selection: one statically-typed variant per backend,
/// chosen by the `backend` tag. Fields a backend does not declare do
/// not exist for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Durable store: WAL file under `data_dir`.
    Wal { data_dir: PathBuf },
    /// Volatile in-process store.
    Memory,
}

impl StoreConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn from_json_file(path: &Path) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text).map_err(io::Error::other)
    }

    /// Open the configured backend. The WAL backend must be opened
    /// inside a Tokio runtime (it spawns the group-commit writer).
    pub fn open(&self) -> io::Result<Engine> {
        match self {
            StoreConfig::Wal { data_dir } => {
                std::fs::create_dir_all(data_dir)?;
                let engine = Engine::open(&data_dir.join("hotels.wal"))?;
                tracing::debug!(data_dir = %data_dir.display(), "opened wal store");
                Ok(engine)
            }
            StoreConfig::Memory => Ok(Engine::ephemeral()),
        }
    }
}
