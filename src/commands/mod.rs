pub mod check;
pub mod completions;
pub mod list;
pub mod render;
pub mod update;

use crate::history::io::JsonHistoryStore;
use std::path::PathBuf;

/// The two artifacts every command works on.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub history: PathBuf,
    pub readme: PathBuf,
}

impl Workspace {
    pub fn new(history: impl Into<PathBuf>, readme: impl Into<PathBuf>) -> Self {
        Self {
            history: history.into(),
            readme: readme.into(),
        }
    }

    pub fn store(&self) -> JsonHistoryStore {
        JsonHistoryStore::new(&self.history)
    }
}
