use std::path::PathBuf;

use anyhow::Result;
use thiserror::Error;

use super::commands::Command;
use super::ledger::Ledger;
use super::{ExecutableCommand, ValidationError};
use crate::data::{self, DataError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Data(#[from] DataError),
}

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Store {
        Store { path: path.into() }
    }

    /// Reads the persisted ledger, or returns an empty one if the file
    /// does not exist yet.
    pub fn load(&self) -> Result<Ledger, DataError> {
        if !self.path.exists() {
            return Ok(Ledger::new());
        }

        data::read_csv(&self.path)
    }

    /// Executes the command against the ledger and mirrors the result back
    /// to disk. A rejected command leaves both ledger and file unchanged.
    pub fn apply(&self, ledger: &mut Ledger, command: Command) -> Result<(), StoreError> {
        command.execute(ledger)?;
        self.persist(ledger)?;

        Ok(())
    }

    pub fn persist(&self, ledger: &Ledger) -> Result<(), DataError> {
        data::write_csv(&self.path, ledger)
    }
}

impl Default for Store {
    fn default() -> Store {
        Store::new(data::DATA_FILE)
    }
}
