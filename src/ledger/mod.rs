use anyhow::Result;
use enum_dispatch::enum_dispatch;
use thiserror::Error;

pub mod commands;
pub mod expense;
pub mod ledger;
pub mod store;

use commands::{AddExpense, ClearHistory, Command};

#[cfg(test)]
mod command_tests;

#[derive(Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("item must not be blank")]
    BlankItem,
    #[error("amount must not be negative")]
    NegativeAmount,
}

#[enum_dispatch]
pub trait ExecutableCommand {
    fn execute(&self, ledger: &mut ledger::Ledger) -> Result<(), ValidationError>;
}
