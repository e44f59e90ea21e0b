use anyhow::Result;
use chrono::NaiveDate;
use enum_dispatch::enum_dispatch;
use rust_decimal::Decimal;

use super::expense::Expense;
use super::ledger::Ledger;
use super::{ExecutableCommand, ValidationError};

#[enum_dispatch(ExecutableCommand)]
pub enum Command {
    AddExpense,
    ClearHistory,
}

pub struct AddExpense {
    date: NaiveDate,
    item: String,
    amount: Decimal,
}

impl AddExpense {
    pub fn new(date: NaiveDate, item: impl Into<String>, amount: Decimal) -> AddExpense {
        AddExpense {
            date,
            item: item.into(),
            amount,
        }
    }
}

impl ExecutableCommand for AddExpense {
    /// A record that fails validation leaves the ledger untouched.
    fn execute(&self, ledger: &mut Ledger) -> Result<(), ValidationError> {
        let expense = Expense::new(self.date, self.item.clone(), self.amount)?;
        ledger.push(expense);

        Ok(())
    }
}

pub struct ClearHistory;

impl ClearHistory {
    pub fn new() -> ClearHistory {
        ClearHistory
    }
}

impl ExecutableCommand for ClearHistory {
    fn execute(&self, ledger: &mut Ledger) -> Result<(), ValidationError> {
        ledger.clear_all();

        Ok(())
    }
}
