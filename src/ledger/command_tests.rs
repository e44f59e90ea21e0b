use anyhow::{bail, Result};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use super::commands::{AddExpense, ClearHistory, Command};
use super::expense::Expense;
use super::ledger::Ledger;
use super::{ExecutableCommand, ValidationError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_add_expense() -> Result<()> {
    let mut ledger = Ledger::new();
    Command::AddExpense(AddExpense::new(date(2024, 1, 1), "Coffee", dec!(5.00)))
        .execute(&mut ledger)?;

    assert_eq!(ledger.len(), 1);
    assert_eq!(
        ledger.expenses()[0],
        Expense::new(date(2024, 1, 1), "Coffee", dec!(5.00))?
    );

    Ok(())
}

#[test]
fn test_add_keeps_insertion_order() -> Result<()> {
    let mut ledger = Ledger::new();
    Command::AddExpense(AddExpense::new(date(2024, 2, 1), "Lunch", dec!(15.00)))
        .execute(&mut ledger)?;
    Command::AddExpense(AddExpense::new(date(2024, 1, 1), "Coffee", dec!(5.00)))
        .execute(&mut ledger)?;

    assert_eq!(ledger.expenses()[0].item(), "Lunch");
    assert_eq!(ledger.expenses()[1].item(), "Coffee");

    Ok(())
}

#[test]
fn test_add_duplicate_records() -> Result<()> {
    let mut ledger = Ledger::new();
    Command::AddExpense(AddExpense::new(date(2024, 1, 1), "Coffee", dec!(5.00)))
        .execute(&mut ledger)?;
    Command::AddExpense(AddExpense::new(date(2024, 1, 1), "Coffee", dec!(5.00)))
        .execute(&mut ledger)?;

    // Records have no identity, duplicates are kept.
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.expenses()[0], ledger.expenses()[1]);

    Ok(())
}

#[test]
fn test_add_blank_item() -> Result<()> {
    let mut ledger = Ledger::new();
    if let Err(err) =
        Command::AddExpense(AddExpense::new(date(2024, 1, 1), "", dec!(5.00))).execute(&mut ledger)
    {
        assert_eq!(err, ValidationError::BlankItem);
    } else {
        bail!("an empty item should be rejected");
    }

    assert_eq!(ledger.is_empty(), true);

    Ok(())
}

#[test]
fn test_add_whitespace_item() -> Result<()> {
    let mut ledger = Ledger::new();
    if let Err(err) = Command::AddExpense(AddExpense::new(date(2024, 1, 1), "  \t ", dec!(5.00)))
        .execute(&mut ledger)
    {
        assert_eq!(err, ValidationError::BlankItem);
    } else {
        bail!("a whitespace-only item should be rejected");
    }

    assert_eq!(ledger.is_empty(), true);

    Ok(())
}

#[test]
fn test_add_negative_amount() -> Result<()> {
    let mut ledger = Ledger::new();
    if let Err(err) = Command::AddExpense(AddExpense::new(date(2024, 1, 1), "Coffee", dec!(-0.01)))
        .execute(&mut ledger)
    {
        assert_eq!(err, ValidationError::NegativeAmount);
    } else {
        bail!("a negative amount should be rejected");
    }

    assert_eq!(ledger.is_empty(), true);

    Ok(())
}

#[test]
fn test_add_zero_amount() -> Result<()> {
    let mut ledger = Ledger::new();
    Command::AddExpense(AddExpense::new(date(2024, 1, 1), "Freebie", dec!(0)))
        .execute(&mut ledger)?;

    assert_eq!(ledger.len(), 1);

    Ok(())
}

#[test]
fn test_item_kept_verbatim() -> Result<()> {
    let mut ledger = Ledger::new();
    Command::AddExpense(AddExpense::new(date(2024, 1, 1), " Coffee ", dec!(5.00)))
        .execute(&mut ledger)?;

    assert_eq!(ledger.expenses()[0].item(), " Coffee ");

    Ok(())
}

#[test]
fn test_clear_history() -> Result<()> {
    let mut ledger = Ledger::new();
    Command::AddExpense(AddExpense::new(date(2024, 1, 1), "Coffee", dec!(5.00)))
        .execute(&mut ledger)?;
    Command::AddExpense(AddExpense::new(date(2024, 1, 2), "Lunch", dec!(15.00)))
        .execute(&mut ledger)?;

    Command::ClearHistory(ClearHistory::new()).execute(&mut ledger)?;
    assert_eq!(ledger.is_empty(), true);

    // Clearing an already empty ledger is a no-op.
    Command::ClearHistory(ClearHistory::new()).execute(&mut ledger)?;
    assert_eq!(ledger.is_empty(), true);

    Ok(())
}
