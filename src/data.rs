use std::fs::{self, File};
use std::io;
use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ledger::expense::Expense;
use crate::ledger::ledger::Ledger;
use crate::report::{DailyTotal, ItemTotal, MonthlyTotal};

pub const DATA_FILE: &str = "expenses.csv";
pub const EXPORT_FILE_NAME: &str = "expenses.csv";

const HEADERS: [&str; 3] = ["Date", "Item", "Amount"];

#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed expense record: {0}")]
    Parse(#[source] csv::Error),
    #[error("{0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExpenseRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Item")]
    pub item: String,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        ExpenseRow {
            date: expense.date(),
            item: expense.item().clone(),
            amount: expense.amount(),
        }
    }
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Expense::from_stored(row.date, row.item, row.amount)
    }
}

#[derive(Debug, Serialize)]
pub struct DailyRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
    #[serde(rename = "Cumulative")]
    pub cumulative: Decimal,
}

impl From<&DailyTotal> for DailyRow {
    fn from(total: &DailyTotal) -> Self {
        DailyRow {
            date: total.date,
            amount: total.amount,
            cumulative: total.cumulative,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MonthlyRow {
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
}

impl From<&MonthlyTotal> for MonthlyRow {
    fn from(total: &MonthlyTotal) -> Self {
        MonthlyRow {
            month: total.month.clone(),
            amount: total.amount,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemRow {
    #[serde(rename = "Item")]
    pub item: String,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
}

impl From<&ItemTotal> for ItemRow {
    fn from(total: &ItemTotal) -> Self {
        ItemRow {
            item: total.item.clone(),
            amount: total.amount,
        }
    }
}

/// A malformed row fails the whole load, there is no partial result.
pub fn read_csv(path: &Path) -> Result<Ledger, DataError> {
    let file = File::open(path)?;
    let mut csv_reader = csv::Reader::from_reader(file);

    let mut expenses = Vec::new();
    for row in csv_reader.deserialize::<ExpenseRow>() {
        let row = row.map_err(DataError::Parse)?;
        expenses.push(row.into());
    }

    debug!(
        "loaded {} expense records from {}",
        expenses.len(),
        path.display()
    );

    Ok(Ledger::from_expenses(expenses))
}

pub fn write_csv(path: &Path, ledger: &Ledger) -> Result<(), DataError> {
    fs::write(path, export_csv(ledger)?)?;
    debug!(
        "persisted {} expense records to {}",
        ledger.len(),
        path.display()
    );

    Ok(())
}

pub fn export_csv(ledger: &Ledger) -> Result<Vec<u8>, DataError> {
    let mut buf = Vec::new();
    {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buf);

        // The header row is written even when the ledger is empty.
        csv_writer.write_record(HEADERS).map_err(DataError::Parse)?;
        for expense in ledger.expenses() {
            csv_writer
                .serialize(ExpenseRow::from(expense))
                .map_err(DataError::Parse)?;
        }
        csv_writer.flush()?;
    }

    Ok(buf)
}

pub fn write_history<W: io::Write>(writer: W, records: &[Expense]) -> Result<(), DataError> {
    write_rows(writer, records.iter().map(ExpenseRow::from))
}

pub fn write_daily<W: io::Write>(writer: W, totals: &[DailyTotal]) -> Result<(), DataError> {
    write_rows(writer, totals.iter().map(DailyRow::from))
}

pub fn write_monthly<W: io::Write>(writer: W, totals: &[MonthlyTotal]) -> Result<(), DataError> {
    write_rows(writer, totals.iter().map(MonthlyRow::from))
}

pub fn write_top_items<W: io::Write>(writer: W, totals: &[ItemTotal]) -> Result<(), DataError> {
    write_rows(writer, totals.iter().map(ItemRow::from))
}

fn write_rows<W, R>(writer: W, rows: impl IntoIterator<Item = R>) -> Result<(), DataError>
where
    W: io::Write,
    R: Serialize,
{
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    for row in rows {
        csv_writer.serialize(row).map_err(DataError::Parse)?;
    }
    csv_writer.flush()?;

    Ok(())
}
