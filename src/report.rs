use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ledger::expense::Expense;
use crate::ledger::ledger::Ledger;

pub const DEFAULT_TOP_ITEMS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub cumulative: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    pub month: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemTotal {
    pub item: String,
    pub amount: Decimal,
}

/// Bounds are inclusive. An inverted range yields an empty result.
pub fn filter_by_range(ledger: &Ledger, start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
    if start > end {
        return Vec::new();
    }

    let mut filtered: Vec<Expense> = ledger
        .expenses()
        .iter()
        .filter(|expense| expense.date() >= start && expense.date() <= end)
        .cloned()
        .collect();

    // Stable sort, insertion order is kept within a date.
    filtered.sort_by_key(|expense| expense.date());

    filtered
}

/// Dates without records are omitted, gaps are not zero-filled.
pub fn daily_totals(records: &[Expense]) -> Vec<DailyTotal> {
    let mut by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for expense in records {
        *by_date.entry(expense.date()).or_insert(Decimal::ZERO) += expense.amount();
    }

    let mut cumulative = Decimal::ZERO;
    by_date
        .into_iter()
        .map(|(date, amount)| {
            cumulative += amount;
            DailyTotal {
                date,
                amount,
                cumulative,
            }
        })
        .collect()
}

pub fn monthly_totals(records: &[Expense]) -> Vec<MonthlyTotal> {
    let mut by_month: BTreeMap<String, Decimal> = BTreeMap::new();
    for expense in records {
        let month = expense.date().format("%Y-%m").to_string();
        *by_month.entry(month).or_insert(Decimal::ZERO) += expense.amount();
    }

    by_month
        .into_iter()
        .map(|(month, amount)| MonthlyTotal { month, amount })
        .collect()
}

/// Items are grouped by exact text. Ties keep the order in which items
/// first appear in the input.
pub fn top_items(records: &[Expense], n: usize) -> Vec<ItemTotal> {
    let mut first_seen: Vec<String> = Vec::new();
    let mut sums: HashMap<String, Decimal> = HashMap::new();
    for expense in records {
        if !sums.contains_key(expense.item()) {
            first_seen.push(expense.item().clone());
        }
        *sums.entry(expense.item().clone()).or_insert(Decimal::ZERO) += expense.amount();
    }

    let mut totals: Vec<ItemTotal> = first_seen
        .into_iter()
        .map(|item| {
            let amount = sums[&item];
            ItemTotal { item, amount }
        })
        .collect();

    totals.sort_by(|a, b| b.amount.cmp(&a.amount));
    totals.truncate(n);

    totals
}

pub fn total(records: &[Expense]) -> Decimal {
    records.iter().map(Expense::amount).sum()
}

/// Earliest and latest record date, `None` for an empty ledger.
pub fn date_bounds(ledger: &Ledger) -> Option<(NaiveDate, NaiveDate)> {
    let start = ledger.expenses().iter().map(Expense::date).min()?;
    let end = ledger.expenses().iter().map(Expense::date).max()?;

    Some((start, end))
}
