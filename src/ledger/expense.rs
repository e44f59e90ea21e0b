use chrono::NaiveDate;
use getset::{CopyGetters, Getters};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::ValidationError;

#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Expense {
    #[getset(get_copy = "pub")]
    date: NaiveDate,
    #[getset(get = "pub")]
    item: String,
    #[getset(get_copy = "pub")]
    amount: Decimal,
}

impl Expense {
    /// The item text is kept verbatim; trimming applies only to the blank check.
    pub fn new(
        date: NaiveDate,
        item: impl Into<String>,
        amount: Decimal,
    ) -> Result<Expense, ValidationError> {
        let item = item.into();
        if item.trim().is_empty() {
            return Err(ValidationError::BlankItem);
        }

        if amount < dec!(0) {
            return Err(ValidationError::NegativeAmount);
        }

        Ok(Expense { date, item, amount })
    }

    // Rows already at rest are not re-validated.
    pub(crate) fn from_stored(date: NaiveDate, item: String, amount: Decimal) -> Expense {
        Expense { date, item, amount }
    }
}
