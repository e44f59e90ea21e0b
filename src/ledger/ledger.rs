use getset::Getters;

use super::expense::Expense;

#[derive(Debug, Default, Clone, PartialEq, Getters)]
pub struct Ledger {
    #[getset(get = "pub")]
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger {
            expenses: Vec::new(),
        }
    }

    pub(crate) fn from_expenses(expenses: Vec<Expense>) -> Ledger {
        Ledger { expenses }
    }

    pub(crate) fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    pub(crate) fn clear_all(&mut self) {
        self.expenses.clear();
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
