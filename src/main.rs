use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::env;
use std::io::{self, Write};

use expenso::data;
use expenso::ledger::commands::{AddExpense, ClearHistory, Command};
use expenso::ledger::ledger::Ledger;
use expenso::ledger::store::Store;
use expenso::report;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let store = Store::default();
    let mut ledger = store.load()?;

    match args.get(1).map(String::as_str) {
        None | Some("summary") => {
            print_summary(&ledger, args.get(2..).unwrap_or(&[]))?;
        }
        Some("add") if args.len() == 5 => {
            let date: NaiveDate = args[2].parse()?;
            let amount: Decimal = args[4].parse()?;
            store.apply(
                &mut ledger,
                Command::AddExpense(AddExpense::new(date, args[3].as_str(), amount)),
            )?;
        }
        Some("clear") => {
            store.apply(&mut ledger, Command::ClearHistory(ClearHistory::new()))?;
        }
        Some("export") => {
            io::stdout().write_all(&data::export_csv(&ledger)?)?;
        }
        _ => {
            eprintln!(
                "Usage: expenso [summary [start] [end] | add <date> <item> <amount> | clear | export]"
            );
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_summary(ledger: &Ledger, range: &[String]) -> Result<()> {
    let (start, end) = match range {
        [start, end, ..] => (start.parse()?, end.parse()?),
        [day] => {
            // A single selected date collapses the range to that day.
            let day: NaiveDate = day.parse()?;
            (day, day)
        }
        [] => match report::date_bounds(ledger) {
            Some(bounds) => bounds,
            None => {
                println!("Add a few expenses to see summaries here.");
                return Ok(());
            }
        },
    };

    let filtered = report::filter_by_range(ledger, start, end);
    let stdout = io::stdout();

    println!("Expense History ({start} to {end})");
    data::write_history(stdout.lock(), &filtered)?;

    println!("\nTotal Spent: RM {}", report::total(&filtered).round_dp(2));

    println!("\nDaily Totals");
    data::write_daily(stdout.lock(), &report::daily_totals(&filtered))?;

    println!("\nMonthly Totals");
    data::write_monthly(stdout.lock(), &report::monthly_totals(&filtered))?;

    println!("\nTop {} Items", report::DEFAULT_TOP_ITEMS);
    data::write_top_items(
        stdout.lock(),
        &report::top_items(&filtered, report::DEFAULT_TOP_ITEMS),
    )?;

    Ok(())
}
