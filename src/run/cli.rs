use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::Path;

use crate::calc::{self, LoanInputs};
use crate::config::{self, Settings};
use crate::data::{self, Ledger};
use crate::ui::util::{format_amount, format_percent, format_whole};

pub(crate) fn as_cli(args: &[String], settings: &Settings) -> Result<()> {
    let rest = &args[2..];
    let result = match args[1].as_str() {
        "emi" | "e" => cli_emi(rest, settings),
        "budget" | "b" => cli_budget(rest, settings),
        "totals" | "t" => cli_totals(rest, settings),
        "expenses" | "x" => cli_expenses(rest, settings),
        "goals" | "g" => cli_goals(settings),
        "config" => cli_config(settings),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("finboard {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    };

    if let Err(ref e) = result {
        tracing::warn!(command = %args[1], error = %e, "cli command failed");
    }
    result
}

fn print_usage() {
    println!("FinBoard - personal finance dashboard and calculators");
    println!();
    println!("Usage: finboard [command]");
    println!();
    println!("Commands:");
    println!("  (none)                          Launch interactive TUI with demo data");
    println!("  emi <principal> <rate> <months> Monthly installment for a loan");
    println!("    --schedule                    Also print the repayment schedule");
    println!("    --offers                      Compare against configured lender offers");
    println!("  budget [file.csv]               Budget rollup (name,spent,limit)");
    println!("  totals [amount...]              Income, expense and net for signed amounts");
    println!("  expenses [file.csv]             Totals and spending by category");
    println!("                                  (date,description,category,amount)");
    println!("  goals                           Progress of the demo savings goals");
    println!("  config                          Show config file location and settings");
    println!("  --help, -h                      Show this help");
    println!("  --version, -V                   Show version");
}

fn cli_emi(args: &[String], settings: &Settings) -> Result<()> {
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();
    if positional.len() != 3 {
        anyhow::bail!(
            "Usage: finboard emi <principal> <annual rate %> <months> [--schedule] [--offers]"
        );
    }

    let principal = data::parse_decimal(positional[0]).context("Invalid principal")?;
    let rate = data::parse_decimal(positional[1].trim_end_matches('%'))
        .context("Invalid interest rate")?;
    let months: u32 = positional[2]
        .parse()
        .with_context(|| format!("Invalid number of months: {}", positional[2]))?;

    let inputs = LoanInputs::new(principal, rate, months);
    let result = calc::compute_emi(&inputs)?;
    let schedule = if args.iter().any(|a| a == "--schedule") {
        Some(calc::amortization_schedule(&inputs)?)
    } else {
        None
    };
    let symbol = settings.currency_symbol.as_str();

    println!(
        "Loan of {} at {rate}% p.a. over {months} months",
        format_whole(principal, symbol)
    );
    println!("{}", "─".repeat(40));
    println!("  Monthly EMI:     {}", format_whole(result.monthly_payment, symbol));
    println!("  Total Interest:  {}", format_whole(result.total_interest, symbol));
    println!("  Total Payment:   {}", format_whole(result.total_payment, symbol));

    if args.iter().any(|a| a == "--offers") {
        println!();
        println!("Offers:");
        for offer in &settings.loan.offers {
            let quote = calc::quote_at_rate(&inputs, offer.annual_rate_percent)?;
            println!(
                "  {:<24} {:>6}%  EMI {:>10}  saves {}/mo",
                format!("{} {}", offer.lender, offer.product),
                offer.annual_rate_percent,
                format_whole(quote.result.monthly_payment, symbol),
                format_whole(quote.monthly_saving, symbol)
            );
        }
    }

    if let Some(schedule) = schedule {
        println!();
        println!(
            "{:>4}  {:>14}  {:>14}  {:>14}  {:>16}",
            "#", "Payment", "Interest", "Principal", "Balance"
        );
        for row in schedule {
            println!(
                "{:>4}  {:>14}  {:>14}  {:>14}  {:>16}",
                row.month,
                format_amount(row.payment, symbol),
                format_amount(row.interest, symbol),
                format_amount(row.principal, symbol),
                format_amount(row.balance, symbol)
            );
        }
    }

    Ok(())
}

fn cli_budget(args: &[String], settings: &Settings) -> Result<()> {
    let budgets = match args.first() {
        Some(file) => data::load_budgets(Path::new(&super::shellexpand(file)))?,
        None => Ledger::demo().budgets,
    };

    let rollup = calc::compute_budget_rollup(&budgets)?;
    let symbol = settings.currency_symbol.as_str();

    println!(
        "Budget: {} of {} spent ({})",
        format_whole(rollup.total_spent, symbol),
        format_whole(rollup.total_limit, symbol),
        format_percent(rollup.used_percent)
    );
    println!("Remaining: {}", format_whole(rollup.remaining, symbol));
    println!("{}", "─".repeat(56));
    for usage in &rollup.categories {
        let over = if usage.is_over {
            format!("  over by {}", format_whole(usage.over_amount, symbol))
        } else {
            String::new()
        };
        println!(
            "  {:<20} {:>10} / {:<10} {:>5}{over}",
            usage.name,
            format_whole(usage.spent, symbol),
            format_whole(usage.limit, symbol),
            format_percent(usage.percent)
        );
    }
    Ok(())
}

fn cli_totals(args: &[String], settings: &Settings) -> Result<()> {
    let amounts = if args.is_empty() {
        Ledger::demo()
            .transactions
            .iter()
            .map(|t| t.amount)
            .collect()
    } else {
        let raw = args
            .iter()
            .map(|a| {
                a.parse::<f64>()
                    .with_context(|| format!("Invalid amount: {a}"))
            })
            .collect::<Result<Vec<f64>>>()?;
        calc::amounts_from_f64(&raw)?
    };

    print_totals(&amounts, settings)
}

fn print_totals(amounts: &[Decimal], settings: &Settings) -> Result<()> {
    let totals = calc::compute_totals(amounts)?;
    let symbol = settings.currency_symbol.as_str();
    println!("  Income:     {}", format_amount(totals.total_income, symbol));
    println!("  Expenses:   {}", format_amount(totals.total_expense, symbol));
    println!("  Net:        {}", format_amount(totals.net_savings, symbol));
    Ok(())
}

fn cli_expenses(args: &[String], settings: &Settings) -> Result<()> {
    let transactions = match args.first() {
        Some(file) => data::load_transactions(Path::new(&super::shellexpand(file)))?,
        None => Ledger::demo().transactions,
    };

    let amounts: Vec<Decimal> = transactions.iter().map(|t| t.amount).collect();
    println!("{} transactions", transactions.len());
    println!("{}", "─".repeat(40));
    print_totals(&amounts, settings)?;

    let spending = calc::spending_by_category(&transactions)?;
    if !spending.is_empty() {
        println!();
        println!("Spending by Category:");
        for (name, amount) in &spending {
            println!(
                "  {name:<24} {}",
                format_amount(*amount, &settings.currency_symbol)
            );
        }
    }
    Ok(())
}

fn cli_goals(settings: &Settings) -> Result<()> {
    let symbol = settings.currency_symbol.as_str();
    for goal in &Ledger::demo().goals {
        let progress = calc::goal_progress(goal)?;
        println!(
            "  {:<22} {:<10} {:>10} / {:<10} {:>5}",
            goal.title,
            goal.kind,
            format_whole(goal.current, symbol),
            format_whole(goal.target, symbol),
            format_percent(progress.percent)
        );
    }
    Ok(())
}

fn cli_config(settings: &Settings) -> Result<()> {
    let path = config::config_path()?;
    let state = if path.exists() {
        ""
    } else {
        " (not found, using defaults)"
    };
    println!("# {}{state}", path.display());
    print!("{}", config::to_toml(settings)?);
    Ok(())
}
