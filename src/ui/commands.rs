use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use super::app::{App, InputMode, PendingAction, Screen, TxnFilter};
use crate::data::{self, Ledger};
use crate::models::{GoalKind, Transaction};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Ledger) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit FinBoard", cmd_quit, r);
    register_command!("quit", "Quit FinBoard", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("e", "Go to Expenses", cmd_expenses, r);
    register_command!("expenses", "Go to Expenses", cmd_expenses, r);
    register_command!("b", "Go to Budget", cmd_budget, r);
    register_command!("budget", "Go to Budget", cmd_budget, r);
    register_command!("g", "Go to Goals", cmd_goals, r);
    register_command!("goals", "Go to Goals", cmd_goals, r);
    register_command!("l", "Go to Loan planner", cmd_loan, r);
    register_command!("loan", "Go to Loan planner", cmd_loan, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add-budget",
        "Add budget category (e.g. :add-budget Travel 8000)",
        cmd_add_budget,
        r
    );
    register_command!(
        "spend",
        "Record spending (e.g. :spend Food & Dining 450)",
        cmd_spend,
        r
    );
    register_command!(
        "delete-budget",
        "Delete selected budget category",
        cmd_delete_budget,
        r
    );
    register_command!(
        "add-goal",
        "Add goal (e.g. :add-goal saving 50000 New Laptop)",
        cmd_add_goal,
        r
    );
    register_command!(
        "contribute",
        "Add money to selected goal (e.g. :contribute 2000)",
        cmd_contribute,
        r
    );
    register_command!("delete-goal", "Delete selected goal", cmd_delete_goal, r);
    register_command!(
        "add-txn",
        "Add transaction (e.g. :add-txn 2024-11-29 Food -320 Lunch)",
        cmd_add_txn,
        r
    );
    register_command!("pay", "Mark selected bill as paid", cmd_pay, r);
    register_command!(
        "amount",
        "Set loan amount (e.g. :amount 750000)",
        cmd_amount,
        r
    );
    register_command!(
        "tenure",
        "Set loan tenure in months (e.g. :tenure 36)",
        cmd_tenure,
        r
    );
    register_command!(
        "rate",
        "Set loan interest rate (e.g. :rate 9.75)",
        cmd_rate,
        r
    );
    register_command!(
        "filter",
        "Filter expenses (all, income, expense)",
        cmd_filter,
        r
    );
    register_command!(
        "import-budgets",
        "Load budget categories from CSV (name,spent,limit)",
        cmd_import_budgets,
        r
    );
    register_command!(
        "import-txns",
        "Load transactions from CSV (date,description,category,amount)",
        cmd_import_txns,
        r
    );

    r
});

/// Run one `:` command line. Failures end up in the status bar, never
/// bubble out of the event loop.
pub(crate) fn handle_command(input: &str, app: &mut App, ledger: &mut Ledger) {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if cmd_name.is_empty() {
        return;
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        tracing::debug!(command = cmd_name, args, "running command");
        if let Err(e) = (cmd.run)(args, app, ledger) {
            tracing::warn!(command = cmd_name, error = %e, "command failed");
            app.set_status(format!("Error: {e}"));
        }
        app.clamp_cursors(ledger);
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Split `"<name words> <amount>"` on the last space.
fn split_trailing_amount(args: &str) -> Option<(&str, Decimal)> {
    let (name, amount) = args.rsplit_once(' ')?;
    let amount = data::parse_decimal(amount).ok()?;
    let name = name.trim();
    (!name.is_empty()).then_some((name, amount))
}

// ── Navigation ───────────────────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_expenses(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Expenses;
    Ok(())
}

fn cmd_budget(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Budget;
    Ok(())
}

fn cmd_goals(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Goals;
    Ok(())
}

fn cmd_loan(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Loan;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

// ── Budget ───────────────────────────────────────────────────

fn cmd_add_budget(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let Some((name, limit)) = split_trailing_amount(args) else {
        app.set_status("Usage: :add-budget <name> <limit>");
        return Ok(());
    };

    ledger.add_budget(name, limit)?;
    app.budget_index = ledger.budgets.len().saturating_sub(1);
    app.screen = Screen::Budget;
    app.set_status(format!(
        "Added budget: {name} ({})",
        crate::ui::util::format_whole(limit, app.currency())
    ));
    Ok(())
}

fn cmd_spend(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let Some((name, amount)) = split_trailing_amount(args) else {
        app.set_status("Usage: :spend <category> <amount>");
        return Ok(());
    };

    let spent = ledger.spend(name, amount)?;
    app.set_status(format!(
        "{name}: {} spent",
        crate::ui::util::format_whole(spent, app.currency())
    ));
    Ok(())
}

fn cmd_delete_budget(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let Some(budget) = ledger.budgets.get(app.budget_index) else {
        app.set_status("No budgets to delete");
        return Ok(());
    };

    let name = budget.name.clone();
    app.confirm_message = format!("Delete budget '{name}'?");
    app.pending_action = Some(PendingAction::DeleteBudget {
        index: app.budget_index,
        name,
    });
    app.input_mode = InputMode::Confirm;
    Ok(())
}

fn cmd_import_budgets(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :import-budgets <file.csv>");
        return Ok(());
    }

    let path = crate::run::shellexpand(args);
    let budgets = data::load_budgets(Path::new(&path))?;
    let count = budgets.len();
    ledger.budgets = budgets;
    app.budget_index = 0;
    app.screen = Screen::Budget;
    app.set_status(format!("Loaded {count} budget categories from {path}"));
    Ok(())
}

// ── Goals ────────────────────────────────────────────────────

fn cmd_add_goal(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let mut parts = args.splitn(3, ' ');
    let (Some(kind), Some(target), Some(title)) = (parts.next(), parts.next(), parts.next())
    else {
        app.set_status("Usage: :add-goal <saving|challenge> <target> <title>");
        return Ok(());
    };

    let Some(kind) = GoalKind::parse(kind) else {
        let kinds: Vec<&str> = GoalKind::all().iter().map(|k| k.as_str()).collect();
        app.set_status(format!("Unknown goal type. Use one of: {}", kinds.join(", ")));
        return Ok(());
    };
    let target = data::parse_decimal(target)?;

    ledger.add_goal(title, target, kind)?;
    app.goal_index = ledger.goals.len().saturating_sub(1);
    app.screen = Screen::Goals;
    app.set_status(format!("Added {kind} goal: {}", title.trim()));
    Ok(())
}

fn cmd_contribute(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :contribute <amount>");
        return Ok(());
    }

    let amount = data::parse_decimal(args)?;
    let saved = ledger.contribute(app.goal_index, amount)?;
    let goal = &ledger.goals[app.goal_index];
    let progress = crate::calc::goal_progress(goal)?;
    let mut msg = format!(
        "{}: {} of {}",
        goal.title,
        crate::ui::util::format_whole(saved, app.currency()),
        crate::ui::util::format_whole(goal.target, app.currency())
    );
    if progress.is_complete {
        msg.push_str(" (complete!)");
    }
    app.set_status(msg);
    Ok(())
}

fn cmd_delete_goal(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let Some(goal) = ledger.goals.get(app.goal_index) else {
        app.set_status("No goals to delete");
        return Ok(());
    };

    let title = goal.title.clone();
    app.confirm_message = format!("Delete goal '{title}'?");
    app.pending_action = Some(PendingAction::DeleteGoal {
        index: app.goal_index,
        title,
    });
    app.input_mode = InputMode::Confirm;
    Ok(())
}

// ── Expenses & bills ─────────────────────────────────────────

fn cmd_add_txn(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let parts: Vec<&str> = args.splitn(4, ' ').collect();
    if parts.len() < 4 {
        app.set_status("Usage: :add-txn <YYYY-MM-DD> <category> <amount> <description>");
        return Ok(());
    }

    let date = data::parse_date(parts[0])?;
    let amount = data::parse_decimal(parts[2])?;
    if amount.is_zero() {
        anyhow::bail!("Transaction amount cannot be zero");
    }
    let description = parts[3].trim().to_string();

    ledger.add_transaction(Transaction::new(
        date,
        description.clone(),
        parts[1].to_string(),
        amount,
    ));
    app.set_status(format!(
        "Added transaction: {description} {}",
        crate::ui::util::format_amount(amount, app.currency())
    ));
    Ok(())
}

fn cmd_pay(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let name = ledger
        .bills
        .get(app.bill_index)
        .map(|b| b.name.clone())
        .ok_or_else(|| anyhow::anyhow!("No bill selected"))?;

    match ledger.pay_bill(app.bill_index) {
        Some(true) => app.set_status(format!("Paid: {name}")),
        _ => app.set_status(format!("{name} is already paid")),
    }
    Ok(())
}

fn cmd_filter(args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    let Some(filter) = TxnFilter::parse(args) else {
        app.set_status("Usage: :filter <all|income|expense>");
        return Ok(());
    };

    app.txn_filter = filter;
    app.transaction_index = 0;
    app.transaction_scroll = 0;
    app.screen = Screen::Expenses;
    app.set_status(format!("Showing: {filter}"));
    Ok(())
}

fn cmd_import_txns(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :import-txns <file.csv>");
        return Ok(());
    }

    let path = crate::run::shellexpand(args);
    let transactions = data::load_transactions(Path::new(&path))?;
    let count = transactions.len();
    ledger.replace_transactions(transactions);
    app.transaction_index = 0;
    app.transaction_scroll = 0;
    app.screen = Screen::Expenses;
    app.set_status(format!("Loaded {count} transactions from {path}"));
    Ok(())
}

// ── Loan planner ─────────────────────────────────────────────

fn cmd_amount(args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :amount <principal>");
        return Ok(());
    }

    let amount = data::parse_decimal(args)?;
    app.loan.set_amount(amount);
    if app.loan.amount != amount {
        let (min, max) = app.loan.amount_bounds();
        app.set_status(format!(
            "Amount limited to {} - {}",
            crate::ui::util::format_whole(min, app.currency()),
            crate::ui::util::format_whole(max, app.currency())
        ));
    }
    app.screen = Screen::Loan;
    Ok(())
}

fn cmd_tenure(args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    let Ok(months) = args.parse::<u32>() else {
        app.set_status("Usage: :tenure <months>");
        return Ok(());
    };

    app.loan.set_tenure(months);
    if app.loan.tenure != months {
        let (min, max) = app.loan.tenure_bounds();
        app.set_status(format!("Tenure limited to {min} - {max} months"));
    }
    app.screen = Screen::Loan;
    Ok(())
}

fn cmd_rate(args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :rate <annual percent>");
        return Ok(());
    }

    let rate = data::parse_decimal(args.trim_end_matches('%'))?;
    if rate < Decimal::ZERO {
        anyhow::bail!("Interest rate cannot be negative");
    }
    app.loan.rate = rate;
    app.screen = Screen::Loan;
    app.set_status(format!("Interest rate: {rate}% p.a."));
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
