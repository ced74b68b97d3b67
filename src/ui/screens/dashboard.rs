use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{panel, render_message};
use crate::calc;
use crate::data::Ledger;
use crate::models::BillStatus;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_percent, format_whole, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(8),    // Chart + bills
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app, ledger);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_spending_chart(f, lower[0], ledger);
    render_bills(f, lower[1], app, ledger);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let totals = match ledger.totals() {
        Ok(t) => t,
        Err(e) => {
            render_message(f, area, "Overview", &[&e.to_string()]);
            return;
        }
    };

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let symbol = app.currency();
    let income_count = ledger.transactions.iter().filter(|t| t.is_income()).count();
    let expense_count = ledger.transactions.iter().filter(|t| t.is_expense()).count();

    render_card(
        f,
        cards[0],
        "Income",
        format_whole(totals.total_income, symbol),
        theme::GREEN,
        format!("{income_count} txns"),
    );
    render_card(
        f,
        cards[1],
        "Expenses",
        format_whole(totals.total_expense, symbol),
        theme::RED,
        format!("{expense_count} txns"),
    );
    render_card(
        f,
        cards[2],
        "Net Savings",
        format_whole(totals.net_savings, symbol),
        theme::amount_color(totals.net_savings),
        String::new(),
    );

    // An empty or invalid budget list just leaves the card blank.
    let (used, color, sub) = match calc::compute_budget_rollup(&ledger.budgets) {
        Ok(rollup) => (
            format_percent(rollup.used_percent),
            theme::usage_color(rollup.used_percent, &app.settings.budget),
            format!("{} left", format_whole(rollup.remaining, symbol)),
        ),
        Err(_) => ("-".to_string(), theme::TEXT_DIM, String::new()),
    };
    render_card(f, cards[3], "Budget Used", used, color, sub);
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: Color,
    subtitle: String,
) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(panel(title));

    f.render_widget(text, area);
}

fn render_spending_chart(f: &mut Frame, area: Rect, ledger: &Ledger) {
    let spending = match calc::spending_by_category(&ledger.transactions) {
        Ok(s) if !s.is_empty() => s,
        Ok(_) => {
            render_message(
                f,
                area,
                "Spending by Category",
                &["No expenses yet", "Add one with :add-txn"],
            );
            return;
        }
        Err(e) => {
            render_message(f, area, "Spending by Category", &[&e.to_string()]);
            return;
        }
    };

    let bars: Vec<Bar> = spending
        .iter()
        .take(8)
        .map(|(name, amt)| {
            Bar::default()
                .value(amt.round().to_u64().unwrap_or(0))
                .label(Line::from(truncate(name, 10)))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Spending by Category"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_bills(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    if ledger.bills.is_empty() {
        render_message(f, area, "Upcoming Bills", &["Nothing due"]);
        return;
    }

    let symbol = app.currency();
    let items: Vec<ListItem> = ledger
        .bills
        .iter()
        .enumerate()
        .map(|(i, bill)| {
            let style = theme::row_style(i, app.bill_index);
            let status_color = match bill.status {
                BillStatus::Due => theme::RED,
                BillStatus::Upcoming => theme::YELLOW,
                BillStatus::Paid => theme::GREEN,
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<14}", truncate(&bill.name, 13)), style),
                Span::styled(
                    format!("{:>9} ", format_whole(bill.amount, symbol)),
                    Style::default().fg(theme::TEXT),
                ),
                Span::styled(
                    format!("{:<10}", truncate(&bill.due, 10)),
                    theme::dim_style(),
                ),
                Span::styled(
                    bill.status.to_string(),
                    Style::default()
                        .fg(status_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let unpaid: Decimal = ledger
        .bills
        .iter()
        .filter(|b| !b.is_paid())
        .map(|b| b.amount)
        .sum();
    let title = format!("Upcoming Bills ({} unpaid)", format_whole(unpaid, symbol));

    f.render_widget(List::new(items).block(panel(&title)), area);
}
