use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::{panel, render_message};
use crate::data::Ledger;
use crate::ui::app::{App, TxnFilter};
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_filter_bar(f, chunks[0], app);
    render_table(f, chunks[1], app, ledger);
}

fn render_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let spans: Vec<Span> = [TxnFilter::All, TxnFilter::Income, TxnFilter::Expense]
        .iter()
        .flat_map(|filter| {
            let style = if *filter == app.txn_filter {
                Style::default()
                    .fg(theme::HEADER_BG)
                    .bg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::dim_style()
            };
            [Span::styled(format!(" {filter} "), style), Span::raw("  ")]
        })
        .collect();

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(panel("Filter (:filter)")),
        area,
    );
}

fn render_table(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let transactions = app.filtered_transactions(ledger);
    if transactions.is_empty() {
        render_message(
            f,
            area,
            "Transactions (0)",
            &[
                "No transactions to show",
                "Add one with :add-txn or load a CSV with :import-txns",
            ],
        );
        return;
    }

    let header_cells = ["Date", "Description", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let symbol = app.currency();
    let rows: Vec<Row> = transactions
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let sign = if txn.is_income() { "+" } else { "-" };
            let amount_str = format!("{sign}{}", format_amount(txn.abs_amount(), symbol));

            Row::new(vec![
                Cell::from(txn.date.format("%d %b %Y").to_string()),
                Cell::from(truncate(&txn.description, 40)),
                Cell::from(truncate(&txn.category, 18)),
                Cell::from(Span::styled(
                    amount_str,
                    Style::default().fg(theme::amount_color(txn.amount)),
                )),
            ])
            .style(theme::row_style(i, app.transaction_index))
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(18),
        Constraint::Length(14),
    ];

    let title = format!("Transactions ({})", transactions.len());
    let table = Table::new(rows, widths).header(header).block(panel(&title));

    f.render_widget(table, area);
}
