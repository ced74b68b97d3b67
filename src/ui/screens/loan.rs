use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Gauge, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{panel, render_message};
use crate::calc::{self, LoanResult};
use crate::ui::app::{App, LoanField};
use crate::ui::theme;
use crate::ui::util::{format_amount, format_whole};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Amount slider
            Constraint::Length(3), // Tenure slider
            Constraint::Length(7), // Result
            Constraint::Min(4),    // Offers
        ])
        .split(columns[0]);

    render_sliders(f, left[0], left[1], app);

    match calc::compute_emi(&app.loan.inputs()) {
        Ok(result) => {
            render_result(f, left[2], app, &result);
            render_offers(f, left[3], app);
            render_schedule(f, columns[1], app);
        }
        Err(e) => {
            render_message(f, left[2], "Monthly EMI", &[&e.to_string()]);
        }
    }
}

fn slider_block(title: String, focused: bool) -> ratatui::widgets::Block<'static> {
    let block = panel(&title);
    if focused {
        block.border_style(Style::default().fg(theme::ACCENT))
    } else {
        block
    }
}

fn render_sliders(f: &mut Frame, amount_area: Rect, tenure_area: Rect, app: &App) {
    let symbol = app.currency();
    let loan = &app.loan;

    let (min, max) = loan.amount_bounds();
    let amount = Gauge::default()
        .block(slider_block(
            format!(
                "Loan Amount ({} - {})",
                format_whole(min, symbol),
                format_whole(max, symbol)
            ),
            loan.field == LoanField::Amount,
        ))
        .gauge_style(Style::default().fg(theme::ACCENT).bg(theme::SURFACE))
        .ratio(slider_ratio(loan.amount - min, max - min))
        .label(Span::styled(
            format_whole(loan.amount, symbol),
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(amount, amount_area);

    let (min, max) = loan.tenure_bounds();
    let tenure = Gauge::default()
        .block(slider_block(
            format!("Tenure ({min} - {max} months) @ {}% p.a.", loan.rate),
            loan.field == LoanField::Tenure,
        ))
        .gauge_style(Style::default().fg(theme::PEACH).bg(theme::SURFACE))
        .ratio(slider_ratio(
            Decimal::from(loan.tenure.saturating_sub(min)),
            Decimal::from(max.saturating_sub(min)),
        ))
        .label(Span::styled(
            format!("{} months", loan.tenure),
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(tenure, tenure_area);
}

fn slider_ratio(offset: Decimal, span: Decimal) -> f64 {
    if span <= Decimal::ZERO {
        return 1.0;
    }
    (offset / span).to_f64().unwrap_or(0.0).clamp(0.0, 1.0)
}

fn render_result(f: &mut Frame, area: Rect, app: &App, result: &LoanResult) {
    let symbol = app.currency();
    let label = |text: &'static str| Span::styled(format!("{text:<16}"), theme::dim_style());

    let text = Paragraph::new(vec![
        Line::from(vec![
            label("Monthly EMI"),
            Span::styled(
                format_whole(result.monthly_payment, symbol),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            label("Principal"),
            Span::styled(format_whole(app.loan.amount, symbol), theme::normal_style()),
        ]),
        Line::from(vec![
            label("Total Interest"),
            Span::styled(
                format_whole(result.total_interest, symbol),
                Style::default().fg(theme::PEACH),
            ),
        ]),
        Line::from(vec![
            label("Total Payment"),
            Span::styled(format_whole(result.total_payment, symbol), theme::normal_style()),
        ]),
    ])
    .block(panel("Monthly EMI"));
    f.render_widget(text, area);
}

fn render_offers(f: &mut Frame, area: Rect, app: &App) {
    let offers = app.loan.offers();
    if offers.is_empty() {
        render_message(f, area, "Offers", &["No lender offers configured"]);
        return;
    }

    let symbol = app.currency();
    let inputs = app.loan.inputs();
    let rows: Vec<Row> = offers
        .iter()
        .map(|offer| {
            let (emi, saving) = match calc::quote_at_rate(&inputs, offer.annual_rate_percent) {
                Ok(quote) => {
                    let color = theme::amount_color(quote.monthly_saving);
                    (
                        format_whole(quote.result.monthly_payment, symbol),
                        Span::styled(
                            format_whole(quote.monthly_saving, symbol),
                            Style::default().fg(color),
                        ),
                    )
                }
                Err(e) => (
                    String::from("-"),
                    Span::styled(e.to_string(), theme::dim_style()),
                ),
            };
            Row::new(vec![
                Cell::from(format!("{} {}", offer.lender, offer.product)),
                Cell::from(format!("{}%", offer.annual_rate_percent)),
                Cell::from(emi),
                Cell::from(saving),
            ])
        })
        .collect();

    let header = Row::new(
        ["Offer", "Rate", "EMI", "Saves/mo"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );
    let widths = [
        Constraint::Min(18),
        Constraint::Length(7),
        Constraint::Length(10),
        Constraint::Length(10),
    ];
    f.render_widget(
        Table::new(rows, widths).header(header).block(panel("Offers")),
        area,
    );
}

fn render_schedule(f: &mut Frame, area: Rect, app: &App) {
    let schedule = match calc::amortization_schedule(&app.loan.inputs()) {
        Ok(s) => s,
        Err(e) => {
            render_message(f, area, "Repayment Schedule", &[&e.to_string()]);
            return;
        }
    };

    let symbol = app.currency();
    let rows: Vec<Row> = schedule
        .iter()
        .take(area.height.saturating_sub(3) as usize)
        .enumerate()
        .map(|(i, row)| {
            Row::new(vec![
                Cell::from(row.month.to_string()),
                Cell::from(format_amount(row.payment, symbol)),
                Cell::from(format_amount(row.interest, symbol)),
                Cell::from(format_amount(row.principal, symbol)),
                Cell::from(format_amount(row.balance, symbol)),
            ])
            .style(if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            })
        })
        .collect();

    let header = Row::new(
        ["#", "Payment", "Interest", "Principal", "Balance"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );
    let widths = [
        Constraint::Length(4),
        Constraint::Length(13),
        Constraint::Length(12),
        Constraint::Length(13),
        Constraint::Min(14),
    ];
    let title = format!("Repayment Schedule ({} months)", schedule.len());
    f.render_widget(
        Table::new(rows, widths).header(header).block(panel(&title)),
        area,
    );
}
