use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, List, ListItem},
    Frame,
};

use super::{panel, render_message};
use crate::calc::{self, BudgetRollup, InvalidArgument};
use crate::data::Ledger;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{bar_ratio, format_percent, format_whole, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let rollup = match calc::compute_budget_rollup(&ledger.budgets) {
        Ok(r) => r,
        Err(InvalidArgument::EmptyCategories) => {
            render_message(
                f,
                area,
                "Budget",
                &[
                    "No budget categories yet",
                    "Use :add-budget <name> <limit> or :import-budgets <file.csv>",
                ],
            );
            return;
        }
        Err(e) => {
            render_message(f, area, "Budget", &[&e.to_string()]);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    render_overview(f, chunks[0], app, &rollup);
    render_categories(f, chunks[1], app, &rollup);
}

fn render_overview(f: &mut Frame, area: Rect, app: &App, rollup: &BudgetRollup) {
    let symbol = app.currency();
    let color = theme::usage_color(rollup.used_percent, &app.settings.budget);
    let label = format!(
        "{} of {} spent ({}) | {} remaining",
        format_whole(rollup.total_spent, symbol),
        format_whole(rollup.total_limit, symbol),
        format_percent(rollup.used_percent),
        format_whole(rollup.remaining, symbol),
    );

    let gauge = Gauge::default()
        .block(panel("Monthly Budget"))
        .gauge_style(Style::default().fg(color).bg(theme::SURFACE))
        .ratio(bar_ratio(rollup.used_percent))
        .label(Span::styled(
            label,
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(gauge, area);
}

fn render_categories(f: &mut Frame, area: Rect, app: &App, rollup: &BudgetRollup) {
    let symbol = app.currency();
    let page = area.height.saturating_sub(2) as usize;
    let skip = app.budget_index.saturating_sub(page.saturating_sub(1));

    let items: Vec<ListItem> = rollup
        .categories
        .iter()
        .enumerate()
        .skip(skip)
        .take(page)
        .map(|(i, usage)| {
            let color = theme::usage_color(usage.percent, &app.settings.budget);
            let mut spans = vec![
                Span::styled(
                    format!("{:<18}", truncate(&usage.name, 17)),
                    theme::row_style(i, app.budget_index),
                ),
                Span::styled(
                    format!(
                        " {:>10} / {:<10} ",
                        format_whole(usage.spent, symbol),
                        format_whole(usage.limit, symbol)
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(
                    progress_bar(bar_ratio(usage.percent), 20),
                    Style::default().fg(color),
                ),
                Span::styled(
                    format!(" {:>5}", format_percent(usage.percent)),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ];
            if usage.is_over {
                spans.push(Span::styled(
                    format!("  over by {}", format_whole(usage.over_amount, symbol)),
                    Style::default().fg(theme::RED),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!("Categories ({})", rollup.categories.len());
    f.render_widget(List::new(items).block(panel(&title)), area);
}
