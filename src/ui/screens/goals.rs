use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

use super::{panel, render_message};
use crate::calc;
use crate::data::Ledger;
use crate::models::{Goal, GoalKind};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{bar_ratio, format_percent, format_whole, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    if ledger.goals.is_empty() {
        render_message(
            f,
            area,
            "Goals",
            &[
                "No goals yet",
                "Use :add-goal <saving|challenge> <target> <title>",
            ],
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_kind(f, chunks[0], app, ledger, GoalKind::Saving, "Savings Goals");
    render_kind(f, chunks[1], app, ledger, GoalKind::Challenge, "Challenges");
}

/// One column of goals. Row indices stay those of the full goal list so the
/// cursor highlights the right entry in whichever column it lands.
fn render_kind(
    f: &mut Frame,
    area: Rect,
    app: &App,
    ledger: &Ledger,
    kind: GoalKind,
    title: &str,
) {
    let goals: Vec<(usize, &Goal)> = ledger
        .goals
        .iter()
        .enumerate()
        .filter(|(_, g)| g.kind == kind)
        .collect();

    if goals.is_empty() {
        render_message(f, area, title, &["None"]);
        return;
    }

    let symbol = app.currency();
    let bar_width = (area.width as usize).saturating_sub(12).clamp(5, 30);

    let items: Vec<ListItem> = goals
        .iter()
        .map(|(i, goal)| {
            let name_style = if *i == app.goal_index {
                theme::selected_style()
            } else {
                Style::default()
                    .fg(theme::TEXT)
                    .add_modifier(Modifier::BOLD)
            };

            let detail = match calc::goal_progress(goal) {
                Ok(progress) => {
                    let color = if progress.is_complete {
                        theme::GREEN
                    } else {
                        theme::ACCENT
                    };
                    vec![
                        Line::from(vec![
                            Span::styled(
                                progress_bar(bar_ratio(progress.percent), bar_width),
                                Style::default().fg(color),
                            ),
                            Span::styled(
                                format!(" {}", format_percent(progress.percent)),
                                Style::default().fg(color).add_modifier(Modifier::BOLD),
                            ),
                        ]),
                        Line::from(Span::styled(
                            format!(
                                "{} of {}{}",
                                format_whole(goal.current, symbol),
                                format_whole(goal.target, symbol),
                                if progress.is_complete {
                                    "  done".to_string()
                                } else {
                                    format!(
                                        "  {} to go",
                                        format_whole(progress.remaining, symbol)
                                    )
                                }
                            ),
                            theme::dim_style(),
                        )),
                    ]
                }
                Err(e) => vec![Line::from(Span::styled(
                    e.to_string(),
                    Style::default().fg(theme::RED),
                ))],
            };

            let mut lines = vec![Line::from(Span::styled(
                truncate(&goal.title, area.width.saturating_sub(4) as usize),
                name_style,
            ))];
            lines.extend(detail);
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    f.render_widget(List::new(items).block(panel(title)), area);
}
