use std::collections::BTreeMap;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::theme;
use crate::data::Ledger;

/// Key bindings shown at the top of the help popup, two per row.
const KEY_HELP: &[(&str, &str)] = &[
    ("1-5", "jump to a tab"),
    ("Tab / S-Tab", "next / previous tab"),
    ("j k / arrows", "move the selection"),
    ("Enter", "pay the selected bill"),
    ("D", "delete selected budget or goal"),
    ("+ - / arrows", "slide the loan value"),
    (":", "type a command"),
    ("Ctrl-q", "quit FinBoard"),
];

pub(crate) fn render(f: &mut Frame, app: &App, ledger: &Ledger) {
    let [tabs, body, status, command] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(f.area());

    render_tabs(f, tabs, app);
    match app.screen {
        Screen::Dashboard => super::screens::dashboard::render(f, body, app, ledger),
        Screen::Expenses => super::screens::expenses::render(f, body, app, ledger),
        Screen::Budget => super::screens::budget::render(f, body, app, ledger),
        Screen::Goals => super::screens::goals::render(f, body, app, ledger),
        Screen::Loan => super::screens::loan::render(f, body, app),
    }
    render_status(f, status, app, ledger);
    render_prompt(f, command, app);

    if app.show_help {
        render_help(f, f.area());
    }
}

fn render_tabs(f: &mut Frame, area: Rect, app: &App) {
    let screens = Screen::all();
    let selected = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
    let titles = screens
        .iter()
        .zip(1..)
        .map(|(screen, key)| format!("{key} {screen}"));

    let widget = Tabs::new(titles)
        .select(selected)
        .style(theme::dim_style().bg(theme::HEADER_BG))
        .highlight_style(
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("·", Style::default().fg(theme::OVERLAY)));
    f.render_widget(widget, area);
}

fn hint(screen: Screen) -> &'static str {
    match screen {
        Screen::Dashboard => "Enter pays bill  ? help ",
        Screen::Expenses => ":filter income|expense|all  ? help ",
        Screen::Budget => ":spend <name> <amt>  D delete ",
        Screen::Goals => ":contribute <title> <amt>  D delete ",
        Screen::Loan => "j/k pick slider  +/- slide  :rate ",
    }
}

fn render_status(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let chip_colour = match app.input_mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Command => theme::GREEN,
        InputMode::Confirm => theme::RED,
    };
    let chip = format!(" {} ", app.input_mode);
    let counts = format!(
        " {} txns, {} budgets, {} goals",
        ledger.transactions.len(),
        ledger.budgets.len(),
        ledger.goals.len()
    );
    let hint = hint(app.screen);

    let [chip_area, counts_area, hint_area] = Layout::horizontal([
        Constraint::Length(chip.chars().count() as u16),
        Constraint::Min(0),
        Constraint::Length(hint.chars().count() as u16),
    ])
    .areas(area);

    f.render_widget(
        Paragraph::new(chip).style(
            Style::default()
                .fg(theme::HEADER_BG)
                .bg(chip_colour)
                .add_modifier(Modifier::BOLD),
        ),
        chip_area,
    );
    f.render_widget(
        Paragraph::new(counts).style(theme::status_bar_style()),
        counts_area,
    );
    f.render_widget(Paragraph::new(hint).style(theme::status_bar_style()), hint_area);
}

fn render_prompt(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.input_mode {
        InputMode::Command => {
            let typed = app.command_input.chars().count() as u16;
            f.set_cursor_position((area.x + 1 + typed, area.y));
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(app.command_input.as_str(), theme::command_bar_style()),
            ])
        }
        InputMode::Confirm => Line::from(vec![
            Span::styled(app.confirm_message.as_str(), Style::default().fg(theme::YELLOW)),
            Span::styled("  y = yes, anything else cancels", theme::dim_style()),
        ]),
        InputMode::Normal if app.status_message.is_empty() => {
            Line::styled(" : command   ? keys and commands", theme::dim_style())
        }
        InputMode::Normal => {
            Line::styled(app.status_message.as_str(), theme::command_bar_style())
        }
    };

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme::COMMAND_BG)),
        area,
    );
}

/// One `(name, description)` per registered command, skipping one-letter
/// aliases, ordered by name.
pub(crate) fn command_help() -> Vec<(&'static str, &'static str)> {
    let mut by_description: BTreeMap<&str, &str> = BTreeMap::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.chars().count() < 2 {
            continue;
        }
        let entry = by_description.entry(cmd.description).or_insert(name);
        if (name.len(), name) > (entry.len(), *entry) {
            *entry = name;
        }
    }

    let mut entries: Vec<(&str, &str)> = by_description
        .into_iter()
        .map(|(description, name)| (name, description))
        .collect();
    entries.sort_unstable();
    entries
}

fn render_help(f: &mut Frame, area: Rect) {
    let heading = |text: &'static str| {
        Line::styled(
            text,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut lines = vec![heading("Keys")];
    for pair in KEY_HELP.chunks(2) {
        let cells: Vec<Span> = pair
            .iter()
            .flat_map(|(key, what)| {
                [
                    Span::styled(format!("  {key:<13}"), Style::default().fg(theme::ACCENT)),
                    Span::styled(format!("{what:<32}"), theme::normal_style()),
                ]
            })
            .collect();
        lines.push(Line::from(cells));
    }

    lines.push(Line::default());
    lines.push(heading("Commands"));
    for (name, description) in command_help() {
        lines.push(Line::from(vec![
            Span::styled(format!("  :{name:<15}"), Style::default().fg(theme::ACCENT)),
            Span::styled(description, theme::normal_style()),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::styled("any key closes this window", theme::dim_style()));

    let popup = centered(area, 84, lines.len() as u16 + 2);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" FinBoard help ")
                .title_style(theme::title_style())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .style(Style::default().bg(theme::HEADER_BG)),
        ),
        popup,
    );
}

/// A `width` × `height` rectangle in the middle of `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
