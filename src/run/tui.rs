use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Settings;
use crate::data::Ledger;
use crate::ui::app::{App, InputMode, PendingAction, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_up};

pub(crate) fn as_tui(settings: Settings, ledger: &mut Ledger) -> Result<()> {
    let mut app = App::new(settings);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("tui started");
    let result = run_app(&mut terminal, &mut app, ledger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "tui exited with error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ledger: &mut Ledger,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // 1 tab + 1 status + 1 cmd + 2 borders + 1 header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app, ledger);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, ledger),
                InputMode::Command => handle_command_input(key, app, ledger),
                InputMode::Confirm => handle_confirm_input(key, app, ledger),
            }
        }
    }
    tracing::info!("tui stopped");
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app, ledger),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, Screen::Dashboard),
        KeyCode::Char('2') => switch_screen(app, Screen::Expenses),
        KeyCode::Char('3') => switch_screen(app, Screen::Budget),
        KeyCode::Char('4') => switch_screen(app, Screen::Goals),
        KeyCode::Char('5') => switch_screen(app, Screen::Loan),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, screens[next]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, screens[prev]);
        }
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right
            if app.screen == Screen::Loan =>
        {
            app.loan.adjust(1);
        }
        KeyCode::Char('-') | KeyCode::Left if app.screen == Screen::Loan => {
            app.loan.adjust(-1);
        }
        KeyCode::Enter if app.screen == Screen::Dashboard => {
            commands::handle_command("pay", app, ledger);
        }
        KeyCode::Char('D') if app.screen == Screen::Budget => {
            commands::handle_command("delete-budget", app, ledger);
        }
        KeyCode::Char('D') if app.screen == Screen::Goals => {
            commands::handle_command("delete-goal", app, ledger);
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
        }
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            app.status_message.clear();
            commands::handle_command(&input, app, ledger);
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            if app.command_input.pop().is_none() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.pending_action.take() {
                match action {
                    PendingAction::DeleteBudget { index, name } => {
                        if ledger.remove_budget(index).is_some() {
                            tracing::info!(budget = %name, "deleted budget");
                            app.set_status(format!("Deleted budget: {name}"));
                        }
                    }
                    PendingAction::DeleteGoal { index, title } => {
                        if ledger.remove_goal(index).is_some() {
                            tracing::info!(goal = %title, "deleted goal");
                            app.set_status(format!("Deleted goal: {title}"));
                        }
                    }
                }
                app.clamp_cursors(ledger);
            }
        }
        _ => {
            app.pending_action = None;
            app.set_status("Cancelled");
        }
    }
    app.confirm_message.clear();
    app.input_mode = InputMode::Normal;
}

// ── Navigation ───────────────────────────────────────────────

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    app.status_message.clear();
}

fn handle_move_down(app: &mut App, ledger: &Ledger) {
    match app.screen {
        Screen::Dashboard => {
            let mut scroll = 0;
            scroll_down(&mut app.bill_index, &mut scroll, ledger.bills.len(), usize::MAX);
        }
        Screen::Expenses => {
            let len = app.filtered_transactions(ledger).len();
            scroll_down(
                &mut app.transaction_index,
                &mut app.transaction_scroll,
                len,
                app.visible_rows,
            );
        }
        Screen::Budget => {
            let mut scroll = 0;
            scroll_down(&mut app.budget_index, &mut scroll, ledger.budgets.len(), usize::MAX);
        }
        Screen::Goals => {
            let mut scroll = 0;
            scroll_down(&mut app.goal_index, &mut scroll, ledger.goals.len(), usize::MAX);
        }
        Screen::Loan => app.loan.toggle_field(),
    }
}

fn handle_move_up(app: &mut App) {
    let mut scroll = 0;
    match app.screen {
        Screen::Dashboard => scroll_up(&mut app.bill_index, &mut scroll),
        Screen::Expenses => scroll_up(&mut app.transaction_index, &mut app.transaction_scroll),
        Screen::Budget => scroll_up(&mut app.budget_index, &mut scroll),
        Screen::Goals => scroll_up(&mut app.goal_index, &mut scroll),
        Screen::Loan => app.loan.toggle_field(),
    }
}
