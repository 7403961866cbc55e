use std::io;
use std::str::FromStr;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::catalog;
use crate::db::{Database, QueryOutput};
use crate::gen;
use crate::models::Month;
use crate::ui::app::{App, EditTarget, InputMode, Screen};
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(db: &mut Database) -> Result<()> {
    let mut app = App::new();
    app.refresh(db)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, db);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    db: &mut Database,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(3) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, db),
                InputMode::Editing => handle_editing_input(key, app, db),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, db: &mut Database) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('1') => switch_screen(app, db, Screen::Generate),
        KeyCode::Char('2') => switch_screen(app, db, Screen::View),
        KeyCode::Char('3') => switch_screen(app, db, Screen::Insights),
        KeyCode::Char('4') => switch_screen(app, db, Screen::Query),
        KeyCode::Char('5') => switch_screen(app, db, Screen::Catalog),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            switch_screen(app, db, screens[(idx + 1) % screens.len()]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, db, screens[prev]);
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('g') => {
            if app.screen == Screen::Catalog {
                scroll_to_top(&mut app.catalog_index, &mut app.catalog_scroll);
            } else {
                app.output_scroll = 0;
            }
        }
        KeyCode::Char('G') => {
            if app.screen == Screen::Catalog {
                let page = app.catalog_page();
                scroll_to_bottom(
                    &mut app.catalog_index,
                    &mut app.catalog_scroll,
                    catalog::CATALOG.len(),
                    page,
                );
            } else {
                app.output_scroll = app.output.rows.len().saturating_sub(app.output_page());
            }
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.output_page() / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.output_page() / 2 {
                handle_move_up(app);
            }
        }
        KeyCode::Char('H') => {
            app.prev_month();
            refresh_or_report(app, db);
        }
        KeyCode::Char('L') => {
            app.next_month();
            refresh_or_report(app, db);
        }
        KeyCode::Char('m') => {
            app.edit_target = EditTarget::Month;
            app.input.clear();
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Enter => execute_screen(app, db),
        KeyCode::Esc => app.status_message.clear(),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        _ => {}
    }
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App, db: &mut Database) {
    match key.code {
        KeyCode::Enter => {
            let input = app.input.trim().to_string();
            app.input_mode = InputMode::Normal;
            if input.is_empty() {
                return;
            }
            match app.edit_target {
                EditTarget::Month => match Month::from_str(&input) {
                    Ok(month) => {
                        app.month = month;
                        refresh_or_report(app, db);
                        app.set_status(format!("Month: {month}"));
                    }
                    Err(e) => report(app, e),
                },
                EditTarget::Sql => match db.run_select(&input) {
                    Ok(output) => {
                        let rows = output.rows.len();
                        app.sql = input;
                        app.set_output(format!("{rows} rows"), output);
                        app.status_message.clear();
                    }
                    Err(e) => report(app, e),
                },
            }
            app.input.clear();
        }
        KeyCode::Esc => {
            app.input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            app.input.push(c);
        }
        _ => {}
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, db: &mut Database, screen: Screen) {
    app.screen = screen;
    app.output = QueryOutput::default();
    app.output_title.clear();
    app.output_scroll = 0;
    refresh_or_report(app, db);
    app.set_status(format!("{screen}"));
}

fn handle_move_down(app: &mut App) {
    if app.screen == Screen::Catalog {
        let page = app.catalog_page();
        scroll_down(
            &mut app.catalog_index,
            &mut app.catalog_scroll,
            catalog::CATALOG.len(),
            page,
        );
    } else if app.output_scroll + app.output_page() < app.output.rows.len() {
        app.output_scroll += 1;
    }
}

fn handle_move_up(app: &mut App) {
    if app.screen == Screen::Catalog {
        scroll_up(&mut app.catalog_index, &mut app.catalog_scroll);
    } else {
        app.output_scroll = app.output_scroll.saturating_sub(1);
    }
}

/// Run the current screen's action. Every failure lands in the status bar;
/// nothing here tears the terminal down.
fn execute_screen(app: &mut App, db: &mut Database) {
    match app.screen {
        Screen::Generate => {
            let batch = gen::generate_batch(app.month, gen::BATCH_SIZE);
            match db.append_expenses(&batch, app.month) {
                Ok(written) => {
                    let preview = QueryOutput::from_expenses(&batch[..5.min(batch.len())]);
                    app.set_output(format!("First 5 of {written}"), preview);
                    refresh_or_report(app, db);
                    app.set_status(format!("Loaded {written} records into {}", app.month));
                }
                Err(e) => report(app, e),
            }
        }
        Screen::View | Screen::Insights => {
            refresh_or_report(app, db);
        }
        Screen::Query => {
            app.edit_target = EditTarget::Sql;
            app.input = app.sql.clone();
            app.input_mode = InputMode::Editing;
        }
        Screen::Catalog => {
            if let Some(query) = catalog::CATALOG.get(app.catalog_index) {
                match db.run_named(query, app.month) {
                    Ok(output) => {
                        app.set_output(format!("{} — {}", query.name, app.month), output);
                        app.status_message.clear();
                    }
                    Err(e) => report(app, e),
                }
            }
        }
    }
}

fn refresh_or_report(app: &mut App, db: &Database) {
    if let Err(e) = app.refresh(db) {
        report(app, e);
    }
}

/// Bad input reads back verbatim; storage failures get an Error prefix.
fn report(app: &mut App, e: crate::error::Error) {
    if e.is_validation() {
        app.set_status(e.to_string());
    } else {
        app.set_status(format!("Error: {e}"));
    }
}
