use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::gen;
use crate::models::DATA_YEAR;
use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary card
            Constraint::Min(5),    // Last batch preview
        ])
        .split(area);

    render_summary(f, chunks[0], app);

    let title = if app.output.is_empty() {
        "Batch Preview".to_string()
    } else {
        app.output_title.clone()
    };
    super::table::render_output(f, chunks[1], &title, &app.output, app.output_scroll);
}

fn render_summary(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(
            format!(" {} {DATA_YEAR} ", app.month),
            theme::title_style(),
        ));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} records stored", app.row_count),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Enter appends {} random records to the {} table",
                gen::BATCH_SIZE,
                app.month.table_name()
            ),
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}
