use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Current SQL
            Constraint::Min(5),    // Results
        ])
        .split(area);

    render_sql(f, chunks[0], app);

    let title = if app.output_title.is_empty() {
        "Results".to_string()
    } else {
        app.output_title.clone()
    };
    super::table::render_output(f, chunks[1], &title, &app.output, app.output_scroll);
}

fn render_sql(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(" SQL ", theme::title_style()));

    let content = if app.sql.is_empty() {
        Line::from(Span::styled(
            "Press Enter to type a read-only SELECT",
            theme::dim_style(),
        ))
    } else {
        Line::from(Span::styled(app.sql.as_str(), theme::normal_style()))
    };

    f.render_widget(
        Paragraph::new(content)
            .wrap(ratatui::widgets::Wrap { trim: false })
            .block(block),
        area,
    );
}
