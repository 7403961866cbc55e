use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::catalog;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(20)])
        .split(area);

    render_query_list(f, chunks[0], app);

    let title = if app.output_title.is_empty() {
        "Results".to_string()
    } else {
        app.output_title.clone()
    };
    super::table::render_output(f, chunks[1], &title, &app.output, app.output_scroll);
}

fn render_query_list(f: &mut Frame, area: Rect, app: &App) {
    let page = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = catalog::CATALOG
        .iter()
        .enumerate()
        .skip(app.catalog_scroll)
        .take(page)
        .map(|(i, query)| {
            let style = if i == app.catalog_index {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            let label = format!("{:>2}. {}", i + 1, truncate(query.name, 36));
            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(
                format!(" Queries ({}) ", catalog::CATALOG.len()),
                theme::title_style(),
            )),
    );

    f.render_widget(list, area);

    let sql = catalog::CATALOG
        .get(app.catalog_index)
        .map(|q| q.sql)
        .unwrap_or_default();
    let hint = Paragraph::new(Span::styled(
        format!(" {} ", truncate(sql, area.width.saturating_sub(4) as usize)),
        theme::dim_style(),
    ));
    let pos = Rect::new(
        area.x + 1,
        area.y + area.height.saturating_sub(1),
        area.width.saturating_sub(2),
        1,
    );
    f.render_widget(hint, pos);
}
