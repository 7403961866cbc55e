use ratatui::{
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::db::QueryOutput;
use crate::ui::theme;
use crate::ui::util::truncate;

const MAX_COLUMN_WIDTH: usize = 40;

/// Shared renderer for any tabular result: bordered block, header row,
/// zebra striping, scrolled window into the rows.
pub(crate) fn render_output(
    f: &mut Frame,
    area: Rect,
    title: &str,
    output: &QueryOutput,
    scroll: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    if output.is_empty() {
        let msg = Paragraph::new(Span::styled("No rows", theme::dim_style()))
            .centered()
            .block(block);
        f.render_widget(msg, area);
        return;
    }

    let widths: Vec<Constraint> = output
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let cell_max = output
                .rows
                .iter()
                .map(|r| r.get(i).map_or(0, |c| c.chars().count()))
                .max()
                .unwrap_or(0);
            let w = col.chars().count().max(cell_max).min(MAX_COLUMN_WIDTH);
            Constraint::Length(w as u16)
        })
        .collect();

    let header = Row::new(
        output
            .columns
            .iter()
            .map(|h| Cell::from(h.as_str()).style(theme::header_style())),
    )
    .height(1);

    let page = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = output
        .rows
        .iter()
        .enumerate()
        .skip(scroll)
        .take(page)
        .map(|(i, row)| {
            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(
                row.iter()
                    .map(|c| Cell::from(truncate(c, MAX_COLUMN_WIDTH))),
            )
            .style(style)
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(2);

    f.render_widget(table, area);

    if output.rows.len() > page {
        let indicator = format!(
            " {}-{} of {} ",
            scroll + 1,
            (scroll + page).min(output.rows.len()),
            output.rows.len()
        );
        let x = area
            .x
            .saturating_add(area.width.saturating_sub(indicator.len() as u16 + 2));
        let w = (indicator.len() as u16).min(area.width);
        let pos = Rect::new(x, area.y + area.height.saturating_sub(1), w, 1);
        f.render_widget(
            Paragraph::new(Span::styled(indicator, theme::dim_style())),
            pos,
        );
    }
}
