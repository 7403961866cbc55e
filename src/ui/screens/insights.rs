use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.category_totals.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(
                format!(" Spending by Category — {} ", app.month),
                theme::title_style(),
            ));
        let msg = Paragraph::new(Line::from(Span::styled(
            "No records for this month. Load some on the Generate screen",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let legend_height = (app.category_totals.len() as u16 + 2).min(12);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(legend_height)])
        .split(area);

    render_chart(f, chunks[0], app);
    render_breakdown(f, chunks[1], app);
}

fn render_chart(f: &mut Frame, area: Rect, app: &App) {
    let bars: Vec<Bar> = app
        .category_totals
        .iter()
        .take(10)
        .map(|(name, amt)| {
            let val = amt.to_u64().unwrap_or(0);
            Bar::default()
                .value(val)
                .label(Line::from(truncate(name, 10)))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_style())
                .title(Span::styled(
                    format!(" Spending by Category — {} ", app.month),
                    theme::title_style(),
                )),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

/// Per-category share of total spending, the textual stand-in for a pie
/// chart: amount, percentage, and a proportional bar.
fn render_breakdown(f: &mut Frame, area: Rect, app: &App) {
    let total: Decimal = app.category_totals.iter().map(|(_, amt)| *amt).sum();

    let bar_width = (area.width as usize).saturating_sub(46).clamp(10, 30);
    let lines: Vec<Line> = app
        .category_totals
        .iter()
        .enumerate()
        .map(|(i, (name, amt))| {
            let share = if total > Decimal::ZERO {
                (*amt / total * Decimal::from(100)).round_dp(1)
            } else {
                Decimal::ZERO
            };
            let filled = (share.to_f64().unwrap_or(0.0) / 100.0 * bar_width as f64) as usize;
            let color = theme::CHART_COLORS[i % theme::CHART_COLORS.len()];
            Line::from(vec![
                Span::styled(format!("  {:<16}", truncate(name, 16)), theme::normal_style()),
                Span::styled(format!("{:>12}", format_amount(*amt)), theme::normal_style()),
                Span::styled(format!("  {share:>5}%  "), theme::dim_style()),
                Span::styled("█".repeat(filled.min(bar_width)), Style::default().fg(color)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(
            format!(" Share of Total — {} ", format_amount(total)),
            theme::title_style(),
        ));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
