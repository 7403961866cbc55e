use ratatui::{layout::Rect, Frame};

use crate::ui::app::App;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.output_title.is_empty() {
        format!("{} records", app.month)
    } else {
        app.output_title.clone()
    };
    super::table::render_output(f, area, &title, &app.output, app.output_scroll);
}
