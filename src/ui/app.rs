use chrono::{Datelike, Local};
use rust_decimal::Decimal;

use crate::db::{Database, QueryOutput};
use crate::error::Result;
use crate::models::Month;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Generate,
    View,
    Insights,
    Query,
    Catalog,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Generate,
            Self::View,
            Self::Insights,
            Self::Query,
            Self::Catalog,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generate => write!(f, "Generate"),
            Self::View => write!(f, "View"),
            Self::Insights => write!(f, "Insights"),
            Self::Query => write!(f, "Query"),
            Self::Catalog => write!(f, "Catalog"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

/// What the text input in the command bar is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditTarget {
    Month,
    Sql,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) edit_target: EditTarget,
    pub(crate) input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    /// Month every month-scoped screen operates on.
    pub(crate) month: Month,
    pub(crate) row_count: i64,

    // Last result table shown in the content area
    pub(crate) output: QueryOutput,
    pub(crate) output_title: String,
    pub(crate) output_scroll: usize,

    // Query screen
    pub(crate) sql: String,

    // Catalog screen
    pub(crate) catalog_index: usize,
    pub(crate) catalog_scroll: usize,

    // Insights screen
    pub(crate) category_totals: Vec<(String, Decimal)>,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        // The dataset lives entirely in 2024, but starting on the current
        // calendar month is the least surprising default.
        let month = Month::ALL[Local::now().month0() as usize % 12];

        Self {
            running: true,
            screen: Screen::Generate,
            input_mode: InputMode::Normal,
            edit_target: EditTarget::Month,
            input: String::new(),
            status_message: String::new(),
            show_help: false,

            month,
            row_count: 0,

            output: QueryOutput::default(),
            output_title: String::new(),
            output_scroll: 0,

            sql: String::new(),

            catalog_index: 0,
            catalog_scroll: 0,

            category_totals: Vec::new(),

            visible_rows: 20,
        }
    }

    /// Reload whatever the current screen shows from the database.
    pub(crate) fn refresh(&mut self, db: &Database) -> Result<()> {
        self.row_count = db.month_row_count(self.month)?;
        match self.screen {
            Screen::View => {
                self.output = db.view_month(self.month)?;
                self.output_title = format!("{} records", self.month);
                self.output_scroll = 0;
            }
            Screen::Insights => {
                self.category_totals = db.category_totals(self.month)?;
            }
            Screen::Generate | Screen::Query | Screen::Catalog => {}
        }
        Ok(())
    }

    pub(crate) fn next_month(&mut self) {
        let idx = self.month.number() as usize % 12;
        self.month = Month::ALL[idx];
    }

    pub(crate) fn prev_month(&mut self) {
        let idx = (self.month.number() as usize + 10) % 12;
        self.month = Month::ALL[idx];
    }

    pub(crate) fn set_output(&mut self, title: impl Into<String>, output: QueryOutput) {
        self.output_title = title.into();
        self.output = output;
        self.output_scroll = 0;
    }

    /// Rows of the result table that fit in the content area, after the
    /// border, header, and separator.
    pub(crate) fn output_page(&self) -> usize {
        self.visible_rows.saturating_sub(3).max(1)
    }

    pub(crate) fn catalog_page(&self) -> usize {
        self.visible_rows.saturating_sub(2).max(1)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
