//! # Table View Component
//!
//! The list presentation: one row per company on the current page, with a
//! cursor row moved by Up/Down. Follows the persistent state + transient
//! wrapper pattern: `TableViewState` lives in `TuiState`, `TableView` is
//! created each frame with borrowed state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Row, Table, TableState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::Company;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Persistent state for the table view.
pub struct TableViewState {
    pub selected: usize,
    pub table_state: TableState,
}

impl TableViewState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            table_state: TableState::default(),
        }
    }

    /// Moves the cursor within the current page slice.
    pub fn handle_event(&mut self, event: &TuiEvent, row_count: usize) {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.selected = self.selected.saturating_sub(1);
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.selected = (self.selected + 1).min(row_count.saturating_sub(1));
            }
            _ => {}
        }
        self.clamp(row_count);
    }

    /// Keeps the cursor inside the slice after the page shrinks or empties.
    pub fn clamp(&mut self, row_count: usize) {
        if row_count == 0 {
            self.selected = 0;
            self.table_state.select(None);
        } else {
            self.selected = self.selected.min(row_count - 1);
            self.table_state.select(Some(self.selected));
        }
    }
}

/// Transient render wrapper for the table view.
pub struct TableView<'a> {
    pub state: &'a mut TableViewState,
    pub companies: &'a [Company],
}

impl Component for TableView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clamp(self.companies.len());

        let header = Row::new(["Name", "Industry", "Location", "Employees", "Founded", "Website"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let name_width = (area.width as usize / 4).max(12);
        let rows: Vec<Row> = self
            .companies
            .iter()
            .map(|c| {
                Row::new([
                    truncate_cell(&c.name, name_width),
                    truncate_cell(&c.industry, 18),
                    truncate_cell(&c.location, 14),
                    c.employees.to_string(),
                    c.founded.to_string(),
                    truncate_cell(c.website.as_deref().unwrap_or("—"), 30),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(25),
            Constraint::Percentage(18),
            Constraint::Percentage(14),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Min(20),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Companies "),
            )
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}

/// Truncates to the given display width, appending an ellipsis when cut.
/// Width is measured in terminal columns, not bytes.
fn truncate_cell(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
