//! Frame composition: lays out the status bar, filter bar, active view,
//! and footer, and routes the main area between the loading, error, empty,
//! and data states. Error-with-records keeps rendering the stale records —
//! the failure is surfaced in the status bar instead of blanking the view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::{App, FetchStatus};
use crate::tui::component::Component;
use crate::tui::components::status_bar::SPINNER_FRAMES;
use crate::tui::components::{CardGrid, FilterBar, StatusBar, TableView};
use crate::tui::{InputMode, TuiState, ViewMode};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(4), Min(0), Length(1)]);
    let [title_area, filter_area, main_area, footer_area] = layout.areas(frame.area());

    let loading_visible = tui.loading_visible(app);

    StatusBar {
        status: &app.status,
        matched: app.processed.len(),
        total: app.companies.len(),
        view_label: tui.view_mode.label(),
        loading_visible,
        spinner_frame,
    }
    .render(frame, title_area);

    FilterBar {
        search_text: tui.search.text(),
        searching: matches!(tui.input_mode, InputMode::Search),
        location: &app.filters.location,
        industry: &app.filters.industry,
        sort_label: app.filters.sort_by.label(),
    }
    .render(frame, filter_area);

    // Main area precedence: first load → spinner; failed first load → error;
    // no matches → empty state; otherwise the active view over the page slice.
    if loading_visible && app.companies.is_empty() {
        draw_loading_view(frame, main_area, spinner_frame);
    } else if let FetchStatus::Error(message) = &app.status
        && app.companies.is_empty()
    {
        draw_error_view(frame, main_area, message);
    } else if app.processed.is_empty() {
        draw_empty_view(frame, main_area);
    } else {
        let slice = app.page_slice();
        match tui.view_mode {
            ViewMode::Table => TableView {
                state: &mut tui.table,
                companies: slice,
            }
            .render(frame, main_area),
            ViewMode::Card => CardGrid {
                state: &mut tui.cards,
                companies: slice,
            }
            .render(frame, main_area),
        }
    }

    frame.render_widget(footer_line(app), footer_area);
}

fn draw_loading_view(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let glyph = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let paragraph = Paragraph::new(format!("{glyph} Loading companies…"))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(paragraph, area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::raw(message.to_string()),
        Line::raw(""),
        Line::styled("Press r to retry", Style::default().fg(Color::DarkGray)),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::bordered().title(" ERROR "))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_empty_view(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw("No companies match your filters."),
        Line::raw(""),
        Line::styled(
            "Press x to reset filters",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(paragraph, area);
}

/// Pagination readout plus key hints.
fn footer_line(app: &App) -> Line<'static> {
    let total = app.processed.len();
    let slice_len = app.page_slice().len();
    let range = if slice_len == 0 {
        "0–0".to_string()
    } else {
        let start = app.page * app.rows_per_page + 1;
        format!("{}–{}", start, start + slice_len - 1)
    };
    Line::raw(format!(
        " {} rows · {} of {} · page {}/{}   /:search  v:view  s:sort  l:location  i:industry  +:rows  ←→:page  x:reset  r:reload  q:quit",
        app.rows_per_page,
        range,
        total,
        app.page + 1,
        app.page_count().max(1),
    ))
}
