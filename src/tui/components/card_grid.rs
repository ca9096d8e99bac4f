//! # Card Grid Component
//!
//! The card presentation: the current page slice rendered as a scrollable
//! two-column grid of company cards. Same data, same pagination as the
//! table view — only the layout differs.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Company;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

const CARD_HEIGHT: u16 = 9;

/// Persistent state for the card grid (scroll position).
pub struct CardGridState {
    pub scroll_state: ScrollViewState,
}

impl CardGridState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            _ => {}
        }
    }
}

/// Transient render wrapper for the card grid.
pub struct CardGrid<'a> {
    pub state: &'a mut CardGridState,
    pub companies: &'a [Company],
}

impl Component for CardGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let columns: u16 = if area.width >= 80 { 2 } else { 1 };
        let content_width = area.width.saturating_sub(1); // room for the scrollbar
        let card_width = content_width / columns;
        let grid_rows = (self.companies.len() as u16).div_ceil(columns);
        let content_height = grid_rows * CARD_HEIGHT;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, company) in self.companies.iter().enumerate() {
            let col = (i as u16) % columns;
            let row = (i as u16) / columns;
            let cell = Rect::new(col * card_width, row * CARD_HEIGHT, card_width, CARD_HEIGHT);

            let inner_width = card_width.saturating_sub(4) as usize;
            let card = Paragraph::new(card_lines(company, inner_width)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(" {} ", company.name)),
            );
            scroll_view.render_widget(card, cell);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Body lines of a single card, wrapped to the card's inner width.
fn card_lines(company: &Company, width: usize) -> Vec<Line<'_>> {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Industry: ", label),
            Span::raw(company.industry.as_str()),
            Span::styled("   Location: ", label),
            Span::raw(company.location.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Employees: ", label),
            Span::raw(company.employees.to_string()),
            Span::styled("   Founded: ", label),
            Span::raw(company.founded.to_string()),
        ]),
    ];

    if let Some(description) = company.description.as_deref() {
        for wrapped in textwrap::wrap(description, width.max(10)) {
            lines.push(Line::from(wrapped.into_owned()));
        }
    }

    if let Some(website) = company.website.as_deref() {
        lines.push(Line::from(Span::styled(
            website.to_string(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::company;

    #[test]
    fn test_card_lines_without_optionals() {
        let c = company(1, "Acme", "Tech", "NY", 2001);
        let lines = card_lines(&c, 40);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_card_lines_wraps_description() {
        let c = Company {
            description: Some(
                "A very long description that certainly cannot fit on one narrow card line"
                    .to_string(),
            ),
            website: Some("https://acme.example".to_string()),
            ..company(1, "Acme", "Tech", "NY", 2001)
        };
        let lines = card_lines(&c, 20);
        // Two field lines, several description lines, one website line
        assert!(lines.len() > 4);
    }
}
