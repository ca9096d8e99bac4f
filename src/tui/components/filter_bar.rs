//! # Filter Bar Component
//!
//! Shows the current query parameters: search text, selected location and
//! industry facets, and the sort key. Stateless — the search buffer lives
//! in `SearchBox`, facet selections in the core `Filters`; this component
//! only renders what it is given.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::tui::component::Component;

pub struct FilterBar<'a> {
    pub search_text: &'a str,
    /// True while the search box has focus; shows a cursor and highlight.
    pub searching: bool,
    pub location: &'a str,
    pub industry: &'a str,
    pub sort_label: &'a str,
}

impl Component for FilterBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let search_style = if self.searching {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let search_value = if self.searching {
            format!("{}▏", self.search_text)
        } else if self.search_text.is_empty() {
            "(press / to search)".to_string()
        } else {
            self.search_text.to_string()
        };

        let label_style = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::from(vec![
                Span::styled("Search: ", label_style),
                Span::styled(search_value, search_style),
            ]),
            Line::from(vec![
                Span::styled("Location: ", label_style),
                Span::raw(self.location),
                Span::styled("    Industry: ", label_style),
                Span::raw(self.industry),
                Span::styled("    Sort: ", label_style),
                Span::raw(self.sort_label),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Filters ")
            .padding(Padding::horizontal(1));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
