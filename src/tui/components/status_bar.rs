//! # Status Bar Component
//!
//! Top line of the screen: application name, active view, match counts,
//! and the fetch state (spinner while loading, error message on failure).
//! Purely presentational — all data arrives as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::state::FetchStatus;
use crate::tui::component::Component;

pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct StatusBar<'a> {
    pub status: &'a FetchStatus,
    pub matched: usize,
    pub total: usize,
    pub view_label: &'a str,
    /// True while the loading indicator should show (fetch in flight, or
    /// inside the minimum-visibility window).
    pub loading_visible: bool,
    pub spinner_frame: usize,
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::raw(format!(
                "firmdex — Companies Directory | {} view | {} of {} companies",
                self.view_label, self.matched, self.total
            )),
        ];

        if self.loading_visible {
            let glyph = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            spans.push(Span::styled(
                format!(" | {glyph} Loading…"),
                Style::default().fg(Color::Yellow),
            ));
        } else if let FetchStatus::Error(message) = self.status {
            spans.push(Span::styled(
                format!(" | Error: {message}"),
                Style::default().fg(Color::Red),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
