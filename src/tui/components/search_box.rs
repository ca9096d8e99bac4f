//! # Search Box Component
//!
//! Local keystroke buffer for the search field. Raw input lands here, not
//! in the core: the buffer is committed as a `SetSearch` action only once
//! the input has been stable for the configured quiet period (or on Enter/
//! Esc, which end the edit). The derived view therefore reflects stable
//! text, not every keystroke.

use std::time::{Duration, Instant};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Events emitted by the search box.
pub enum SearchEvent {
    /// Buffer changed; stay in search mode, commit happens on the debounce.
    Changed,
    /// Edit ended with new text to apply to the core.
    Committed(String),
    /// Edit ended with nothing new to apply.
    Dismissed,
}

pub struct SearchBox {
    buffer: String,
    /// Last text handed to the core, to avoid re-dispatching identical input.
    committed: String,
    edited_at: Option<Instant>,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            committed: String::new(),
            edited_at: None,
        }
    }

    /// Current buffer contents (shown by the filter bar).
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn has_pending_edit(&self) -> bool {
        self.edited_at.is_some()
    }

    /// Empties the buffer without emitting anything. Used by reset-filters,
    /// which clears the core's search through its own action.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.committed.clear();
        self.edited_at = None;
    }

    /// Returns the text to commit once the quiet period has elapsed since
    /// the last edit, or None if the input is still settling (or unchanged).
    pub fn take_debounced(&mut self, quiet: Duration) -> Option<String> {
        match self.edited_at {
            Some(edited) if edited.elapsed() >= quiet => {
                self.edited_at = None;
                self.take_changed()
            }
            _ => None,
        }
    }

    fn take_changed(&mut self) -> Option<String> {
        if self.buffer != self.committed {
            self.committed = self.buffer.clone();
            Some(self.buffer.clone())
        } else {
            None
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                self.edited_at = Some(Instant::now());
                Some(SearchEvent::Changed)
            }
            TuiEvent::Paste(data) => {
                self.buffer.push_str(data);
                self.edited_at = Some(Instant::now());
                Some(SearchEvent::Changed)
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                self.edited_at = Some(Instant::now());
                Some(SearchEvent::Changed)
            }
            // Enter and Esc both end the edit; any settled-but-uncommitted
            // text is applied immediately rather than waiting out the timer.
            TuiEvent::Submit | TuiEvent::Escape => {
                self.edited_at = None;
                match self.take_changed() {
                    Some(text) => Some(SearchEvent::Committed(text)),
                    None => Some(SearchEvent::Dismissed),
                }
            }
            _ => None,
        }
    }
}
