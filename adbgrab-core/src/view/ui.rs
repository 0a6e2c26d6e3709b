//! src/view/ui.rs
//! ============================================================================
//! # View: TUI Render Orchestrator (ratatui)
//!
//! The full view is recomputed from session state every draw cycle: header
//! (mode and current path), entry table with markers and key legend, and
//! the status bar. No incremental diffing — listings are small.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::nav::BrowseMode;
use crate::model::session::Session;
use crate::view::components::entry_table::EntryTable;
use crate::view::components::status_bar::StatusBar;
use crate::view::theme;

pub struct View;

impl View {
    /// Draws the full UI for one frame; called from `terminal.draw`.
    pub fn redraw(frame: &mut Frame<'_>, session: &Session) {
        let chunks: Vec<Rect> = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area())
            .to_vec();

        Self::render_header(frame, session, chunks[0]);
        EntryTable::render(frame, session, chunks[1]);
        StatusBar::render(frame, session, chunks[2]);
    }

    fn render_header(frame: &mut Frame<'_>, session: &Session, area: Rect) {
        let accent = match session.mode {
            BrowseMode::Device => theme::CYAN,
            BrowseMode::Host => theme::GREEN,
        };

        let title = Line::from(Span::styled(
            format!(" ADB File Transfer — {} ", session.mode),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
        let path = Line::from(Span::styled(
            format!(" {} ", session.current_path_display()),
            Style::default().fg(theme::YELLOW),
        ));

        frame.render_widget(Paragraph::new(vec![title, path]), area);
    }
}
