//! src/view/components/status_bar.rs
//! ============================================================================
//! # StatusBar: Persistent Status/Error Display
//!
//! - Renders the last error or status message at the bottom of the UI
//! - Right side shows entry and selection counts

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::session::Session;
use crate::view::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame<'_>, session: &Session, area: Rect) {
        let status_block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme::COMMENT));
        frame.render_widget(status_block, area);

        let (msg, style) = if let Some(ref err) = session.last_error {
            (
                format!("Error: {err}"),
                Style::default().fg(theme::RED).bold(),
            )
        } else if let Some(ref status) = session.last_status {
            (status.clone(), Style::default().fg(theme::GREEN))
        } else {
            ("Ready".to_string(), Style::default().fg(theme::COMMENT))
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        let left_para = Paragraph::new(Line::from(Span::styled(format!(" {msg} "), style)))
            .alignment(Alignment::Left);

        let right_text = format!(
            "{} entries | {} selected ",
            session.current_entries().len(),
            session.selection.len()
        );
        let right_para = Paragraph::new(Line::from(Span::styled(
            right_text,
            Style::default().fg(theme::PURPLE),
        )))
        .alignment(Alignment::Right);

        frame.render_widget(left_para, chunks[0]);
        frame.render_widget(right_para, chunks[1]);
    }
}
