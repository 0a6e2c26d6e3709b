//! src/view/components/entry_table.rs
//! ============================================================================
//! # EntryTable: The Browse Listing Component
//!
//! Renders the active pane's entries with cursor and selection markers.
//! - Device mode shows the `[✓]`/`[ ]` transfer mark per file row
//! - Host mode is a plain destination picker (no marks)
//! - The per-mode key legend lives in the table footer

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Cell, Row, Table, TableState},
};

use crate::model::nav::BrowseMode;
use crate::model::session::Session;
use crate::view::theme;

const DEVICE_KEYMAP: &str =
    "[↑↓/jk] Move   [Enter] Open   [s] Select   [d] Destination   [e] Transfer   [Esc] Back   [q] Quit";
const HOST_KEYMAP: &str =
    "[↑↓/jk] Move   [Enter] Open   [e] Transfer here   [d] Device   [Esc] Back   [q] Quit";

pub struct EntryTable;

impl EntryTable {
    pub fn render(frame: &mut Frame<'_>, session: &Session, area: Rect) {
        let device_mode: bool = session.mode == BrowseMode::Device;

        let header: Row<'_> = Row::new(vec!["", "Name", "Size"]).style(
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        );

        let keymap: &str = if device_mode {
            DEVICE_KEYMAP
        } else {
            HOST_KEYMAP
        };
        let footer: Row<'_> = Row::new(vec![Cell::from(""), Cell::from(keymap), Cell::from("")])
            .style(
                Style::default()
                    .fg(theme::COMMENT)
                    .add_modifier(Modifier::ITALIC),
            );

        let rows = session.current_entries().iter().map(|entry| {
            let marker: &str = if device_mode && !entry.is_dir {
                if session.selection.contains(&session.device_path_of(entry)) {
                    "[✓]"
                } else {
                    "[ ]"
                }
            } else {
                ""
            };

            let style: Style = if entry.is_dir {
                Style::default()
                    .fg(theme::CYAN)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::FOREGROUND)
            };

            Row::new(vec![
                Cell::from(marker).style(Style::default().fg(theme::GREEN)),
                Cell::from(entry.name.clone()).style(style),
                Cell::from(entry.size_human()),
            ])
        });

        let widths: [Constraint; 3] = [
            Constraint::Length(3),      // selection marker
            Constraint::Percentage(75), // name
            Constraint::Percentage(20), // size
        ];

        let mut table_state: TableState = TableState::default();
        table_state.select(session.current_selected());

        let table: Table<'_> = Table::new(rows, widths)
            .header(header)
            .footer(footer)
            .block(Block::default().title(format!(
                " {} — {} entries ",
                session.current_path_display(),
                session.current_entries().len()
            )))
            .row_highlight_style(
                Style::default()
                    .bg(theme::CURRENT_LINE)
                    .add_modifier(Modifier::BOLD),
            )
            .column_spacing(1);

        frame.render_stateful_widget(table, area, &mut table_state);
    }
}
