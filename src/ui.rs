//! The UI renders the application state into something visible.
//!
//! Parent headers are drawn with a disclosure glyph and padded to their configured
//! height; child rows are indented beneath them. The bottom bar shows either the
//! status message or the key help.

use crate::app_state::AppState;
use crate::controller::{RowContent, RowKind, VisibleRow};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Renders the list and the status bar.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let items: Vec<ListItem> = app
        .controller
        .rows()
        .map(|row| row_item(app, &row))
        .collect();

    let title = format!(
        "Sections ({} expansion, {} rows)",
        app.controller.policy(),
        app.controller.row_count()
    );
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default().with_selected(Some(app.cursor));
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    let help = app.message.clone().unwrap_or_else(|| {
        "↑/↓: Navigate | Enter: Expand/Collapse/Select | c: Collapse all | q: Quit".to_string()
    });
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, chunks[1]);
}

/// Builds one list entry, padded with blank lines to the row's height.
fn row_item<'a>(app: &AppState, row: &VisibleRow<'a>) -> ListItem<'a> {
    let line = match row.content {
        RowContent::ParentLabel(title) => {
            let glyph = if row.expanded { "▾ " } else { "▸ " };
            Line::from(vec![
                Span::raw(glyph),
                Span::styled(
                    title,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        }
        RowContent::ChildLabel(text) => Line::from(vec![
            Span::raw(" ".repeat(app.child_indent)),
            Span::raw(text),
        ]),
    };

    let height = match row.kind() {
        RowKind::ParentRow => app.row_heights.parent,
        RowKind::ChildRow => app.row_heights.child,
    };
    let mut text = Text::from(line);
    for _ in 1..height {
        text.lines.push(Line::default());
    }
    ListItem::new(text)
}
