//! Session state for the terminal front end.
//!
//! The front end plays the renderer's part: it keeps its own idea of how many rows
//! are on screen and where the cursor is, and updates both from the deltas the
//! controller hands back rather than re-deriving them. If its row count ever
//! drifts from the controller's, that is logged, since it means a delta was lost
//! or misapplied.

use crate::controller::{Activation, FlattenedListController, RowHeights};
use crate::delta::Delta;
use crate::error::ListError;
use log::warn;
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// A child row the user activated, printed on exit.
pub struct Selection {
    /// Title of the owning parent.
    pub parent: String,
    /// Text of the selected child.
    pub child: String,
}

/// Cursor, status line and renderer bookkeeping around the controller.
pub struct AppState {
    /// The list state machine.
    pub controller: FlattenedListController,
    /// Flat row under the cursor.
    pub cursor: usize,
    /// Rows the renderer believes are on screen, maintained from deltas only.
    pub rendered_rows: usize,
    /// Most recently selected child.
    pub selection: Option<Selection>,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Heights used when laying out rows.
    pub row_heights: RowHeights,
    /// Spaces drawn before child labels.
    pub child_indent: usize,
}

impl AppState {
    #[must_use]
    /// Starts a session with the cursor on the first row.
    pub fn new(
        controller: FlattenedListController,
        row_heights: RowHeights,
        child_indent: usize,
    ) -> Self {
        let rendered_rows = controller.row_count();
        Self {
            controller,
            cursor: 0,
            rendered_rows,
            selection: None,
            message: None,
            row_heights,
            child_indent,
        }
    }

    /// Moves the cursor one row up, stopping at the top.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one row down, stopping at the bottom.
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.rendered_rows {
            self.cursor += 1;
        }
    }

    /// Jumps to the first row.
    pub fn move_to_first(&mut self) {
        self.cursor = 0;
    }

    /// Jumps to the last row.
    pub fn move_to_last(&mut self) {
        self.cursor = self.rendered_rows.saturating_sub(1);
    }

    /// Activates the row under the cursor and applies the resulting change.
    pub fn activate_current(&mut self) {
        match self.controller.activate(self.cursor) {
            Ok(Activation::ChildSelected {
                parent_title, text, ..
            }) => {
                self.message = Some(format!("Selected {parent_title} > {text}"));
                self.selection = Some(Selection {
                    parent: parent_title,
                    child: text,
                });
            }
            Ok(activation) => {
                if let Some(delta) = activation.delta() {
                    self.apply_delta(delta, None);
                }
                self.message = None;
            }
            Err(e) => self.report(&e),
        }
    }

    /// Collapses every parent, moving the cursor to its parent's header if its row vanished.
    pub fn collapse_all(&mut self) {
        let owner = self.controller.locate(self.cursor).map(|loc| loc.parent);
        let delta = self.controller.collapse_all();
        let fallback = owner.and_then(|parent| self.controller.parent_row(parent));
        self.apply_delta(&delta, fallback.ok());
        self.message = Some("Collapsed all".to_string());
    }

    /// Replays a delta on the renderer side, as a table view would.
    fn apply_delta(&mut self, delta: &Delta, fallback: Option<usize>) {
        match delta.apply_to_count(self.rendered_rows) {
            Some(rows) => self.rendered_rows = rows,
            None => warn!(
                "delta deletes {} rows from a list of {}",
                delta.deleted(),
                self.rendered_rows
            ),
        }
        if self.rendered_rows != self.controller.row_count() {
            warn!(
                "renderer has {} rows but the list has {}; resynchronising",
                self.rendered_rows,
                self.controller.row_count()
            );
            self.rendered_rows = self.controller.row_count();
        }

        self.cursor = delta
            .map_row(self.cursor)
            .or(fallback)
            .unwrap_or(0)
            .min(self.rendered_rows.saturating_sub(1));
    }

    fn report(&mut self, error: &ListError) {
        warn!("activation at row {} failed: {error}", self.cursor);
        self.message = Some(format!("Error: {error}"));
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
