//! Line sweep: the consumer half of the lock hand-off
//!
//! Reads the rows staged by the last lock, deduplicates them, clears the
//! ones that are completely filled, and collapses the rows above. Built
//! on the same public row-record contract an external consumer would
//! use, so hosts that want their own clear pass can replace it.

use arrayvec::ArrayVec;

use crate::core::board::Board;

impl Board {
    /// Clear every completed row staged by the last lock and re-enable
    /// locking.
    ///
    /// Returns the cleared row indices in ascending order; empty when no
    /// rows were staged or none of them were complete. Incomplete staged
    /// rows are left as they are.
    pub fn clear_staged_rows(&mut self) -> ArrayVec<i8, 4> {
        let mut cleared = ArrayVec::new();
        let Some(rows) = self.take_staged_rows() else {
            return cleared;
        };

        let mut unique: ArrayVec<i8, 4> = ArrayVec::new();
        for row in rows {
            if !unique.contains(&row) {
                unique.push(row);
            }
        }
        unique.sort_unstable();

        for &row in &unique {
            if self.playfield().is_row_full(row) {
                cleared.push(row);
            }
        }

        // Remove top-down so the lower indices stay valid while rows
        // above collapse.
        for &row in cleared.iter().rev() {
            self.playfield_mut().remove_row(row);
        }

        cleared
    }
}
