//! Slot grid geometry.

/// Default number of columns in the slot grid.
pub const DEFAULT_COLUMNS: u32 = 4;
/// Default number of rows in the slot grid.
pub const DEFAULT_ROWS: u32 = 4;

/// A fixed grid of slots addressed by item id.
///
/// Slots are numbered row-major starting at 1, so cell `i` holds slot `i + 1`.
/// Ids are never remapped onto cells: a catalog whose ids fall outside
/// `1..=capacity` simply leaves those items off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGrid {
    pub columns: u32,
    pub rows: u32,
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl SlotGrid {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Total number of slots, saturating at `u32::MAX`.
    pub fn capacity(&self) -> u32 {
        self.columns.saturating_mul(self.rows)
    }

    /// Total number of slots, or `None` if the grid has more cells than
    /// there are slot ids.
    pub fn checked_capacity(&self) -> Option<u32> {
        self.columns.checked_mul(self.rows)
    }

    /// Whether a slot id has a cell in this grid.
    pub fn contains(&self, id: u32) -> bool {
        (1..=self.capacity()).contains(&id)
    }

    /// Every slot id in display order.
    pub fn slot_ids(&self) -> impl Iterator<Item = u32> {
        1..=self.capacity()
    }

    /// Slot ids grouped by row, top to bottom.
    ///
    /// Rows past the last addressable id come out empty.
    pub fn rows_of_slots(&self) -> impl DoubleEndedIterator<Item = Vec<u32>> {
        let columns = u64::from(self.columns);
        let capacity = u64::from(self.capacity());
        (0..self.rows).map(move |row| {
            let start = u64::from(row) * columns + 1;
            let end = (start + columns - 1).min(capacity);
            // end <= capacity <= u32::MAX
            (start..=end).map(|id| id as u32).collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_four_by_four() {
        let grid = SlotGrid::default();
        assert_eq!(grid.capacity(), 16);
        assert_eq!(grid.slot_ids().collect::<Vec<_>>(), (1..=16).collect::<Vec<_>>());
    }

    #[test]
    fn test_contains() {
        let grid = SlotGrid::default();
        assert!(!grid.contains(0));
        assert!(grid.contains(1));
        assert!(grid.contains(16));
        assert!(!grid.contains(17));
    }

    #[test]
    fn test_rows_are_row_major() {
        let grid = SlotGrid::new(3, 2);
        let rows: Vec<Vec<u32>> = grid.rows_of_slots().collect();
        assert_eq!(rows, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn test_empty_grid() {
        let grid = SlotGrid::new(0, 4);
        assert_eq!(grid.capacity(), 0);
        assert!(!grid.contains(1));
        assert_eq!(grid.slot_ids().count(), 0);
        assert!(grid.rows_of_slots().all(|row| row.is_empty()));
    }

    #[test]
    fn test_oversized_grid_saturates() {
        let grid = SlotGrid::new(u32::MAX, 2);
        assert_eq!(grid.checked_capacity(), None);
        assert_eq!(grid.capacity(), u32::MAX);
        assert!(grid.contains(u32::MAX));
        assert_eq!(grid.rows_of_slots().next_back(), Some(Vec::new()));
    }

    #[test]
    fn test_last_row_ends_at_max_id() {
        // 65537 * 65535 == u32::MAX
        let grid = SlotGrid::new(65537, 65535);
        assert_eq!(grid.checked_capacity(), Some(u32::MAX));

        let last = grid.rows_of_slots().next_back().unwrap();
        assert_eq!(last.len(), 65537);
        assert_eq!(last.first(), Some(&(u32::MAX - 65536)));
        assert_eq!(last.last(), Some(&u32::MAX));
    }
}
