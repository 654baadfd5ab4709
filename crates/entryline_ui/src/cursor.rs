//! Mapping between buffer indices and wrapped screen positions
//!
//! A logical line starts at a fixed screen cell and flows left to right,
//! continuing at column 0 of the next row whenever it reaches the terminal's
//! right edge.

use entryline_hal::CursorPosition;

/// Where a logical line starts and how wide the screen is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineGeometry {
    start: CursorPosition,
    width: u16,
}

impl LineGeometry {
    /// A zero width is treated as one column.
    pub fn new(start: CursorPosition, width: u16) -> Self {
        Self {
            start,
            width: width.max(1),
        }
    }

    pub fn start(&self) -> CursorPosition {
        self.start
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Follow the line after the screen scrolled up by `rows`. The start never
    /// moves above row 0.
    pub fn scroll_up(&mut self, rows: u16) {
        self.start.row = self.start.row.saturating_sub(rows);
    }

    /// Screen cell of the character at `index`.
    ///
    /// Rows past `u16::MAX` saturate.
    pub fn position_for_index(&self, index: usize) -> CursorPosition {
        let width = usize::from(self.width);
        let offset = index + usize::from(self.start.column);
        let row = usize::from(self.start.row) + offset / width;

        CursorPosition {
            column: (offset % width) as u16,
            row: u16::try_from(row).unwrap_or(u16::MAX),
        }
    }

    /// Buffer index shown at `position`, or `None` if the cell lies before the
    /// start of the line.
    pub fn index_for_position(&self, position: CursorPosition) -> Option<usize> {
        let width = i64::from(self.width);
        let rows = i64::from(position.row) - i64::from(self.start.row);
        let columns = i64::from(position.column) - i64::from(self.start.column);

        usize::try_from(rows * width + columns).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_on_first_row() {
        let geometry = LineGeometry::new(CursorPosition::new(2, 5), 10);
        assert_eq!(geometry.position_for_index(0), CursorPosition::new(2, 5));
        assert_eq!(geometry.position_for_index(7), CursorPosition::new(9, 5));
    }

    #[test]
    fn index_wraps_to_following_rows() {
        let geometry = LineGeometry::new(CursorPosition::new(2, 5), 10);
        assert_eq!(geometry.position_for_index(8), CursorPosition::new(0, 6));
        assert_eq!(geometry.position_for_index(28), CursorPosition::new(0, 8));
    }

    #[test]
    fn position_on_wrapped_row_maps_back() {
        let geometry = LineGeometry::new(CursorPosition::new(2, 5), 10);
        assert_eq!(geometry.index_for_position(CursorPosition::new(0, 6)), Some(8));
        assert_eq!(geometry.index_for_position(CursorPosition::new(1, 7)), Some(19));
    }

    #[test]
    fn position_before_start_has_no_index() {
        let geometry = LineGeometry::new(CursorPosition::new(4, 3), 10);
        assert_eq!(geometry.index_for_position(CursorPosition::new(3, 3)), None);
        assert_eq!(geometry.index_for_position(CursorPosition::new(9, 2)), None);
    }

    #[test]
    fn scrolling_moves_every_index_up() {
        let mut geometry = LineGeometry::new(CursorPosition::new(3, 4), 8);
        geometry.scroll_up(2);
        assert_eq!(geometry.start(), CursorPosition::new(3, 2));
        assert_eq!(geometry.position_for_index(5), CursorPosition::new(0, 3));
        geometry.scroll_up(9);
        assert_eq!(geometry.start().row, 0);
    }

    #[test]
    fn zero_width_is_clamped() {
        let geometry = LineGeometry::new(CursorPosition::new(0, 0), 0);
        assert_eq!(geometry.width(), 1);
        assert_eq!(geometry.position_for_index(3), CursorPosition::new(0, 3));
    }

    #[test]
    fn rows_saturate() {
        let geometry = LineGeometry::new(CursorPosition::new(0, u16::MAX), 1);
        assert_eq!(geometry.position_for_index(10).row, u16::MAX);
    }
}
