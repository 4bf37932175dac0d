//! Keyboard navigation over the board's segments.

use crossterm::event::KeyCode;
use dots_and_boxes::Segment;

/// A selectable segment position: a base dot plus an orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentCursor {
    /// Column of the segment's lesser dot.
    pub x: usize,
    /// Row of the segment's lesser dot.
    pub y: usize,
    /// True when the cursor sits on a horizontal segment.
    pub horizontal: bool,
}

impl SegmentCursor {
    /// Starts at the board's top-left horizontal segment.
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            horizontal: true,
        }
    }

    /// The segment currently under the cursor.
    pub fn segment(&self) -> Segment {
        if self.horizontal {
            Segment::horizontal(self.x, self.y)
        } else {
            Segment::vertical(self.x, self.y)
        }
    }

    fn clamped(mut self, rows: usize, cols: usize) -> Self {
        let (max_x, max_y) = if self.horizontal {
            (cols - 1, rows)
        } else {
            (cols, rows - 1)
        };
        self.x = self.x.min(max_x);
        self.y = self.y.min(max_y);
        self
    }
}

impl Default for SegmentCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Moves the cursor for an arrow key, or flips its orientation on Tab or
/// `o`. Other keys leave it unchanged. The cursor never leaves the board.
pub fn move_cursor(
    cursor: SegmentCursor,
    key: KeyCode,
    rows: usize,
    cols: usize,
) -> SegmentCursor {
    let mut next = cursor;
    match key {
        KeyCode::Left => next.x = next.x.saturating_sub(1),
        KeyCode::Right => next.x += 1,
        KeyCode::Up => next.y = next.y.saturating_sub(1),
        KeyCode::Down => next.y += 1,
        KeyCode::Tab | KeyCode::Char('o') => next.horizontal = !next.horizontal,
        _ => return cursor,
    }
    next.clamped(rows, cols)
}
