//! The unit boxes scored during play.

use crate::segment::{Dot, Segment};
use crate::types::{Owner, Side};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One unit box on the board, identified by its top-left dot.
///
/// A square tracks which of its four bounding segments have been drawn.
/// Drawing the fourth completes it, and the side that drew it collects
/// the square's value. The value is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    top_left: Dot,
    top: bool,
    right: bool,
    bottom: bool,
    left: bool,
    complete: bool,
    owner: Owner,
    value: u8,
}

impl Square {
    /// Creates an empty square with the given top-left dot and value.
    pub fn new(top_left: Dot, value: u8) -> Self {
        debug_assert!((1..=5).contains(&value), "box values lie in 1..=5");
        Self {
            top_left,
            top: false,
            right: false,
            bottom: false,
            left: false,
            complete: false,
            owner: Owner::Unclaimed,
            value,
        }
    }

    /// The four bounding segments, in top/right/bottom/left order.
    pub fn sides(&self) -> [Segment; 4] {
        let Dot { x, y } = self.top_left;
        [
            Segment::horizontal(x, y),
            Segment::vertical(x + 1, y),
            Segment::horizontal(x, y + 1),
            Segment::vertical(x, y),
        ]
    }

    /// True when the segment is one of this square's four sides.
    pub fn contains(&self, segment: &Segment) -> bool {
        self.sides().contains(segment)
    }

    /// Draws the given segment on this square, if it is an undrawn side.
    ///
    /// Returns `true` only when the segment is one of the four bounding
    /// segments and that side was not already drawn. A segment belonging
    /// to some other square, or a side drawn earlier, is an expected
    /// no-op returning `false`. Recomputes completion afterward.
    pub fn apply(&mut self, segment: &Segment) -> bool {
        let [top, right, bottom, left] = self.sides();
        let success = if *segment == top && !self.top {
            self.top = true;
            true
        } else if *segment == right && !self.right {
            self.right = true;
            true
        } else if *segment == bottom && !self.bottom {
            self.bottom = true;
            true
        } else if *segment == left && !self.left {
            self.left = true;
            true
        } else {
            false
        };
        self.complete = self.top && self.right && self.bottom && self.left;
        success
    }

    /// Assigns the square to the side that completed it.
    ///
    /// Owners are assigned at most once; later calls are ignored.
    pub(crate) fn claim(&mut self, side: Side) {
        if self.owner == Owner::Unclaimed {
            debug!(square = %self.top_left, %side, value = self.value, "box claimed");
            self.owner = Owner::Claimed(side);
        }
    }

    /// Top-left dot identifying this square.
    pub fn top_left(&self) -> Dot {
        self.top_left
    }

    /// Point value collected by whoever completes this square.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Claim state.
    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// True when all four sides are drawn.
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Square {
        Square::new(Dot::new(0, 0), 3)
    }

    #[test]
    fn test_apply_foreign_segment_is_noop() {
        let mut sq = square();
        assert!(!sq.apply(&Segment::horizontal(5, 5)));
        assert!(!sq.is_complete());
    }

    #[test]
    fn test_apply_is_idempotent_per_side() {
        let mut sq = square();
        let top = Segment::horizontal(0, 0);
        assert!(sq.apply(&top));
        assert!(!sq.apply(&top));
    }

    #[test]
    fn test_completes_only_after_all_four_sides() {
        let mut sq = square();
        let [top, right, bottom, left] = sq.sides();
        for side in [top, right, bottom] {
            assert!(sq.apply(&side));
            assert!(!sq.is_complete());
        }
        assert!(sq.apply(&left));
        assert!(sq.is_complete());
    }

    #[test]
    fn test_owner_assigned_at_most_once() {
        let mut sq = square();
        sq.claim(Side::Human);
        sq.claim(Side::Ai);
        assert_eq!(sq.owner(), Owner::Claimed(Side::Human));
    }
}
