//! Text rendering of the board for terminal display.

use crate::board::Board;
use crate::segment::Segment;
use crate::types::{Owner, Side};

impl Board {
    /// Renders the board as printable text.
    ///
    /// Dots are `*`, drawn segments `---` and `|`. Each cell shows its
    /// value until it is claimed, then the owner's initial. Scores and
    /// dot-coordinate labels frame the grid.
    pub fn render(&self) -> String {
        let scores = self.scores();
        let mut out = format!(
            "Human: {}  AI: {}\n\n",
            scores.of(Side::Human),
            scores.of(Side::Ai)
        );

        let mut header = String::from("   ");
        for x in 0..=self.cols() {
            header.push_str(&format!("{:<4}", x));
        }
        out.push_str(header.trim_end());
        out.push('\n');

        for y in 0..=self.rows() {
            let mut dots = format!("{:>2} ", y);
            for x in 0..self.cols() {
                dots.push('*');
                if self.connected().contains(&Segment::horizontal(x, y)) {
                    dots.push_str("---");
                } else {
                    dots.push_str("   ");
                }
            }
            dots.push('*');
            out.push_str(dots.trim_end());
            out.push('\n');

            if y < self.rows() {
                let mut cells = String::from("   ");
                for x in 0..=self.cols() {
                    if self.connected().contains(&Segment::vertical(x, y)) {
                        cells.push('|');
                    } else {
                        cells.push(' ');
                    }
                    if x < self.cols() {
                        let square = self.square_at(x, y).expect("cell is in range");
                        let mark = match square.owner() {
                            Owner::Unclaimed => char::from(b'0' + square.value()),
                            Owner::Claimed(Side::Human) => 'H',
                            Owner::Claimed(Side::Ai) => 'A',
                        };
                        cells.push(' ');
                        cells.push(mark);
                        cells.push(' ');
                    }
                }
                out.push_str(cells.trim_end());
                out.push('\n');
            }
        }
        out
    }
}
