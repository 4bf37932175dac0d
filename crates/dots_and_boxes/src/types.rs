//! Core domain types shared across the crate.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A competing side in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Side {
    /// The human player.
    Human,
    /// The computer opponent.
    #[strum(serialize = "AI")]
    Ai,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Ai,
            Side::Ai => Side::Human,
        }
    }
}

/// Claim state of a box.
///
/// A box starts unclaimed and is claimed exactly once, by whichever side
/// draws its final bounding segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    /// Not yet completed by either side.
    Unclaimed,
    /// Completed and scored by the given side.
    Claimed(Side),
}

/// Cumulative box values collected by each side.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new,
)]
pub struct Scores {
    /// Points collected by the human player.
    human: u32,
    /// Points collected by the computer opponent.
    ai: u32,
}

impl Scores {
    /// Returns the given side's score.
    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human,
            Side::Ai => self.ai,
        }
    }

    /// Returns the side currently ahead, or `None` on a tie.
    pub fn leader(&self) -> Option<Side> {
        match self.human.cmp(&self.ai) {
            std::cmp::Ordering::Greater => Some(Side::Human),
            std::cmp::Ordering::Less => Some(Side::Ai),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub(crate) fn credit(&mut self, side: Side, value: u32) {
        match side {
            Side::Human => self.human += value,
            Side::Ai => self.ai += value,
        }
    }
}
