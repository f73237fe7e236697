//! Per-class tallies of applied moves.

use std::fmt;
use std::ops::AddAssign;

/// How a move changed the board, as decided at application time.
///
/// Checked in declaration order: a promoting capture is a `Promotion`,
/// never a `Capture`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveClass {
    Promotion,
    Castle,
    EnPassant,
    Capture,
    Quiet,
}

/// Tallies of applied moves, one counter per [`MoveClass`].
///
/// Owned by the caller; move application returns a [`MoveClass`] and the
/// caller decides whether to [`record`](Counters::record) it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    quiet: u64,
    captures: u64,
    promotions: u64,
    castles: u64,
    en_passants: u64,
}

impl Counters {
    /// Create zeroed counters.
    pub const fn new() -> Counters {
        Counters {
            quiet: 0,
            captures: 0,
            promotions: 0,
            castles: 0,
            en_passants: 0,
        }
    }

    /// Count one applied move.
    #[inline]
    pub fn record(&mut self, class: MoveClass) {
        match class {
            MoveClass::Promotion => self.promotions += 1,
            MoveClass::Castle => self.castles += 1,
            MoveClass::EnPassant => self.en_passants += 1,
            MoveClass::Capture => self.captures += 1,
            MoveClass::Quiet => self.quiet += 1,
        }
    }

    pub fn quiet(&self) -> u64 {
        self.quiet
    }

    pub fn captures(&self) -> u64 {
        self.captures
    }

    pub fn promotions(&self) -> u64 {
        self.promotions
    }

    pub fn castles(&self) -> u64 {
        self.castles
    }

    pub fn en_passants(&self) -> u64 {
        self.en_passants
    }

    /// Total number of recorded moves.
    pub fn total(&self) -> u64 {
        self.quiet + self.captures + self.promotions + self.castles + self.en_passants
    }
}

impl AddAssign for Counters {
    fn add_assign(&mut self, rhs: Counters) {
        self.quiet += rhs.quiet;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.castles += rhs.castles;
        self.en_passants += rhs.en_passants;
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "captures: {} promotions: {} castles: {} quiet: {} en passant: {}",
            self.captures, self.promotions, self.castles, self.quiet, self.en_passants
        )
    }
}
