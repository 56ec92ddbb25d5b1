//! Direction states and the transition table that drives the cycle search.
//!
//! A direction state describes both the geometric step taken to reach a
//! stone and the context of that step. There are four families:
//!
//! - [`Direction::Diagonal`] - a unit diagonal step
//! - [`Direction::Cardinal`] - a unit orthogonal step
//! - [`Direction::Probe`] - a doubled orthogonal step, only used to test a jump
//! - [`Direction::Landed`] - arrival after a jump over an empty cell
//!
//! The y axis grows upward, so North is `(0, 1)`.

use std::fmt;

use thiserror::Error;

/// The four orthogonal directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cardinal {
    East,
    North,
    West,
    South,
}

impl Cardinal {
    pub const ALL: [Cardinal; 4] = [
        Cardinal::East,
        Cardinal::North,
        Cardinal::West,
        Cardinal::South,
    ];

    /// Unit step vector.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Cardinal::East => (1, 0),
            Cardinal::North => (0, 1),
            Cardinal::West => (-1, 0),
            Cardinal::South => (0, -1),
        }
    }
}

/// The four diagonal directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Diagonal {
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Diagonal {
    pub const ALL: [Diagonal; 4] = [
        Diagonal::NorthEast,
        Diagonal::SouthEast,
        Diagonal::SouthWest,
        Diagonal::NorthWest,
    ];

    /// Unit step vector.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Diagonal::NorthEast => (1, 1),
            Diagonal::SouthEast => (1, -1),
            Diagonal::SouthWest => (-1, -1),
            Diagonal::NorthWest => (-1, 1),
        }
    }
}

/// A traversal-time direction state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Diagonal(Diagonal),
    Cardinal(Cardinal),
    Probe(Cardinal),
    Landed(Cardinal),
}

use Cardinal::{East, North, South, West};
use Diagonal::{NorthEast, NorthWest, SouthEast, SouthWest};
use Direction::{Cardinal as C, Diagonal as D, Landed as L, Probe as P};

impl Direction {
    /// All 16 states, in legacy code order (code 1 first).
    pub const ALL: [Direction; 16] = [
        D(NorthEast),
        D(SouthEast),
        D(SouthWest),
        D(NorthWest),
        C(East),
        C(North),
        C(West),
        C(South),
        P(East),
        P(North),
        P(West),
        P(South),
        L(East),
        L(North),
        L(West),
        L(South),
    ];

    /// The eight states tried from the freshly placed stone.
    pub const ELEMENTARY: [Direction; 8] = [
        D(NorthEast),
        D(SouthEast),
        D(SouthWest),
        D(NorthWest),
        C(East),
        C(North),
        C(West),
        C(South),
    ];

    /// Position of this state in [`Direction::ALL`].
    pub const fn index(self) -> usize {
        let (family, offset) = match self {
            D(d) => (0, d as usize),
            C(c) => (1, c as usize),
            P(c) => (2, c as usize),
            L(c) => (3, c as usize),
        };
        family * 4 + offset
    }

    /// Legacy numeric code (1..=16), handy in log output.
    pub const fn code(self) -> usize {
        self.index() + 1
    }

    /// Step vector. Probes are doubled, landed states reuse the cardinal step.
    pub const fn step(self) -> (i32, i32) {
        match self {
            D(d) => d.step(),
            C(c) | L(c) => c.step(),
            P(c) => {
                let (dx, dy) = c.step();
                (dx * 2, dy * 2)
            }
        }
    }

    /// True for the states a candidate list may name.
    pub const fn is_stepping(self) -> bool {
        matches!(self, D(_) | C(_))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            D(d) => write!(f, "{d:?}"),
            C(c) => write!(f, "{c:?}"),
            P(c) => write!(f, "Probe{c:?}"),
            L(c) => write!(f, "Landed{c:?}"),
        }
    }
}

/// A malformed transition table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("state {0} has no candidate directions")]
    Empty(Direction),
    #[error("state {state} lists {candidate}, which cannot be stepped into")]
    NotStepping {
        state: Direction,
        candidate: Direction,
    },
    #[error("probe state {0} must lead only to its own landed state")]
    BadProbe(Direction),
}

/// Candidate list type for a single state.
pub type Candidates = &'static [Direction];

const STANDARD: [Candidates; 16] = [
    // Diagonals
    &[D(NorthWest), C(North), D(NorthEast), C(East), D(SouthEast)],
    &[D(NorthEast), C(East), D(SouthEast), C(South), D(NorthWest)],
    &[D(NorthWest), C(West), D(SouthWest), C(South), D(SouthEast)],
    &[D(NorthEast), D(SouthWest), C(North), D(NorthWest), C(West)],
    // Cardinals
    &[D(NorthEast), C(East), D(SouthEast)],
    &[D(NorthEast), C(North), D(NorthWest)],
    &[D(NorthWest), C(West), D(SouthWest)],
    &[D(SouthEast), C(South), D(SouthWest)],
    // Probes
    &[L(East)],
    &[L(North)],
    &[L(West)],
    &[L(South)],
    // Landed after a jump
    &[C(North), D(NorthEast), C(East), D(SouthEast), C(South)],
    &[C(East), D(NorthEast), C(North), D(NorthWest), C(West)],
    &[C(South), D(NorthWest), C(West), D(SouthWest), C(North)],
    &[C(West), D(SouthEast), C(South), D(SouthWest), C(East)],
];

/// Allowed-next mapping, indexed by [`Direction::index`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transitions {
    next: [Candidates; 16],
}

impl Default for Transitions {
    fn default() -> Self {
        Self::standard()
    }
}

impl Transitions {
    /// Build a table after checking it is usable by the search.
    pub fn new(next: [Candidates; 16]) -> Result<Self, TableError> {
        for state in Direction::ALL {
            let candidates = next[state.index()];
            if candidates.is_empty() {
                return Err(TableError::Empty(state));
            }
            match state {
                P(c) => {
                    if candidates != [L(c)] {
                        return Err(TableError::BadProbe(state));
                    }
                }
                _ => {
                    if let Some(&candidate) = candidates.iter().find(|d| !d.is_stepping()) {
                        return Err(TableError::NotStepping { state, candidate });
                    }
                }
            }
        }
        Ok(Self { next })
    }

    /// The fixed table used by the game.
    pub const fn standard() -> Self {
        Self { next: STANDARD }
    }

    /// Candidate next states after arriving in `state`.
    #[inline]
    pub fn allowed_next(&self, state: Direction) -> Candidates {
        self.next[state.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        assert_eq!(Transitions::new(STANDARD), Ok(Transitions::standard()));
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.index(), i, "{d} out of order");
            assert_eq!(d.code(), i + 1);
        }
    }

    #[test]
    fn test_steps() {
        assert_eq!(D(NorthEast).step(), (1, 1));
        assert_eq!(D(SouthEast).step(), (1, -1));
        assert_eq!(C(North).step(), (0, 1));
        assert_eq!(P(West).step(), (-2, 0));
        assert_eq!(L(South).step(), C(South).step());
    }

    #[test]
    fn test_elementary_are_stepping() {
        assert!(Direction::ELEMENTARY.iter().all(|d| d.is_stepping()));
        assert!(!P(East).is_stepping());
        assert!(!L(East).is_stepping());
    }

    #[test]
    fn test_landed_candidates_turn_back_to_cardinals() {
        let t = Transitions::standard();
        for c in Cardinal::ALL {
            let next = t.allowed_next(L(c));
            assert_eq!(next.len(), 5);
            assert_eq!(next.iter().filter(|d| matches!(d, C(_))).count(), 3);
        }
    }

    #[test]
    fn test_rejects_empty_entry() {
        let mut table = STANDARD;
        table[C(East).index()] = &[];
        assert_eq!(Transitions::new(table), Err(TableError::Empty(C(East))));
    }

    #[test]
    fn test_rejects_landed_candidate() {
        let mut table = STANDARD;
        table[D(NorthEast).index()] = &[L(North)];
        assert_eq!(
            Transitions::new(table),
            Err(TableError::NotStepping {
                state: D(NorthEast),
                candidate: L(North),
            })
        );
    }

    #[test]
    fn test_rejects_crossed_probe() {
        let mut table = STANDARD;
        table[P(East).index()] = &[L(West)];
        assert_eq!(Transitions::new(table), Err(TableError::BadProbe(P(East))));
    }
}
