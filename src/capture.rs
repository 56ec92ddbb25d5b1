//! Capture detection: enclosure search, interior classification and
//! application of captures to the board.
//!
//! [`detect_capture`] is called once after every placement. It finds the
//! cycles closed by the last stone, classifies the cells inside each one
//! and, for every cycle that surrounds at least one enemy stone:
//!
//! - marks those enemy stones dead and credits the placer,
//! - turns the empty interior cells into dead cells,
//! - records the cycle as an [`Enclosure`].
//!
//! Nothing here can fail. Degenerate positions simply produce no capture.

use std::collections::HashSet;

use log::{debug, info};

use crate::board::{Board, Enclosure, GridIndex, PlayerId, Point, Stone};
use crate::constants::{MAX_PATH_LEN, MIN_OWN_STONES, MIN_STONES_ON_BOARD};
use crate::direction::Transitions;
use crate::player::Players;
use crate::search::find_cycles;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Paths longer than this are abandoned during the cycle search.
    pub max_path_len: usize,
    /// Allowed-next table for the search.
    pub transitions: Transitions,
    /// Also turn the empty interior of enemy-free cycles into dead cells.
    /// Such cycles still capture nothing and are not recorded.
    pub seal_empty_interiors: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_path_len: MAX_PATH_LEN,
            transitions: Transitions::standard(),
            seal_empty_interiors: false,
        }
    }
}

/// Outcome of a capturing placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capture {
    /// Enemy stones taken by this placement.
    pub captured: u32,
    /// The cycles recorded as enclosures by this placement.
    pub cycles: Vec<Vec<Point>>,
}

/// Cells strictly inside a cycle that matter for capture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interior {
    /// Indices into the stone list of live enemy stones.
    pub enemies: Vec<usize>,
    /// Cells with no stone at all.
    pub empties: Vec<Point>,
}

/// Ray-casting point-in-polygon test (odd number of crossings).
///
/// Uses the classic half-open edge rule, evaluated exactly in integers.
pub fn point_in_polygon((x, y): Point, polygon: &[Point]) -> bool {
    let (x, y) = (i64::from(x), i64::from(y));
    let mut inside = false;
    let mut j = polygon.len().wrapping_sub(1);
    for (i, &(xi, yi)) in polygon.iter().enumerate() {
        let (xi, yi) = (i64::from(xi), i64::from(yi));
        let (xj, yj) = (i64::from(polygon[j].0), i64::from(polygon[j].1));
        if (yi > y) != (yj > y) {
            // x < xi + (xj - xi) * (y - yi) / (yj - yi), without dividing.
            let dy = yj - yi;
            let lhs = (x - xi) * dy;
            let rhs = (xj - xi) * (y - yi);
            if (dy > 0 && lhs < rhs) || (dy < 0 && lhs > rhs) {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Scan the cycle's bounding box (grown by one) for enemy stones and empty cells.
///
/// The placer's own stones and cells holding captured stones are skipped.
pub fn classify_interior(
    cycle: &[Point],
    stones: &[Stone],
    index: &GridIndex,
    player: PlayerId,
) -> Interior {
    let mut interior = Interior::default();
    let Some(&(fx, fy)) = cycle.first() else {
        return interior;
    };
    let walls: HashSet<Point> = cycle.iter().copied().collect();
    let (mut x0, mut y0, mut x1, mut y1) = (fx, fy, fx, fy);
    for &(x, y) in cycle {
        x0 = x0.min(x);
        y0 = y0.min(y);
        x1 = x1.max(x);
        y1 = y1.max(y);
    }

    // The box grown by one may leave the i32 grid; those cells hold nothing.
    let rows = (i64::from(y0) - 1..=i64::from(y1) + 1).filter_map(|y| i32::try_from(y).ok());
    for y in rows {
        let cols = (i64::from(x0) - 1..=i64::from(x1) + 1).filter_map(|x| i32::try_from(x).ok());
        for x in cols {
            let pt = (x, y);
            if walls.contains(&pt) || !point_in_polygon(pt, cycle) {
                continue;
            }
            match index.alive_at(pt) {
                Some(i) if stones[i].player != player => interior.enemies.push(i),
                Some(_) => {}
                None if index.is_empty(pt) => interior.empties.push(pt),
                None => {}
            }
        }
    }
    interior
}

/// Look for captures made by the last stone on the board.
///
/// Returns `None` when nothing was captured. Board and scores are updated
/// in place.
pub fn detect_capture(board: &mut Board, players: &mut Players, rules: &Rules) -> Option<Capture> {
    if board.stones().len() < MIN_STONES_ON_BOARD {
        return None;
    }
    let last = board.last_stone()?.clone();
    if board.live_stones_with(last.tag) < MIN_OWN_STONES {
        return None;
    }

    let index = GridIndex::build(board.stones());
    let cycles = find_cycles(
        board.stones(),
        &index,
        last.point,
        last.player,
        &rules.transitions,
        rules.max_path_len,
    );
    if cycles.is_empty() {
        return None;
    }
    debug!(
        "player {} at {:?} closes {} cycle(s)",
        last.player,
        last.point,
        cycles.len()
    );

    let mut captured = 0u32;
    let mut enclosing = Vec::new();
    for cycle in cycles {
        let interior = classify_interior(&cycle, board.stones(), &index, last.player);
        if interior.enemies.is_empty() {
            if rules.seal_empty_interiors {
                for &pt in &interior.empties {
                    board.add_dead_cell(pt);
                }
            }
            continue;
        }

        let mut taken = 0u32;
        for &i in &interior.enemies {
            let stone = &mut board.stones_mut()[i];
            if stone.alive {
                stone.alive = false;
                taken += 1;
            }
        }
        players.add_score(last.player, taken);
        captured += taken;

        for &pt in &interior.empties {
            board.add_dead_cell(pt);
        }
        info!(
            "player {} encloses {} stone(s) with a {}-stone cycle",
            last.player,
            taken,
            cycle.len()
        );
        board.add_enclosure(Enclosure {
            owner: last.player,
            vertices: cycle.clone(),
        });
        enclosing.push(cycle);
    }

    (captured > 0).then_some(Capture {
        captured,
        cycles: enclosing,
    })
}
