//! Cycle search over the direction-constrained movement graph.
//!
//! Starting from the freshly placed stone, the search walks from stone to
//! stone of the same player. Which steps are allowed depends on the
//! direction state the current stone was reached with (see
//! [`Transitions`]). An orthogonal step onto an empty cell turns into a
//! jump: if the cell beyond holds an own stone, the walk lands there in
//! the matching `Landed` state. Diagonal steps never jump.
//!
//! Paths are kept on an explicit stack rather than in recursion. Any path
//! longer than the configured cap is dropped.

use std::collections::HashSet;

use log::{debug, trace};

use crate::board::{GridIndex, PlayerId, Point, Stone};
use crate::constants::MIN_CYCLE_LEN;
use crate::direction::{Direction, Transitions};

/// Read-only view of the board from one player's perspective.
struct Walker<'a> {
    stones: &'a [Stone],
    index: &'a GridIndex,
    player: PlayerId,
    transitions: &'a Transitions,
}

impl Walker<'_> {
    #[inline]
    fn is_own(&self, pt: Point) -> bool {
        self.index.is_own(self.stones, pt, self.player)
    }

    /// Try to move from `from` in direction `dir`.
    ///
    /// Returns the stone reached and the state it was reached in.
    fn step(&self, from: Point, dir: Direction) -> Option<(Point, Direction)> {
        let target = offset(from, dir.step())?;
        if self.is_own(target) {
            return Some((target, dir));
        }
        let Direction::Cardinal(c) = dir else {
            return None;
        };
        if !self.index.is_empty(target) {
            return None;
        }
        let probe = Direction::Probe(c);
        let landing = offset(from, probe.step())?;
        if !self.is_own(landing) {
            return None;
        }
        let landed = self.transitions.allowed_next(probe)[0];
        Some((landing, landed))
    }
}

/// `from` moved by `(dx, dy)`, or `None` past the edge of the `i32` grid.
#[inline]
fn offset((x, y): Point, (dx, dy): (i32, i32)) -> Option<Point> {
    Some((x.checked_add(dx)?, y.checked_add(dy)?))
}

/// Find every distinct cycle through own stones reachable from `origin`.
///
/// Cycles are returned in discovery order, one representative per
/// rotation/reflection class.
///
/// Every simple path is explored, so running time grows exponentially with
/// the size of a dense cluster of own stones. `max_path_len` limits path
/// length only, not the number of paths.
pub fn find_cycles(
    stones: &[Stone],
    index: &GridIndex,
    origin: Point,
    player: PlayerId,
    transitions: &Transitions,
    max_path_len: usize,
) -> Vec<Vec<Point>> {
    let walker = Walker {
        stones,
        index,
        player,
        transitions,
    };
    let mut seen: HashSet<Vec<Point>> = HashSet::new();
    let mut cycles = Vec::new();
    let mut stack: Vec<(Vec<Point>, Direction)> = Vec::new();

    for dir in Direction::ELEMENTARY {
        if let Some((pt, state)) = walker.step(origin, dir) {
            stack.push((vec![origin, pt], state));
        }
    }

    while let Some((path, arrived)) = stack.pop() {
        if path.len() > max_path_len {
            trace!("dropping path of {} stones at {:?}", path.len(), path.last());
            continue;
        }
        let cur = path[path.len() - 1];

        for &dir in transitions.allowed_next(arrived) {
            let Some((target, state)) = walker.step(cur, dir) else {
                continue;
            };
            if path.len() >= 2 && path[path.len() - 2] == target {
                continue;
            }
            if let Some(i) = path.iter().position(|&p| p == target) {
                if let Some(cycle) = close_cycle(&path, i) {
                    if seen.insert(canonical_key(&cycle)) {
                        debug!("cycle of {} stones via {}", cycle.len(), dir);
                        cycles.push(cycle);
                    }
                }
                continue;
            }
            let mut next = Vec::with_capacity(path.len() + 1);
            next.extend_from_slice(&path);
            next.push(target);
            stack.push((next, state));
        }
    }
    cycles
}

/// The closed sub-path starting at `start`, if it is long enough to enclose.
pub fn close_cycle(path: &[Point], start: usize) -> Option<Vec<Point>> {
    let cycle = path.get(start..)?;
    (cycle.len() >= MIN_CYCLE_LEN).then(|| cycle.to_vec())
}

/// Rotation- and reflection-invariant key for a cycle.
///
/// The smallest sequence among all rotations of the cycle and of its
/// reversal.
pub fn canonical_key(cycle: &[Point]) -> Vec<Point> {
    let reversed: Vec<Point> = cycle.iter().rev().copied().collect();
    let mut best: Option<Vec<Point>> = None;
    for seq in [cycle, reversed.as_slice()] {
        for start in 0..seq.len() {
            let variant: Vec<Point> = seq[start..].iter().chain(&seq[..start]).copied().collect();
            if best.as_ref().is_none_or(|b| variant < *b) {
                best = Some(variant);
            }
        }
    }
    best.unwrap_or_default()
}
