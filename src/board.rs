//! Board state on an unbounded integer grid.
//!
//! The [`Board`] owns every stone ever placed, the set of dead cells and the
//! enclosure list. Captured stones are never removed, only marked dead, so
//! their coordinates stay occupied for the rest of the game.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

/// A grid coordinate `(x, y)`; y grows upward.
pub type Point = (i32, i32);

/// Player identifier as stored on stones.
pub type PlayerId = u8;

/// Stone outline, used only for drawing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    Pentagon,
}

/// Rendering tag carried by each stone. The capture engine only compares it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoneTag {
    pub color: u32,
    pub shape: Shape,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stone {
    pub point: Point,
    pub player: PlayerId,
    pub tag: StoneTag,
    pub alive: bool,
}

impl Stone {
    pub fn new(point: Point, player: PlayerId, tag: StoneTag) -> Self {
        Self {
            point,
            player,
            tag,
            alive: true,
        }
    }
}

/// A closed cycle of stones that captured something, with its owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enclosure {
    pub owner: PlayerId,
    pub vertices: Vec<Point>,
}

/// Everything the capture engine reads and mutates.
#[derive(Clone, Debug, Default)]
pub struct Board {
    stones: Vec<Stone>,
    dead_cells: BTreeSet<Point>,
    enclosures: Vec<Enclosure>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all stones, dead cells and enclosures.
    pub fn clear(&mut self) {
        self.stones.clear();
        self.dead_cells.clear();
        self.enclosures.clear();
    }

    pub fn stones(&self) -> &[Stone] {
        &self.stones
    }

    pub fn stones_mut(&mut self) -> &mut [Stone] {
        &mut self.stones
    }

    /// Append a stone. Occupancy is the caller's concern.
    pub fn push_stone(&mut self, stone: Stone) {
        self.stones.push(stone);
    }

    /// Remove the most recent stone at `point` owned by `player`.
    pub fn remove_last_stone(&mut self, point: Point, player: PlayerId) -> Option<Stone> {
        let i = self
            .stones
            .iter()
            .rposition(|s| s.point == point && s.player == player)?;
        Some(self.stones.remove(i))
    }

    pub fn last_stone(&self) -> Option<&Stone> {
        self.stones.last()
    }

    /// The live stone at `point`, or else any captured stone there.
    pub fn stone_at(&self, point: Point) -> Option<&Stone> {
        let mut found = None;
        for s in self.stones.iter().filter(|s| s.point == point) {
            if s.alive {
                return Some(s);
            }
            found = Some(s);
        }
        found
    }

    pub fn is_dead_cell(&self, point: Point) -> bool {
        self.dead_cells.contains(&point)
    }

    /// True if a stone (alive or captured) sits at `point` or it is a dead cell.
    pub fn is_occupied(&self, point: Point) -> bool {
        self.is_dead_cell(point) || self.stones.iter().any(|s| s.point == point)
    }

    pub fn dead_cells(&self) -> &BTreeSet<Point> {
        &self.dead_cells
    }

    /// Register a dead cell. Returns false if it was already dead.
    pub fn add_dead_cell(&mut self, point: Point) -> bool {
        self.dead_cells.insert(point)
    }

    pub fn enclosures(&self) -> &[Enclosure] {
        &self.enclosures
    }

    pub fn add_enclosure(&mut self, enclosure: Enclosure) {
        self.enclosures.push(enclosure);
    }

    /// Number of live stones carrying `tag`.
    pub fn live_stones_with(&self, tag: StoneTag) -> usize {
        self.stones.iter().filter(|s| s.alive && s.tag == tag).count()
    }

    /// Bounding box `(min, max)` of every stone and dead cell.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let points = self
            .stones
            .iter()
            .map(|s| s.point)
            .chain(self.dead_cells.iter().copied());
        points.fold(None, |acc, (x, y)| match acc {
            None => Some(((x, y), (x, y))),
            Some(((x0, y0), (x1, y1))) => Some(((x0.min(x), y0.min(y)), (x1.max(x), y1.max(y)))),
        })
    }
}

/// Text rendering of the occupied window, top row first.
///
/// Live stones show their player id, captured stones `x`, dead cells `#`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(((x0, y0), (x1, y1))) = self.bounds() else {
            return writeln!(f, "(empty)");
        };
        for y in (y0..=y1).rev() {
            write!(f, "{y:>4} ")?;
            for x in x0..=x1 {
                let ch = match self.stone_at((x, y)) {
                    Some(s) if s.alive => char::from_digit(u32::from(s.player % 10), 10).unwrap_or('?'),
                    Some(_) => 'x',
                    None if self.is_dead_cell((x, y)) => '#',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "     x: {x0}..={x1}")
    }
}

/// Per-call lookup from coordinate to stone, rebuilt on every detection.
pub struct GridIndex {
    alive: HashMap<Point, usize>,
    occupied: HashSet<Point>,
}

impl GridIndex {
    /// Index the live stones (by position in `stones`) and every occupied cell.
    pub fn build(stones: &[Stone]) -> Self {
        let mut alive = HashMap::with_capacity(stones.len());
        let mut occupied = HashSet::with_capacity(stones.len());
        for (i, s) in stones.iter().enumerate() {
            occupied.insert(s.point);
            if s.alive {
                alive.insert(s.point, i);
            }
        }
        Self { alive, occupied }
    }

    /// Index into the stone list of the live stone at `point`.
    #[inline]
    pub fn alive_at(&self, point: Point) -> Option<usize> {
        self.alive.get(&point).copied()
    }

    /// No stone at all, alive or captured.
    #[inline]
    pub fn is_empty(&self, point: Point) -> bool {
        !self.occupied.contains(&point)
    }

    /// A live stone owned by `player` sits at `point`.
    #[inline]
    pub fn is_own(&self, stones: &[Stone], point: Point, player: PlayerId) -> bool {
        self.alive_at(point)
            .is_some_and(|i| stones[i].player == player)
    }
}
