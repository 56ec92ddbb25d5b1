//! Player registry: appearance and score per player id.

use crate::board::{PlayerId, Shape, StoneTag};
use crate::constants::{MAX_PLAYERS, PLAYER_COLORS};

const PLAYER_SHAPES: [Shape; MAX_PLAYERS] =
    [Shape::Circle, Shape::Square, Shape::Triangle, Shape::Pentagon];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub color: u32,
    pub shape: Shape,
    pub score: u32,
}

impl Player {
    /// The tag stamped on every stone this player places.
    pub fn tag(&self) -> StoneTag {
        StoneTag {
            color: self.color,
            shape: self.shape,
        }
    }
}

/// Players in turn order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Players {
    players: Vec<Player>,
}

impl Default for Players {
    fn default() -> Self {
        Self::standard(crate::constants::DEFAULT_PLAYER_COUNT)
    }
}

impl Players {
    /// `count` players with ids 1..=count and the default appearance.
    ///
    /// `count` is clamped to 1..=[`MAX_PLAYERS`].
    pub fn standard(count: usize) -> Self {
        let count = count.clamp(1, MAX_PLAYERS);
        let players = (0..count)
            .map(|i| Player {
                id: (i + 1) as PlayerId,
                color: PLAYER_COLORS[i],
                shape: PLAYER_SHAPES[i],
                score: 0,
            })
            .collect();
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// The player whose turn is `turn` (wraps around).
    pub fn by_turn(&self, turn: usize) -> &Player {
        &self.players[turn % self.players.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Credit `points` to player `id`; unknown ids are ignored.
    pub fn add_score(&mut self, id: PlayerId, points: u32) {
        if let Some(p) = self.get_mut(id) {
            p.score += points;
        }
    }

    pub fn reset_scores(&mut self) {
        for p in &mut self.players {
            p.score = 0;
        }
    }
}
