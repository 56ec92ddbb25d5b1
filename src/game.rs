//! Placement, turn rotation and undo/redo around the capture engine.
//!
//! The engine itself is stateless between calls; [`Game`] owns the board,
//! the player registry and the move history, and runs capture detection
//! after every accepted placement.

use log::debug;
use thiserror::Error;

use crate::board::{Board, PlayerId, Point, Stone};
use crate::capture::{Capture, Rules, detect_capture};
use crate::constants::GRID_LIMIT;
use crate::player::{Player, Players};

/// Why a placement was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("point {0:?} is already occupied")]
    Occupied(Point),
    #[error("point {0:?} is inside an enclosure")]
    DeadCell(Point),
    #[error("point {0:?} is off the playable grid")]
    OutOfRange(Point),
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    pub board: Board,
    pub players: Players,
    pub rules: Rules,
    /// Number of moves played so far; selects whose turn it is.
    turn: usize,
    undo_stack: Vec<Stone>,
    redo_stack: Vec<Stone>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Players::default(), Rules::default())
    }
}

impl Game {
    pub fn new(players: Players, rules: Rules) -> Self {
        Self {
            board: Board::new(),
            players,
            rules,
            turn: 0,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Start over with an empty board and zero scores.
    pub fn clear(&mut self) {
        self.board.clear();
        self.players.reset_scores();
        self.turn = 0;
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// The player to move.
    pub fn current_player(&self) -> &Player {
        self.players.by_turn(self.turn)
    }

    /// The player after the one to move.
    pub fn next_player(&self) -> &Player {
        self.players.by_turn(self.turn + 1)
    }

    pub fn move_count(&self) -> usize {
        self.turn
    }

    /// Check that `point` may still receive a stone.
    pub fn check_placeable(&self, point: Point) -> Result<(), PlaceError> {
        let playable = -GRID_LIMIT..=GRID_LIMIT;
        if !playable.contains(&point.0) || !playable.contains(&point.1) {
            return Err(PlaceError::OutOfRange(point));
        }
        if self.board.is_dead_cell(point) {
            return Err(PlaceError::DeadCell(point));
        }
        if self.board.is_occupied(point) {
            return Err(PlaceError::Occupied(point));
        }
        Ok(())
    }

    /// Place a stone for the current player and resolve captures.
    pub fn place(&mut self, point: Point) -> Result<Option<Capture>, PlaceError> {
        self.check_placeable(point)?;
        let player = self.current_player();
        let stone = Stone::new(point, player.id, player.tag());
        debug!("player {} places at {:?}", stone.player, point);

        self.board.push_stone(stone.clone());
        let capture = detect_capture(&mut self.board, &mut self.players, &self.rules);
        self.undo_stack.push(stone);
        self.redo_stack.clear();
        self.turn += 1;
        Ok(capture)
    }

    /// Take back the last placement.
    ///
    /// Captures, scores and dead cells it caused are kept.
    pub fn undo(&mut self) -> Option<Point> {
        let last = self.undo_stack.last()?;
        let stone = self.board.remove_last_stone(last.point, last.player)?;
        self.undo_stack.pop();
        let point = stone.point;
        self.redo_stack.push(stone);
        self.turn = self.turn.saturating_sub(1);
        Some(point)
    }

    /// Put back the last undone stone. Captures are not re-evaluated.
    pub fn redo(&mut self) -> Option<Point> {
        let stone = self.redo_stack.pop()?;
        let point = stone.point;
        self.board.push_stone(stone.clone());
        self.undo_stack.push(stone);
        self.turn += 1;
        Some(point)
    }

    pub fn score(&self, player: PlayerId) -> u32 {
        self.players.get(player).map_or(0, |p| p.score)
    }
}
