//! Dots-Rust: territory capture on an unbounded grid.
//!
//! Players take turns placing stones on an infinite integer grid. A stone
//! that closes a cycle of same-player stones around enemy stones captures
//! them; the empty cells inside become permanently unplayable.
//!
//! ## Modules
//!
//! - [`constants`] - Search limits and default player appearance
//! - [`direction`] - Direction states and the transition table
//! - [`board`] - Stones, dead cells, enclosures and the per-call grid index
//! - [`player`] - Player registry and scores
//! - [`search`] - Cycle search and cycle canonicalization
//! - [`capture`] - Interior classification and capture application
//! - [`game`] - Placement, turn order and undo/redo
//! - [`protocol`] - Text command loop
//!
//! ## Example
//!
//! ```
//! use dots_rust::game::Game;
//!
//! let mut game = Game::default();
//! // Player 1 builds a square around player 2's stone at (1, 1).
//! for pt in [(0, 0), (1, 1), (2, 0), (9, 9), (2, 2), (9, 8)] {
//!     game.place(pt).unwrap();
//! }
//! let capture = game.place((0, 2)).unwrap();
//! assert_eq!(capture.map(|c| c.captured), Some(1));
//! assert_eq!(game.score(1), 1);
//! ```

pub mod board;
pub mod capture;
pub mod constants;
pub mod direction;
pub mod game;
pub mod player;
pub mod protocol;
pub mod search;
