//! Constants for the capture engine and the default player table.
//!
//! The board is an unbounded integer grid, so unlike a fixed-size Go board
//! there are no geometry constants here. Everything below either bounds
//! the cycle search or seeds the player registry.

// =============================================================================
// Capture Search Limits
// =============================================================================

/// Longest path (in coordinates) the cycle search will extend.
///
/// This is a heuristic safety cap, not a proven bound: longer branches are
/// dropped as if they never closed a cycle. It does not bound running time;
/// the number of paths still grows exponentially on dense clusters.
pub const MAX_PATH_LEN: usize = 100;

/// Minimum number of vertices in an enclosing cycle.
pub const MIN_CYCLE_LEN: usize = 4;

/// Below this many stones on the board no capture is possible.
pub const MIN_STONES_ON_BOARD: usize = 6;

/// Below this many live stones of the placer's color no capture is possible.
pub const MIN_OWN_STONES: usize = 4;

/// Largest coordinate magnitude a stone may be placed at, so that jumps and
/// the interior scan stay within `i32`.
pub const GRID_LIMIT: i32 = i32::MAX - 2;

// =============================================================================
// Players
// =============================================================================

/// Number of players when none is configured.
pub const DEFAULT_PLAYER_COUNT: usize = 2;

/// Largest supported number of players.
pub const MAX_PLAYERS: usize = 4;

/// Default stone colors for player ids 1..=4 (0xRRGGBB).
pub const PLAYER_COLORS: [u32; MAX_PLAYERS] = [0xff0000, 0x3b82f6, 0x00ff00, 0x7f00ff];
