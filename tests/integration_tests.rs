//! Integration tests for dots-rust
//!
//! Whole games are played through [`Game`], so these tests cover placement,
//! turn order and capture detection together.

use dots_rust::board::{Board, Point, Stone};
use dots_rust::capture::{Capture, Rules, detect_capture};
use dots_rust::game::{Game, PlaceError};
use dots_rust::player::Players;
use dots_rust::search::canonical_key;

// =============================================================================
// Helper functions for setting up games
// =============================================================================

/// Square corners, in the order player 1 places them.
const CORNERS: [Point; 4] = [(0, 0), (2, 0), (2, 2), (0, 2)];

/// Play `moves` alternately (player 1 first) and return the game along with
/// the result of the last move.
fn setup_game(rules: Rules, moves: &[Point]) -> (Game, Option<Capture>) {
    let mut game = Game::new(Players::standard(2), rules);
    let mut last = None;
    for &pt in moves {
        last = game.place(pt).unwrap();
    }
    (game, last)
}

/// Player 1 plays the square corners; player 2 answers with `replies`.
fn square(rules: Rules, replies: [Point; 3]) -> (Game, Option<Capture>) {
    setup_game(
        rules,
        &[
            CORNERS[0], replies[0], CORNERS[1], replies[1], CORNERS[2], replies[2], CORNERS[3],
        ],
    )
}

fn alive_at(game: &Game, pt: Point) -> Option<bool> {
    game.board.stone_at(pt).map(|s| s.alive)
}

// =============================================================================
// Capture scenarios
// =============================================================================

#[test]
fn test_square_captures_enemy() {
    let (game, capture) = square(Rules::default(), [(1, 1), (10, 10), (11, 10)]);

    let capture = capture.expect("closing the square should capture");
    assert_eq!(capture.captured, 1);
    assert_eq!(alive_at(&game, (1, 1)), Some(false));
    assert_eq!(game.score(1), 1);
    assert_eq!(game.score(2), 0);

    let enclosures = game.board.enclosures();
    assert_eq!(enclosures.len(), 1);
    assert_eq!(enclosures[0].owner, 1);
    assert_eq!(canonical_key(&enclosures[0].vertices), canonical_key(&CORNERS));
}

#[test]
fn test_empty_square_captures_nothing() {
    let (game, capture) = square(Rules::default(), [(10, 10), (11, 10), (12, 10)]);

    assert!(capture.is_none());
    assert!(game.board.enclosures().is_empty());
    assert!(!game.board.is_dead_cell((1, 1)));
}

#[test]
fn test_empty_square_sealed_variant() {
    let rules = Rules {
        seal_empty_interiors: true,
        ..Rules::default()
    };
    let (mut game, capture) = square(rules, [(10, 10), (11, 10), (12, 10)]);

    assert!(capture.is_none());
    assert!(game.board.is_dead_cell((1, 1)));
    assert!(game.board.enclosures().is_empty());
    assert_eq!(game.place((1, 1)), Err(PlaceError::DeadCell((1, 1))));
}

#[test]
fn test_own_stone_inside_survives() {
    let (game, capture) = setup_game(
        Rules::default(),
        &[
            (1, 1),
            (10, 10),
            CORNERS[0],
            (11, 10),
            CORNERS[1],
            (12, 10),
            CORNERS[2],
            (13, 10),
            CORNERS[3],
        ],
    );

    assert!(capture.is_none());
    assert_eq!(alive_at(&game, (1, 1)), Some(true));
    assert_eq!(game.score(1), 0);
}

#[test]
fn test_enemy_can_enclose_too() {
    // Player 2 builds the square around player 1's stone.
    let (game, capture) = setup_game(
        Rules::default(),
        &[
            (1, 1),
            CORNERS[0],
            (10, 10),
            CORNERS[1],
            (11, 10),
            CORNERS[2],
            (12, 10),
            CORNERS[3],
        ],
    );

    assert_eq!(capture.map(|c| c.captured), Some(1));
    assert_eq!(game.score(2), 1);
    assert_eq!(game.board.enclosures()[0].owner, 2);
}

#[test]
fn test_capture_through_diagonals_and_jumps() {
    // A hexagon mixing diagonal steps and jumps around two enemy stones.
    let (game, capture) = setup_game(
        Rules::default(),
        &[
            (1, 0),
            (1, 1),
            (3, 0),
            (2, 1),
            (4, 1),
            (20, 20),
            (3, 2),
            (21, 20),
            (1, 2),
            (22, 20),
            (0, 1),
        ],
    );

    assert_eq!(capture.map(|c| c.captured), Some(2));
    assert_eq!(game.score(1), 2);
    assert_eq!(alive_at(&game, (1, 1)), Some(false));
    assert_eq!(alive_at(&game, (2, 1)), Some(false));
    // Both the hexagon and the pentagon cut through (3, 1) hold the pair.
    assert!(!game.board.enclosures().is_empty());
    assert!(game.board.enclosures().iter().all(|e| e.owner == 1));
}

// =============================================================================
// Occupancy
// =============================================================================

#[test]
fn test_captured_and_dead_cells_stay_blocked() {
    let (mut game, capture) = square(Rules::default(), [(1, 1), (10, 10), (11, 10)]);
    assert!(capture.is_some());

    let dead: Vec<Point> = game.board.dead_cells().iter().copied().collect();
    assert!(!dead.is_empty(), "the square's empty interior should be dead");

    // Keep playing elsewhere and keep retrying the blocked cells.
    for k in 0..4 {
        assert_eq!(game.place((1, 1)), Err(PlaceError::Occupied((1, 1))));
        for &pt in &dead {
            assert_eq!(game.place(pt), Err(PlaceError::DeadCell(pt)));
        }
        game.place((30 + k, 30)).unwrap();
    }
}

#[test]
fn test_undo_keeps_captures() {
    let (mut game, capture) = square(Rules::default(), [(1, 1), (10, 10), (11, 10)]);
    assert!(capture.is_some());

    assert_eq!(game.undo(), Some(CORNERS[3]));
    assert_eq!(alive_at(&game, (1, 1)), Some(false));
    assert_eq!(game.score(1), 1);
    assert_eq!(game.board.enclosures().len(), 1);

    assert_eq!(game.redo(), Some(CORNERS[3]));
    assert_eq!(game.score(1), 1, "redo does not capture again");
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_detection_is_deterministic() {
    let moves = [
        CORNERS[0], (1, 1), CORNERS[1], (10, 10), CORNERS[2], (11, 10), CORNERS[3],
    ];
    let (a, capture_a) = setup_game(Rules::default(), &moves);
    let (b, capture_b) = setup_game(Rules::default(), &moves);

    assert_eq!(capture_a, capture_b);
    assert_eq!(a.board.stones(), b.board.stones());
    assert_eq!(a.board.enclosures(), b.board.enclosures());
    assert_eq!(a.board.dead_cells(), b.board.dead_cells());
}

#[test]
fn test_canonical_key_invariance_random() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..200 {
        let n = rng.usize(4..12);
        let cycle: Vec<Point> = (0..n)
            .map(|_| (rng.i32(-50..50), rng.i32(-50..50)))
            .collect();
        let key = canonical_key(&cycle);

        let mut variant = cycle.clone();
        variant.rotate_left(rng.usize(0..n));
        if rng.bool() {
            variant.reverse();
        }
        assert_eq!(canonical_key(&variant), key, "{cycle:?} vs {variant:?}");
    }
}

#[test]
fn test_three_stone_loops_never_enclose() {
    let mut rng = fastrand::Rng::with_seed(3);
    for _ in 0..50 {
        let (x, y) = (rng.i32(-20..20), rng.i32(-20..20));
        let mut game = Game::default();
        // Player 1 closes a triangle; the extra stones pass the size checks.
        let moves = [
            (x, y),
            (x + 40, y),
            (x + 2, y),
            (x + 41, y),
            (x + 50, y + 50),
            (x + 42, y),
            (x + 1, y + 1),
        ];
        for pt in moves {
            assert!(game.place(pt).unwrap().is_none());
        }
        assert!(game.board.enclosures().is_empty());
        assert!(game.board.dead_cells().is_empty());
    }
}

#[test]
fn test_random_games_keep_invariants() {
    for seed in 1..=3 {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut game = Game::default();
        let mut placed = 0;
        while placed < 30 {
            let pt = (rng.i32(-6..=6), rng.i32(-6..=6));
            if game.place(pt).is_ok() {
                placed += 1;
            }
        }

        let stones = game.board.stones();
        let mut alive: Vec<Point> = stones.iter().filter(|s| s.alive).map(|s| s.point).collect();
        let total = alive.len();
        alive.sort();
        alive.dedup();
        assert_eq!(alive.len(), total, "two live stones share a cell");

        let captured = stones.iter().filter(|s| !s.alive).count() as u32;
        let scores: u32 = game.players.iter().map(|p| p.score).sum();
        assert_eq!(scores, captured, "every capture is credited once");

        for cell in game.board.dead_cells() {
            assert!(stones.iter().all(|s| s.point != *cell));
        }
        for enclosure in game.board.enclosures() {
            assert!(enclosure.vertices.len() >= 4);
        }
    }
}

#[test]
fn test_detect_capture_on_bare_board() {
    let mut board = Board::new();
    let mut players = Players::default();
    assert_eq!(detect_capture(&mut board, &mut players, &Rules::default()), None);

    let tag = players.get(1).map(|p| p.tag()).unwrap();
    board.push_stone(Stone::new((0, 0), 1, tag));
    assert_eq!(detect_capture(&mut board, &mut players, &Rules::default()), None);
}
