//! Constants for board geometry, piece inventories, evaluation weights,
//! and search depths.
//!
//! All evaluation weights live here as a single table rather than being
//! scattered through the evaluator; their relative magnitudes encode the
//! engine's priorities (see [`crate::eval`]).

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (5x5 grid).
pub const GRID_SIZE: i32 = 5;

/// Number of collinear same-owner cells that wins the game.
pub const WIN_LENGTH: i32 = 4;

/// Row/column of the centre cell.
pub const CENTER: i32 = GRID_SIZE / 2;

/// The four line orientations scanned for 4-cell windows: horizontal,
/// vertical, diagonal, anti-diagonal. Each entry is a (row, col) step.
pub const LINE_DIRS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Offsets to the 8 neighbouring cells (orthogonal + diagonal).
pub const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// =============================================================================
// Piece Inventory
// =============================================================================

/// Frogs each player may place.
pub const MAX_FROGS_PER_PLAYER: u8 = 1;

/// Snakes each player may place.
pub const MAX_SNAKES_PER_PLAYER: u8 = 1;

/// Donkeys each player may place.
pub const MAX_DONKEYS_PER_PLAYER: u8 = 3;

// =============================================================================
// Evaluation Weights
// =============================================================================

/// Score for a position the perspective player has already won.
pub const WIN_SCORE: i32 = 10_000;

/// Score for a position the opponent has already won. Larger in magnitude
/// than [`WIN_SCORE`] so that avoiding an enemy line dominates completing
/// an own line.
pub const LOSS_SCORE: i32 = -12_000;

/// Weight per own 3-in-a-row threat.
pub const OWN_THREAT_WEIGHT: i32 = 800;

/// Penalty per opponent 3-in-a-row threat. Much heavier than
/// [`OWN_THREAT_WEIGHT`]: the engine defends before it attacks.
pub const ENEMY_THREAT_WEIGHT: i32 = 5_000;

/// Weight per own open 2-in-a-row window.
pub const OWN_POTENTIAL_WEIGHT: i32 = 80;

/// Penalty per opponent open 2-in-a-row window.
pub const ENEMY_POTENTIAL_WEIGHT: i32 = 60;

/// Per-piece weight on proximity to the board centre.
pub const CENTER_WEIGHT: i32 = 3;

/// Extra bonus for occupying the exact centre cell.
pub const CENTER_CELL_BONUS: i32 = 5;

/// Per same-owner neighbour bonus (8-neighbourhood connectivity).
pub const ADJACENCY_WEIGHT: i32 = 2;

/// Weight on the legal-move-count difference between the two players.
pub const MOBILITY_WEIGHT: i32 = 1;

// =============================================================================
// Search Depths
// =============================================================================

/// Minimax depth for an easy opponent (one ply).
pub const EASY_DEPTH: i32 = 1;

/// Default minimax depth.
pub const MEDIUM_DEPTH: i32 = 3;

/// Minimax depth for a hard opponent.
pub const HARD_DEPTH: i32 = 5;
