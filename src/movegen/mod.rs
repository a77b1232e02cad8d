//! Placement legality and application.
//!
//! Applies a single orb placement (and the chain reaction it may set off)
//! to a board, either in place for a real move or on a copy for lookahead.

use rand::Rng;

use crate::board::{Board, Color, Player, Pos, ALL_POSITIONS};

/// True if `color` may drop an orb on `pos`: the cell is on the board and
/// either empty or already owned by `color`.
#[inline]
pub fn is_legal_target(board: &Board, pos: Pos, color: Color) -> bool {
    if !pos.in_bounds() {
        return false;
    }
    let owner = board.color(pos);
    owner == Color::Empty || owner == color
}

/// Places one orb for `player` and resolves any resulting explosions.
///
/// Returns false and raises the player's illegal flag if the target is off
/// the board or owned by the opponent; the board is left untouched then.
pub fn place_orb(board: &mut Board, pos: Pos, player: &mut Player) -> bool {
    let color = player.color();
    if !is_legal_target(board, pos, color) {
        player.set_illegal();
        return false;
    }

    board.add_orb(pos, color);

    if board.mark_if_full(pos) {
        board.explode(pos);
        board.mark_all();
        board.chain_react(color);
    }

    true
}

/// Returns a copy of `board` with the placement applied. The caller's board
/// and player are not modified.
pub fn apply_hypothetical(board: &Board, pos: Pos, player: &Player) -> Board {
    let mut next = *board;
    let mut scratch = *player;
    place_orb(&mut next, pos, &mut scratch);
    next
}

/// Legal targets for `color` in row-major order.
pub fn legal_targets(board: &Board, color: Color) -> Vec<Pos> {
    ALL_POSITIONS
        .iter()
        .copied()
        .filter(|&p| is_legal_target(board, p, color))
        .collect()
}

/// Picks a uniformly random legal target, or None if there is none.
pub fn random_placement(board: &Board, color: Color, rng: &mut impl Rng) -> Option<Pos> {
    let legal = legal_targets(board, color);
    if legal.is_empty() {
        return None;
    }
    Some(legal[rng.gen_range(0..legal.len())])
}
