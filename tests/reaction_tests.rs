//! Rule scenarios for placement, explosion and chain reaction, plus the
//! search's selection contract, exercised through the public API.

use fission::board::{neighbors, Board, Color, Player, Pos, ALL_POSITIONS};
use fission::eval::{evaluate, Evaluator, Heuristic, WIN_SCORE};
use fission::movegen::{apply_hypothetical, legal_targets, place_orb, random_placement};
use fission::protocol::{encode_board, parse_board};
use fission::search::{candidate_scores, search, top_candidates, ILLEGAL_SCORE};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicU64, Ordering};

fn board(notation: &str) -> Board {
    parse_board(notation).expect("bad test board")
}

/// True if no cell is at or over capacity.
fn settled(b: &Board) -> bool {
    ALL_POSITIONS.iter().all(|&p| !b.is_full(p))
}

#[test]
fn corner_explodes_into_its_two_neighbors() {
    let mut b = board("1r,.,.,.,.,./.,.,.,.,.,./.,.,.,.,.,./.,.,.,.,.,./.,.,.,.,.,1b");
    let mut red = Player::new(Color::Red);
    assert!(place_orb(&mut b, Pos::new(0, 0), &mut red));

    assert_eq!(b.orbs(Pos::new(0, 0)), 0);
    assert_eq!(b.color(Pos::new(0, 0)), Color::Empty);
    for n in [Pos::new(0, 1), Pos::new(1, 0)] {
        assert_eq!(b.orbs(n), 1);
        assert_eq!(b.color(n), Color::Red);
    }
    assert_eq!(b.orb_total(Color::Red), 2);
}

#[test]
fn opponent_cell_placement_fails_and_board_is_unchanged() {
    let mut b = board(".,.,.,.,.,./.,1r,.,.,.,./.,.,.,.,.,./.,.,.,.,.,./.,.,.,.,.,.");
    let before = b;
    let mut blue = Player::new(Color::Blue);
    assert!(!place_orb(&mut b, Pos::new(1, 1), &mut blue));
    assert!(blue.is_illegal());
    assert_eq!(b, before);
}

#[test]
fn exploded_cell_is_reset() {
    let mut b = Board::new();
    b.set(Pos::new(2, 2), Color::Red, 4);
    b.explode(Pos::new(2, 2));
    assert_eq!(b.orbs(Pos::new(2, 2)), 0);
    assert_eq!(b.color(Pos::new(2, 2)), Color::Empty);
    assert!(!b.cell(Pos::new(2, 2)).pending);
}

#[test]
fn neighbor_counts() {
    assert_eq!(neighbors(Pos::new(0, 0)).len(), 2);
    assert_eq!(neighbors(Pos::new(0, 2)).len(), 3);
    assert_eq!(neighbors(Pos::new(2, 2)).len(), 4);
}

#[test]
fn cascade_explodes_in_rounds_not_depth_first() {
    // (0,0) fills (0,1) and (1,0) in one go. Both burst in the next round,
    // each feeding (1,1) and (0,0). (1,1) ends one orb over capacity and
    // only goes off in the round after, losing the surplus orb.
    let mut b = board("1r,2r,.,.,.,./2r,3r,.,.,.,./.,.,.,.,.,./.,.,.,.,.,./.,.,.,.,1b,1b");
    let mut red = Player::new(Color::Red);
    assert!(place_orb(&mut b, Pos::new(0, 0), &mut red));

    let expected = board(".,2r,1r,.,.,./2r,.,1r,.,.,./1r,1r,.,.,.,./.,.,.,.,.,./.,.,.,.,1b,1b");
    assert_eq!(b, expected);
    assert_eq!(encode_board(&b), encode_board(&expected));
    assert_eq!(b.orb_total(Color::Red), 8);
}

#[test]
fn long_cascade_settles_or_wins() {
    // A wall of critical red cells next to a few blue ones.
    let mut b = board("1r,2r,2r,2r,2r,1r/2r,3r,3r,3r,3r,2r/.,.,1b,.,.,./.,.,.,.,.,./.,1b,.,.,.,.");
    let mut red = Player::new(Color::Red);
    assert!(place_orb(&mut b, Pos::new(0, 0), &mut red));
    assert!(settled(&b) || b.is_won_by(Color::Red));
}

#[test]
fn random_games_keep_the_capacity_invariant() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for _ in 0..20 {
        let mut b = Board::new();
        let mut color = Color::Red;
        for ply in 0..120 {
            let pos = match random_placement(&b, color, &mut rng) {
                Some(p) => p,
                None => break,
            };
            let mut player = Player::new(color);
            assert!(place_orb(&mut b, pos, &mut player));
            if ply >= 2 && b.is_won_by(color) {
                break;
            }
            assert!(settled(&b), "overflow left after ply {}", ply);
            assert!(!b.has_pending());
            for pos in ALL_POSITIONS {
                if b.orbs(pos) == 0 {
                    assert_eq!(b.color(pos), Color::Empty);
                }
            }
            color = color.opponent();
        }
    }
}

#[test]
fn hypothetical_moves_do_not_touch_the_source() {
    let b = board("1r,.,.,.,.,1b/.,2r,.,.,.,./.,.,.,3r,1b,./.,.,.,3b,.,./.,.,2b,.,.,.");
    let before = b;
    let red = Player::new(Color::Red);
    for pos in legal_targets(&b, Color::Red) {
        let _ = apply_hypothetical(&b, pos, &red);
    }
    assert_eq!(b, before);
}

#[test]
fn sole_owner_scores_win_sentinel() {
    let b = board(".,.,.,.,.,./.,1r,.,.,.,./.,.,.,2r,.,./.,.,.,.,.,./.,.,.,.,.,.");
    assert_eq!(evaluate(&b, Color::Red), WIN_SCORE);
}

struct Counting(AtomicU64);

impl Evaluator for Counting {
    fn score(&self, board: &Board, color: Color) -> i32 {
        self.0.fetch_add(1, Ordering::Relaxed);
        evaluate(board, color)
    }
}

#[test]
fn depth_one_search_is_the_top_candidate_without_recursion() {
    let b = board("1r,.,.,.,.,1b/.,2r,.,.,.,./.,.,.,3r,1b,./.,.,.,3b,.,./.,.,2b,.,.,.");
    let red = Player::new(Color::Red);
    let scores = candidate_scores(&b, &red, &Heuristic::default());
    let legal = scores.iter().filter(|&&s| s != ILLEGAL_SCORE).count() as u64;
    let (best_pos, best_score) = top_candidates(&scores, 10).first().unwrap();

    let counter = Counting(AtomicU64::new(0));
    let result = search(&b, 1, 10, &red, &counter);
    assert_eq!(result.pos, Some(best_pos));
    assert_eq!(result.score, best_score);
    assert_eq!(counter.0.load(Ordering::Relaxed), legal);
}

#[test]
fn search_is_deterministic_across_calls() {
    let b = board("1r,.,.,.,.,1b/.,2r,.,.,.,./.,.,.,3r,1b,./.,.,.,3b,.,./.,.,2b,.,.,.");
    let blue = Player::new(Color::Blue);
    let eval = Heuristic::default();
    let first = search(&b, 2, 10, &blue, &eval);
    for _ in 0..3 {
        assert_eq!(search(&b, 2, 10, &blue, &eval), first);
    }
}

#[test]
fn search_never_picks_an_opponent_cell() {
    let b = board("1b,1b,1b,1b,1b,1b/1b,1b,1b,1b,1b,1b/1b,1b,.,1b,1b,1b/1b,1b,1b,1b,1b,1b/1b,1b,1b,1b,1b,1r");
    let red = Player::new(Color::Red);
    let result = search(&b, 2, 10, &red, &Heuristic::default());
    let pos = result.pos.unwrap();
    assert!(pos == Pos::new(2, 2) || pos == Pos::new(4, 5));
}
