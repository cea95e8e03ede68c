//! End-to-end selection scenarios against the standard rules.

use chess_core::{Color, Position, RulesEngine, StandardRules};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tiered_engine::{evaluate, search_score, Declined, Selector, Tier, MATE_SCORE};

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

#[test]
fn stalemated_engine_gets_no_move() {
    let p = pos("k7/8/1K6/4Q3/8/8/8/8 b - - 0 1");
    let mut rng = StdRng::seed_from_u64(0);
    for tier in Tier::ALL {
        let selector = Selector::new(&StandardRules, tier, Color::Black);
        assert!(selector.choose(&p, &mut rng).is_err());
    }
}

#[test]
fn hard_plays_mate_in_one() {
    let p = pos("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    let selector = Selector::new(&StandardRules, Tier::Hard, Color::White);
    let selection = selector.choose(&p, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(selection.mv.uci(), "e1e8");
    assert!(selection.mv.gives_mate());
    assert_eq!(selection.score, MATE_SCORE);

    let next = StandardRules.apply_move(&p, &selection.mv).unwrap();
    assert!(StandardRules.is_checkmate(&next));
}

#[test]
fn hard_finishes_rook_mate_instead_of_delaying_it() {
    let p = pos("k7/8/1K6/8/8/8/8/7R w - - 0 1");
    let selector = Selector::new(&StandardRules, Tier::Hard, Color::White);
    for seed in [1, 2, 3] {
        let selection = selector.choose(&p, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(selection.mv.uci(), "h1h8");
        let next = StandardRules.apply_move(&p, &selection.mv).unwrap();
        assert!(StandardRules.is_checkmate(&next));
    }
}

#[test]
fn easy_usually_but_not_always_takes_the_only_capture() {
    // Ka1 has three steps, the e-pawn can push or take on d5.
    let p = pos("7k/8/8/3p4/4P3/8/8/K7 w - - 0 1");
    assert_eq!(StandardRules.legal_moves(&p, None).len(), 5);

    let selector = Selector::new(&StandardRules, Tier::Easy, Color::White);
    let mut rng = StdRng::seed_from_u64(2024);
    let captures = (0..1000)
        .filter(|_| selector.choose(&p, &mut rng).unwrap().mv.is_capture())
        .count();
    assert!(captures > 600, "only {captures} captures");
    assert!(captures < 1000, "captured every time");
}

#[test]
fn evaluation_is_side_symmetric() {
    let white = pos("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    let black = pos("rnbqkb1r/pppp1ppp/5n2/4p3/4P3/2N5/PPPP1PPP/R1BQKBNR b KQkq - 2 3");
    assert_eq!(
        evaluate(&StandardRules, &white, Color::White),
        evaluate(&StandardRules, &black, Color::Black)
    );
}

#[test]
fn search_depth_zero_agrees_with_evaluator() {
    let rules = StandardRules;
    let p = pos("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    for mv in rules.legal_moves(&p, None) {
        let next = rules.apply_move(&p, &mv).unwrap();
        if rules.is_game_over(&next) {
            continue;
        }
        assert_eq!(
            search_score(&rules, Color::White, &mv, 0, &p),
            evaluate(&rules, &next, Color::White)
        );
    }
}

#[test]
fn every_tier_returns_a_legal_move_or_declines() {
    let rules = StandardRules;
    let positions = [
        "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1",
        "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1",
        "8/4P3/8/8/8/8/k7/4K3 w - - 0 1",
        "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1",
        "6k1/6P1/6K1/8/8/8/8/8 b - - 0 1",
    ];
    let mut rng = StdRng::seed_from_u64(42);
    for fen in positions {
        let p = pos(fen);
        let side = p.side_to_move();
        let legal = rules.legal_moves(&p, None);
        for tier in Tier::ALL {
            let selector = Selector::new(&rules, tier, side);
            match selector.choose(&p, &mut rng) {
                Ok(selection) => assert!(legal.contains(&selection.mv), "{fen} {tier}"),
                Err(reason) => {
                    assert!(legal.is_empty() || rules.is_game_over(&p), "{fen} {tier}: {reason}");
                    assert_ne!(reason, Declined::NotEngineTurn);
                }
            }
        }
    }
}
