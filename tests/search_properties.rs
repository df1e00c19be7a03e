//! Property-based tests for the search strategies.

use grid_duel::{
    AlphaBeta, Board, EmptyCellPolicy, FixedOrder, Mark, Minimax, MonteCarlo, MonteCarloConfig,
    SearchConfig, UniformRandom, legal_moves, terminal_outcome,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// An ongoing 3x3 board with at least `min_marks` marks, and the mark to move.
fn arb_position(min_marks: usize) -> impl Strategy<Value = Option<(Board, Mark)>> {
    (min_marks..9usize, any::<u64>()).prop_map(|(moves, seed)| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut mark = Mark::X;
        for _ in 0..moves {
            let coord = *legal_moves(&board).choose(&mut rng)?;
            board.place(coord, mark).ok()?;
            mark = mark.opponent();
            if terminal_outcome(&board).is_terminal() {
                return None;
            }
        }
        Some((board, mark))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_alpha_beta_matches_minimax(position in arb_position(2)) {
        let Some((board, mark)) = position else {
            return Ok(());
        };
        let full = Minimax::new(mark).search(&board);
        let pruned = AlphaBeta::new(mark).search(&board);
        prop_assert_eq!(pruned.value, full.value);
        prop_assert_eq!(pruned.best, full.best);
        prop_assert!(pruned.nodes <= full.nodes);
    }

    #[test]
    fn prop_depth_limited_searches_agree(
        position in arb_position(1),
        depth in 1usize..4,
        credit in any::<bool>(),
    ) {
        let Some((board, mark)) = position else {
            return Ok(());
        };
        let policy = if credit {
            EmptyCellPolicy::CreditOpponent
        } else {
            EmptyCellPolicy::Ignore
        };
        let config = SearchConfig::new(Some(depth), policy).unwrap();
        let full = Minimax::with_config(mark, config).search(&board);
        let pruned = AlphaBeta::with_config(mark, config).search(&board);
        prop_assert_eq!(pruned.value, full.value);
        prop_assert_eq!(pruned.best, full.best);
    }

    #[test]
    fn prop_every_strategy_returns_a_legal_cell(position in arb_position(0), seed in any::<u64>()) {
        let Some((board, mark)) = position else {
            return Ok(());
        };
        let mc = MonteCarloConfig::new(20, false).unwrap();
        let mut strategies: Vec<Box<dyn grid_duel::Strategy>> = vec![
            Box::new(FixedOrder::new(mark)),
            Box::new(UniformRandom::seeded(mark, seed)),
            Box::new(MonteCarlo::seeded(mark, mc, seed)),
            Box::new(AlphaBeta::new(mark)),
        ];
        let before = board.clone();
        for strategy in &mut strategies {
            let coord = strategy.select_move(&board).unwrap();
            prop_assert!(board.is_empty(coord), "{} chose {}", strategy.name(), coord);
        }
        prop_assert_eq!(board, before);
    }
}
