//! Property tests: bounds and side effects of move scoring.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use xornet_fitness::{
    FitnessError, FitnessVariant, Scorer, ScoringWeights, CLAIMED, EMPTY, OCCUPIED,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn arb_board(width: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![Just(EMPTY), Just(OCCUPIED)], width)
}

fn arb_variant() -> impl Strategy<Value = FitnessVariant> {
    prop_oneof![Just(FitnessVariant::Discrete), Just(FitnessVariant::Continuous)]
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// An all-zero output earns the zero bonus per cell plus noise.
    #[test]
    fn all_zero_output_bounds(width in 1usize..32, seed in any::<u64>()) {
        let scorer = Scorer::new(FitnessVariant::Discrete);
        let board = vec![EMPTY; width];
        let mut out = board.clone();
        let outcome = scorer
            .step(&board, &vec![0; width], &mut out, &mut StdRng::seed_from_u64(seed))
            .unwrap();

        let base = width as i64 * scorer.weights.zero_bonus;
        prop_assert!(outcome.score >= base);
        prop_assert!(outcome.score < base + scorer.weights.noise_ceiling);
        prop_assert_eq!(out, board);
    }

    /// Only a lone `1` on an empty cell changes the board, and only there.
    #[test]
    fn board_writes_only_on_commit(
        board in arb_board(9),
        output in prop::collection::vec(0u8..4, 9),
        variant in arb_variant(),
        seed in any::<u64>(),
    ) {
        let scorer = Scorer::new(variant);
        let mut out = board.clone();
        let outcome = scorer
            .step(&board, &output, &mut out, &mut StdRng::seed_from_u64(seed))
            .unwrap();

        match outcome.committed {
            Some(cell) => {
                prop_assert_eq!(output[cell], 1);
                prop_assert_eq!(board[cell], EMPTY);
                prop_assert_eq!(output.iter().filter(|&&b| b == 0).count(), 8);
                prop_assert_eq!(out[cell], CLAIMED);
                for i in (0..9).filter(|&i| i != cell) {
                    prop_assert_eq!(out[i], board[i]);
                }
            }
            None => prop_assert_eq!(out, board),
        }
    }

    /// Every extra `1` after the first costs the illegal-move penalty.
    #[test]
    fn extra_selections_are_penalized(extra in 1usize..8) {
        let weights = ScoringWeights { noise_ceiling: 0, ..ScoringWeights::discrete() };
        let scorer = Scorer::new(FitnessVariant::Discrete).with_weights(weights);
        let mut output = vec![0u8; 9];
        for cell in output.iter_mut().take(extra + 1) {
            *cell = 1;
        }
        let board = vec![EMPTY; 9];
        let mut out = board.clone();
        let outcome = scorer
            .step(&board, &output, &mut out, &mut StdRng::seed_from_u64(0))
            .unwrap();

        let zeroes = (9 - extra - 1) as i64;
        let expected = zeroes * weights.zero_bonus + weights.select_bonus
            - extra as i64 * weights.illegal_move_penalty;
        prop_assert_eq!(outcome.score, expected);
        prop_assert_eq!(outcome.committed, None);
    }

    /// Mismatched lengths are rejected without touching the board.
    #[test]
    fn length_mismatch_rejected(
        board_len in 0usize..12,
        output_len in 0usize..12,
        variant in arb_variant(),
    ) {
        prop_assume!(board_len != output_len);
        let scorer = Scorer::new(variant);
        let board = vec![EMPTY; board_len];
        let mut out = vec![OCCUPIED; board_len];
        let result = scorer.step(
            &board,
            &vec![1; output_len],
            &mut out,
            &mut StdRng::seed_from_u64(1),
        );

        let is_mismatch = matches!(result, Err(FitnessError::LengthMismatch { .. }));
        prop_assert!(is_mismatch);
        prop_assert_eq!(out, vec![OCCUPIED; board_len]);
    }
}
