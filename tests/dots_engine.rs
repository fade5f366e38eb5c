//! Dots-and-boxes engine scenarios and scoring invariants

use rand::{SeedableRng, rngs::StdRng};

use minigames::{
    Error,
    config::{DotsConfig, GameMode},
    dots::{BoardState, Cell, Difficulty, Edge, Game, Outcome, Player, select_edge},
};

fn claim_all(board: &mut BoardState, edges: &[(usize, usize)]) {
    for &(row, col) in edges {
        board.claim(Edge::new(row, col)).unwrap();
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn test_greedy_claims_fourth_side() {
        // Three sides of the bottom-right cell: top, left, bottom
        let mut board = BoardState::new(2).unwrap();
        claim_all(&mut board, &[(2, 3), (3, 2), (4, 3)]);

        let mut rng = StdRng::seed_from_u64(1);
        let edge = select_edge(&board, Difficulty::Greedy, &mut rng).unwrap();
        assert_eq!(edge, Edge::new(3, 4));

        let mover = board.current_player();
        let completed = board.claim(edge).unwrap();
        assert_eq!(completed, vec![Cell::new(1, 1)]);
        assert_eq!(board.owner(Cell::new(1, 1)), Some(mover));
        assert_eq!(board.current_player(), mover);
    }

    #[test]
    fn test_double_completion_scores_two() {
        // Middle vertical edge of a 1x2 strip closes both cells at once
        let mut board = BoardState::new(2).unwrap();
        claim_all(&mut board, &[(0, 1), (0, 3), (2, 1), (2, 3), (1, 0), (1, 4)]);

        let mover = board.current_player();
        let completed = board.claim(Edge::new(1, 2)).unwrap();
        assert_eq!(completed.len(), 2);
        assert_eq!(board.score(mover), 2);
    }

    #[test]
    fn test_reclaiming_edge_never_double_scores() {
        let mut board = BoardState::new(1).unwrap();
        claim_all(&mut board, &[(0, 1), (2, 1), (1, 0), (1, 2)]);
        let before = board.clone();

        assert!(matches!(
            board.claim(Edge::new(1, 2)),
            Err(Error::EdgeAlreadyClaimed { row: 1, col: 2 })
        ));
        assert_eq!(board, before);
        assert_eq!(board.owned_count(), 1);
    }

    #[test]
    fn test_off_board_edges_rejected() {
        let mut board = BoardState::new(2).unwrap();
        for (row, col) in [(0, 0), (1, 1), (5, 0), (0, 9)] {
            assert!(matches!(
                board.claim(Edge::new(row, col)),
                Err(Error::InvalidEdge { .. })
            ));
        }
    }
}

mod full_games {
    use super::*;

    fn finish_randomly(game: &mut Game, rng: &mut StdRng) {
        while game.outcome().is_none() {
            let edge = select_edge(game.board(), Difficulty::Random, rng).unwrap();
            let before = game.board().current_player();
            let result = game.apply_edge_selection(edge).unwrap();

            // The turn stays exactly when something was completed
            assert_eq!(result.turn_passed, result.completed.is_empty());
            let after = game.board().current_player();
            assert_eq!(after == before, !result.completed.is_empty());

            let (one, two) = game.scores();
            assert_eq!((one + two) as usize, game.board().owned_count());
        }
    }

    #[test]
    fn test_scores_sum_to_owned_cells() {
        let mut rng = StdRng::seed_from_u64(21);
        for size in 1..=5 {
            let config = DotsConfig::new(size).with_mode(GameMode::HumanVsHuman);
            let mut game = Game::with_seed(config, 0).unwrap();
            finish_randomly(&mut game, &mut rng);

            let (one, two) = game.scores();
            assert_eq!((one + two) as usize, size * size);
            let expected = match one.cmp(&two) {
                std::cmp::Ordering::Greater => Outcome::Winner(Player::One),
                std::cmp::Ordering::Less => Outcome::Winner(Player::Two),
                std::cmp::Ordering::Equal => Outcome::Tie,
            };
            assert_eq!(game.outcome(), Some(expected));
        }
    }

    #[test]
    fn test_computer_finishes_a_game_against_random_human() {
        let config = DotsConfig::new(3).with_difficulty(Difficulty::Unbeatable);
        let mut game = Game::with_seed(config, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(8);

        while game.outcome().is_none() {
            if game.is_computer_turn() {
                let result = game.play_opponent_move().unwrap();
                assert_eq!(result.player, Player::Two);
            } else {
                let edge = select_edge(game.board(), Difficulty::Random, &mut rng).unwrap();
                game.apply_edge_selection(edge).unwrap();
            }
        }

        assert_eq!(game.board().owned_count(), 9);
        assert!(matches!(
            game.play_opponent_move(),
            Err(Error::GameOver)
        ));
    }
}
