use broadside::{
    adjacent_cells, choose_target, process_shot, random_fleet, AiMode, AiState, Board, CellState,
    Difficulty, Ship, ShipType, ShotResult, BOARD_SIZE,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn two_ships() -> Vec<Ship> {
    vec![
        Ship::new(ShipType::new("Destroyer", 2), vec![(0, 0), (0, 1)]),
        Ship::new(ShipType::new("Cruiser", 3), vec![(5, 5), (5, 6), (5, 7)]),
    ]
}

fn fully_fired_board() -> Board {
    let mut board = Board::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            board = board.with_cell(r, c, CellState::Miss).unwrap();
        }
    }
    board
}

#[test]
fn test_adjacent_cells_order_and_bounds() {
    let mid: Vec<_> = adjacent_cells((5, 5)).collect();
    assert_eq!(mid, vec![(4, 5), (6, 5), (5, 4), (5, 6)]);

    let corner: Vec<_> = adjacent_cells((0, 0)).collect();
    assert_eq!(corner, vec![(1, 0), (0, 1)]);

    let far: Vec<_> = adjacent_cells((BOARD_SIZE - 1, BOARD_SIZE - 1)).collect();
    assert_eq!(far, vec![(BOARD_SIZE - 2, BOARD_SIZE - 1), (BOARD_SIZE - 1, BOARD_SIZE - 2)]);
}

#[test]
fn test_hit_enters_target_mode() {
    let state = AiState::new().after_shot((5, 5), ShotResult::Hit, &two_ships());
    assert_eq!(state.mode, AiMode::Target);
    assert_eq!(state.hit_stack, vec![(5, 5)]);
    assert_eq!(state.targets, vec![(4, 5), (6, 5), (5, 4), (5, 6)]);
}

#[test]
fn test_miss_changes_nothing() {
    let state = AiState::new().after_shot((5, 5), ShotResult::Hit, &two_ships());
    let after = state.clone().after_shot((9, 9), ShotResult::Miss, &two_ships());
    assert_eq!(after, state);
}

#[test]
fn test_sink_keeps_stale_targets_while_hits_remain() {
    let ships = two_ships();
    let state = AiState::new()
        .after_shot((5, 5), ShotResult::Hit, &ships)
        .after_shot((0, 0), ShotResult::Hit, &ships);
    let targets_before = state.targets.clone();

    let state = state.after_shot((0, 1), ShotResult::Sunk("Destroyer"), &ships);
    assert_eq!(state.hit_stack, vec![(5, 5)]);
    assert_eq!(state.mode, AiMode::Target);
    // neighbors of the sunk destroyer are left in place
    assert_eq!(state.targets, targets_before);
    assert!(state.targets.contains(&(1, 0)));

    let state = state.after_shot((5, 7), ShotResult::Sunk("Cruiser"), &ships);
    assert!(state.hit_stack.is_empty());
    assert!(state.targets.is_empty());
    assert_eq!(state.mode, AiMode::Hunt);
}

#[test]
fn test_targets_popped_last_in_first_out() {
    let state = AiState {
        mode: AiMode::Target,
        targets: vec![(1, 1), (2, 2), (3, 3)],
        hit_stack: vec![(2, 3)],
    };
    let mut rng = SmallRng::seed_from_u64(1);
    let (coord, next) = choose_target(&Board::new(), &state, Difficulty::Normal, &mut rng).unwrap();
    assert_eq!(coord, (3, 3));
    assert_eq!(next.targets, vec![(1, 1), (2, 2)]);
    assert_eq!(next.mode, AiMode::Target);
    // input untouched
    assert_eq!(state.targets.len(), 3);
}

#[test]
fn test_fired_targets_are_skipped() {
    let board = Board::new()
        .with_cell(3, 3, CellState::Miss)
        .unwrap()
        .with_cell(2, 2, CellState::Sunk)
        .unwrap();
    let state = AiState {
        mode: AiMode::Target,
        targets: vec![(1, 1), (2, 2), (3, 3)],
        hit_stack: vec![],
    };
    let mut rng = SmallRng::seed_from_u64(1);
    let (coord, next) = choose_target(&board, &state, Difficulty::Normal, &mut rng).unwrap();
    assert_eq!(coord, (1, 1));
    assert!(next.targets.is_empty());
}

#[test]
fn test_exhausted_targets_fall_back_to_hunt() {
    let board = Board::new().with_cell(4, 4, CellState::Hit).unwrap();
    let state = AiState {
        mode: AiMode::Target,
        targets: vec![(4, 4)],
        hit_stack: vec![(4, 4)],
    };
    let mut rng = SmallRng::seed_from_u64(9);
    let (coord, next) = choose_target(&board, &state, Difficulty::Normal, &mut rng).unwrap();
    assert_eq!(next.mode, AiMode::Hunt);
    assert!(next.targets.is_empty());
    assert_eq!(next.hit_stack, vec![(4, 4)]);
    assert!(board.is_unfired(coord.0, coord.1));
}

#[test]
fn test_easy_ignores_targets() {
    let state = AiState {
        mode: AiMode::Target,
        targets: vec![(0, 0)],
        hit_stack: vec![(1, 0)],
    };
    let board = Board::new().with_cell(0, 0, CellState::Miss).unwrap();
    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..50 {
        let (coord, next) = choose_target(&board, &state, Difficulty::Easy, &mut rng).unwrap();
        assert!(board.is_unfired(coord.0, coord.1));
        assert_eq!(next, state);
    }
}

#[test]
fn test_no_target_on_full_board() {
    let board = fully_fired_board();
    let mut rng = SmallRng::seed_from_u64(3);
    assert!(choose_target(&board, &AiState::new(), Difficulty::Normal, &mut rng).is_none());
    assert!(choose_target(&board, &AiState::new(), Difficulty::Easy, &mut rng).is_none());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// After a non-sinking hit the next normal pick is an unfired neighbor of
    /// that hit whenever one exists.
    #[test]
    fn follow_up_is_a_neighbor_of_last_hit(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (mut board, mut ships) = random_fleet(&mut rng).unwrap();
        let mut state = AiState::new();

        for _ in 0..BOARD_SIZE * BOARD_SIZE {
            let Some((coord, next)) = choose_target(&board, &state, Difficulty::Normal, &mut rng) else {
                break;
            };
            let outcome = process_shot(&board, &ships, coord.0, coord.1).unwrap();
            state = next.after_shot(coord, outcome.result, &ships);
            board = outcome.board;
            ships = outcome.ships;

            if outcome.result == ShotResult::Hit {
                let open: Vec<_> = adjacent_cells(coord)
                    .filter(|&(r, c)| board.is_unfired(r, c))
                    .collect();
                if open.is_empty() {
                    continue;
                }
                let (pick, _) = choose_target(&board, &state, Difficulty::Normal, &mut rng).unwrap();
                prop_assert!(open.contains(&pick), "picked {:?}, expected one of {:?}", pick, open);
            }
        }
    }

    #[test]
    fn picks_are_always_unfired(seed in any::<u64>(), easy in any::<bool>()) {
        let difficulty = if easy { Difficulty::Easy } else { Difficulty::Normal };
        let mut rng = SmallRng::seed_from_u64(seed);
        let (mut board, mut ships) = random_fleet(&mut rng).unwrap();
        let mut state = AiState::new();

        for _ in 0..40 {
            let (coord, next) = choose_target(&board, &state, difficulty, &mut rng).unwrap();
            prop_assert!(board.is_unfired(coord.0, coord.1));
            let outcome = process_shot(&board, &ships, coord.0, coord.1).unwrap();
            state = next.after_shot(coord, outcome.result, &ships);
            board = outcome.board;
            ships = outcome.ships;
        }
    }
}
