use salvo::{
    AttackOutcome, Board, CellStatus, CellView, Cells, Mode, TargetingError, TargetingStrategy, CELL_COUNT,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn sunk(cells: &[usize]) -> AttackOutcome {
    AttackOutcome::Sunk {
        length: cells.len(),
        cells: Cells::from_indices(cells.iter().copied()).unwrap(),
    }
}

#[test]
fn test_starts_hunting_full_fleet() {
    let mut strategy = TargetingStrategy::new();
    assert_eq!(strategy.mode(), Mode::Hunt);
    assert_eq!(strategy.remaining_lengths(), &[5, 4, 3, 3, 2]);
    assert!(strategy.known_hits().is_empty());
    assert!(strategy.probability_map().is_zero());

    let first = strategy.choose_attack_cell().unwrap();
    let map = strategy.probability_map();
    assert_eq!(map.get(first), Some(map.max()));
    // symmetric board: the first maximal cell sits in the top half
    assert!(first < 50);
}

#[test]
fn test_miss_changes_nothing_but_the_cell() {
    let mut strategy = TargetingStrategy::new();
    strategy.apply_outcome(12, AttackOutcome::Miss).unwrap();
    assert_eq!(strategy.cell_status(12), CellStatus::Miss);
    assert_eq!(strategy.mode(), Mode::Hunt);
    assert_eq!(strategy.remaining_lengths().len(), 5);
    assert_eq!(strategy.shots_fired(), 1);
}

#[test]
fn test_hit_switches_to_target() {
    let mut strategy = TargetingStrategy::new();
    strategy.apply_outcome(45, AttackOutcome::Hit).unwrap();
    assert_eq!(strategy.mode(), Mode::Target);
    assert!(strategy.known_hits().contains(45));

    let next = strategy.choose_attack_cell().unwrap();
    assert!([35, 44, 46, 55].contains(&next), "next was {}", next);
    // only cells on the hit's row and column are scored
    assert_eq!(strategy.probability_map().get(0), Some(0));
}

#[test]
fn test_sinking_last_pending_ship_returns_to_hunt() {
    let mut strategy = TargetingStrategy::new();
    strategy.apply_outcome(0, AttackOutcome::Hit).unwrap();
    strategy.apply_outcome(1, sunk(&[0, 1])).unwrap();

    assert_eq!(strategy.remaining_lengths(), &[5, 4, 3, 3]);
    assert!(strategy.known_hits().is_empty());
    assert_eq!(strategy.mode(), Mode::Hunt);
    assert_eq!(strategy.cell_status(0), CellStatus::SunkMember);
    assert_eq!(strategy.cell_status(1), CellStatus::SunkMember);
}

#[test]
fn test_equal_lengths_remove_one_entry() {
    let mut strategy = TargetingStrategy::new();
    strategy.apply_outcome(20, AttackOutcome::Hit).unwrap();
    strategy.apply_outcome(21, AttackOutcome::Hit).unwrap();
    strategy.apply_outcome(22, sunk(&[20, 21, 22])).unwrap();
    assert_eq!(strategy.remaining_lengths(), &[5, 4, 3, 2]);
}

#[test]
fn test_pending_hits_on_other_ship_keep_targeting() {
    let mut strategy = TargetingStrategy::new();
    strategy.apply_outcome(0, AttackOutcome::Hit).unwrap();
    strategy.apply_outcome(77, AttackOutcome::Hit).unwrap();
    strategy.apply_outcome(1, sunk(&[0, 1])).unwrap();

    assert_eq!(strategy.mode(), Mode::Target);
    let pending: Vec<_> = strategy.known_hits().iter().collect();
    assert_eq!(pending, vec![77]);
}

#[test]
fn test_unexpected_sunk_length_keeps_multiset() {
    let mut strategy = TargetingStrategy::with_lengths(&[3]);
    strategy.apply_outcome(0, AttackOutcome::Hit).unwrap();
    strategy.apply_outcome(1, sunk(&[0, 1])).unwrap();
    assert_eq!(strategy.remaining_lengths(), &[3]);
    assert_eq!(strategy.mode(), Mode::Hunt);
}

#[test]
fn test_apply_outcome_rejects_resolved_cells() {
    let mut strategy = TargetingStrategy::new();
    strategy.apply_outcome(5, AttackOutcome::Miss).unwrap();
    assert_eq!(
        strategy.apply_outcome(5, AttackOutcome::Hit).unwrap_err(),
        TargetingError::AlreadyResolved(5)
    );
    assert_eq!(
        strategy.apply_outcome(100, AttackOutcome::Miss).unwrap_err(),
        TargetingError::IndexOutOfBounds(100)
    );
    assert_eq!(strategy.shots_fired(), 1);
}

#[test]
fn test_last_untouched_cell_is_chosen() {
    let mut strategy = TargetingStrategy::new();
    for i in (0..CELL_COUNT).filter(|&i| i != 77) {
        let outcome = if i % 3 == 0 { AttackOutcome::Hit } else { AttackOutcome::Miss };
        strategy.apply_outcome(i, outcome).unwrap();
    }
    assert_eq!(strategy.choose_attack_cell().unwrap(), 77);

    strategy.apply_outcome(77, AttackOutcome::Miss).unwrap();
    assert_eq!(
        strategy.choose_attack_cell().unwrap_err(),
        TargetingError::NoCandidateCell
    );
}

#[test]
fn test_no_remaining_lengths_still_picks_a_cell() {
    let mut strategy = TargetingStrategy::with_lengths(&[]);
    assert_eq!(strategy.choose_attack_cell().unwrap(), 0);
    assert!(strategy.probability_map().is_zero());
}

#[test]
fn test_decisions_are_reproducible() {
    let mut a = TargetingStrategy::new();
    let mut b = TargetingStrategy::new();
    for (index, outcome) in [(44, AttackOutcome::Miss), (33, AttackOutcome::Hit), (34, AttackOutcome::Miss)] {
        a.apply_outcome(index, outcome).unwrap();
        b.apply_outcome(index, outcome).unwrap();
    }
    assert_eq!(a.choose_attack_cell(), b.choose_attack_cell());
    assert_eq!(a.probability_map(), b.probability_map());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Play the strategy against a random fleet, checking invariants after every shot.
    #[test]
    fn strategy_sinks_random_fleet(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.place_fleet_randomly(&mut rng).unwrap();
        let mut strategy = TargetingStrategy::new();

        while !board.fleet_sunk() {
            prop_assert!(strategy.shots_fired() < CELL_COUNT);
            let index = strategy.choose_attack_cell().unwrap();
            prop_assert_eq!(strategy.cell_status(index), CellStatus::Untouched);
            let outcome = board.attack(index).unwrap();
            strategy.apply_outcome(index, outcome).unwrap();

            prop_assert_eq!(strategy.mode() == Mode::Target, !strategy.known_hits().is_empty());
            for ship in board.ships() {
                prop_assert!(ship.hits() <= ship.length());
                prop_assert_eq!(ship.is_sunk(), ship.hits() == ship.length());
            }
            for i in 0..CELL_COUNT {
                prop_assert_eq!(strategy.cell_status(i), board.cell_status(i));
            }
        }
        prop_assert!(strategy.remaining_lengths().is_empty());
        prop_assert_eq!(strategy.mode(), Mode::Hunt);
    }
}

#[test]
fn test_sunk_outcome_must_match_attacked_cell() {
    let mut strategy = TargetingStrategy::new();
    // ship cells do not include the attacked cell
    assert_eq!(
        strategy.apply_outcome(5, sunk(&[40, 41])).unwrap_err(),
        TargetingError::InconsistentOutcome(5)
    );
    // length disagrees with the cells
    let wrong_length = AttackOutcome::Sunk {
        length: 3,
        cells: Cells::from_indices([5, 6]).unwrap(),
    };
    assert_eq!(
        strategy.apply_outcome(5, wrong_length).unwrap_err(),
        TargetingError::InconsistentOutcome(5)
    );

    assert_eq!(strategy.cell_status(5), CellStatus::Untouched);
    assert_eq!(strategy.cell_status(40), CellStatus::Untouched);
    assert_eq!(strategy.shots_fired(), 0);
    assert_eq!(strategy.remaining_lengths(), &[5, 4, 3, 3, 2]);

    strategy.apply_outcome(5, AttackOutcome::Hit).unwrap();
    strategy.apply_outcome(6, sunk(&[5, 6])).unwrap();
    assert_eq!(strategy.remaining_lengths(), &[5, 4, 3, 3]);
}

#[test]
fn test_recompute_probabilities_leaves_state_alone() {
    let mut strategy = TargetingStrategy::new();
    strategy.apply_outcome(44, AttackOutcome::Miss).unwrap();
    let view_before = *strategy.view();
    assert!(strategy.probability_map().is_zero());

    let map = *strategy.recompute_probabilities();
    assert!(!map.is_zero());
    assert_eq!(map.get(44), Some(0));
    assert_eq!(strategy.probability_map(), &map);
    assert_eq!(strategy.view(), &view_before);
    assert_eq!(strategy.shots_fired(), 1);
    assert_eq!(strategy.mode(), Mode::Hunt);

    // choosing afterwards sees the same map
    let index = strategy.choose_attack_cell().unwrap();
    assert_eq!(strategy.probability_map(), &map);
    assert_eq!(map.get(index), Some(map.max()));
}
