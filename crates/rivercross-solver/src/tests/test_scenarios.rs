//! Canonical puzzle instances.

use super::*;
use rivercross_config::StaminaMode;
use rivercross_core::{Direction, HorseId};
use rivercross_test::{classic_bridge, equal_trio, exhausted_herd, two_horses};

#[test]
fn test_two_horses_single_crossing() {
    let config = two_horses();
    let outcome = solve(&config);

    assert_eq!(outcome.num_of_solutions(), 1);
    let solution = &outcome.solutions.solutions()[0];
    assert_eq!(solution.total_time(), 2);
    assert_eq!(solution.horses_time_spent(), &[2, 2]);

    let herd = config.herd().unwrap();
    assert_eq!(solution.path_labels(&herd), vec![vec!["A", "B"]]);
}

#[test]
fn test_classic_bridge_returns_by_fastest() {
    let outcome = solve(&classic_bridge());

    assert_eq!(outcome.best_total(), Some(17));
    assert_eq!(outcome.num_of_solutions(), 2);
    let fastest = [HorseId::new(0), HorseId::new(1)];
    for solution in outcome.solutions.iter() {
        assert_eq!(solution.total_time(), 17);
        for crossing in solution.path() {
            if crossing.direction() == Direction::Return {
                assert!(fastest.contains(&crossing.members()[0]));
            }
        }
    }
}

#[test]
fn test_exhausted_herd_has_no_solution() {
    let outcome = solve(&exhausted_herd());

    assert_eq!(outcome.num_of_solutions(), 0);
    assert_eq!(outcome.best_total(), None);
}

#[test]
fn test_equal_trio_crosses_at_once() {
    let outcome = solve(&equal_trio());

    assert_eq!(outcome.num_of_solutions(), 1);
    let solution = &outcome.solutions.solutions()[0];
    assert_eq!(solution.total_time(), 4);
    assert_eq!(solution.len(), 1);
    assert_eq!(solution.path()[0].len(), 3);
}

#[test]
fn test_single_horse_herd() {
    let outcome = solve(&CrossingConfig::new(vec![7], 2));

    assert_eq!(outcome.best_total(), Some(7));
    assert_eq!(outcome.solutions.solutions()[0].horses_time_spent(), &[7]);
}

#[test]
fn test_per_crossing_stamina_ignores_history() {
    // Cumulatively, whoever shuttles back pays 4 + 1 + 1 = 6.
    let cumulative = CrossingConfig::new(vec![1, 1, 4], 2).with_time_limit(5);
    assert_eq!(solve(&cumulative).num_of_solutions(), 0);

    let per_crossing = cumulative
        .clone()
        .with_stamina_mode(StaminaMode::PerCrossing);
    let outcome = solve(&per_crossing);
    assert_eq!(outcome.best_total(), Some(6));
    assert!(outcome
        .solutions
        .iter()
        .any(|s| s.horses_time_spent().iter().any(|&spent| spent > 5)));
}

#[test]
fn test_per_crossing_stamina_below_slowest() {
    let config = classic_bridge()
        .with_time_limit(9)
        .with_stamina_mode(StaminaMode::PerCrossing);
    assert_eq!(solve(&config).num_of_solutions(), 0);
}

#[test]
fn test_disabled_limit_matches_unlimited() {
    let unlimited = solve(&classic_bridge());
    let zero = solve(&classic_bridge().with_time_limit(0));
    let negative = solve(&classic_bridge().with_time_limit(-3));

    assert_eq!(zero.solutions, unlimited.solutions);
    assert_eq!(negative.solutions, unlimited.solutions);
}

#[test]
fn test_maximal_durations_do_not_overflow() {
    let trio = CrossingConfig::new(vec![i64::MAX; 3], 2);
    assert_eq!(solve(&trio).num_of_solutions(), 0);
    assert_eq!(solve(&trio.clone().with_parallel(true)).num_of_solutions(), 0);

    let pair = CrossingConfig::new(vec![1, i64::MAX], 2).with_time_limit(5);
    assert_eq!(solve(&pair).num_of_solutions(), 0);

    let outcome = solve(&CrossingConfig::new(vec![1, i64::MAX], 2));
    assert_eq!(outcome.best_total(), Some(i64::MAX as u64));
}
