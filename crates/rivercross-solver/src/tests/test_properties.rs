//! Properties that hold for every search result.

use super::*;
use rivercross_config::StaminaMode;
use rivercross_core::{Bank, Direction};
use rivercross_test::{brute_force, classic_bridge, five_horse_trio_boat, replay};

fn configs() -> Vec<CrossingConfig> {
    vec![
        classic_bridge(),
        classic_bridge().with_time_limit(12),
        five_horse_trio_boat(),
        five_horse_trio_boat().with_time_limit(14),
        CrossingConfig::new(vec![2, 3, 3, 7], 2),
        CrossingConfig::new(vec![1, 1, 4], 2).with_stamina_mode(StaminaMode::PerCrossing),
        CrossingConfig::new(vec![5, 1, 2, 4], 4),
    ]
}

#[test]
fn test_matches_brute_force() {
    for config in configs() {
        let outcome = solve(&config);
        // Any cheaper schedule the engine missed would show up below the cap.
        let cap = outcome.best_total().unwrap_or(60);
        let reference = brute_force(&config, cap).unwrap();

        assert_eq!(
            outcome.best_total(),
            reference.best,
            "best total differs for {:?}",
            config.horse_times
        );
        assert_eq!(
            sorted_members(&outcome),
            reference.sorted_paths(),
            "optimal set differs for {:?}",
            config.horse_times
        );
    }
}

#[test]
fn test_replay_partition_and_monotone_time() {
    for config in configs() {
        let herd = config.herd().unwrap();
        let outcome = solve(&config);

        for solution in outcome.solutions.iter() {
            let run = replay(&herd, solution.path()).unwrap();
            assert!(run.states.iter().all(|s| s.is_partition_valid()));
            assert!(run.last_state().unwrap().is_goal());
            assert_eq!(run.total, solution.total_time());
            assert_eq!(
                run.last_times().unwrap().as_slice(),
                solution.horses_time_spent()
            );

            for pair in run.times.windows(2) {
                let (before, after) = (pair[0].as_slice(), pair[1].as_slice());
                assert!(before.iter().zip(after).all(|(b, a)| b <= a));
            }
        }
    }
}

#[test]
fn test_no_wasteful_crossings() {
    for config in configs() {
        let herd = config.herd().unwrap();
        let limit = config.group_limit();
        let outcome = solve(&config);

        for solution in outcome.solutions.iter() {
            let run = replay(&herd, solution.path()).unwrap();
            for (crossing, state) in solution.path().iter().zip(&run.states) {
                match crossing.direction() {
                    Direction::Forward => {
                        assert!(crossing.len() <= limit);
                        if state.at_boat().len() >= 2 {
                            assert!(crossing.len() >= 2);
                        }
                    }
                    Direction::Return => assert_eq!(crossing.len(), 1),
                }
            }
            let last = solution.path().last().unwrap();
            assert_eq!(last.direction().target(), Bank::Destination);
        }
    }
}

#[test]
fn test_cumulative_stamina_respected() {
    for config in configs() {
        let (Some(limit), StaminaMode::Cumulative) = (config.stamina_limit(), config.stamina_mode)
        else {
            continue;
        };
        for solution in solve(&config).solutions.iter() {
            assert!(solution.horses_time_spent().iter().all(|&t| t <= limit));
        }
    }
}

#[test]
fn test_idempotent() {
    for config in configs() {
        let first = solve(&config);
        let second = solve(&config);
        assert_eq!(first.solutions, second.solutions);
    }
}

#[test]
fn test_parallel_equals_sequential() {
    for config in configs() {
        let sequential = solve(&config);
        let parallel = solve(&config.clone().with_parallel(true));
        assert_eq!(parallel.solutions, sequential.solutions);
    }
}
