//! Whole-search tests against canonical scenarios and the brute-force
//! reference.

mod test_properties;
mod test_scenarios;

use crate::{SearchOutcome, Solution, Solver};
use rivercross_config::CrossingConfig;
use rivercross_test::PathMembers;

fn solve(config: &CrossingConfig) -> SearchOutcome {
    Solver::from_config(config).unwrap().solve()
}

fn members(solution: &Solution) -> PathMembers {
    solution
        .path()
        .iter()
        .map(|c| c.members().iter().map(|id| id.index()).collect())
        .collect()
}

fn sorted_members(outcome: &SearchOutcome) -> Vec<PathMembers> {
    let mut paths: Vec<_> = outcome.solutions.iter().map(members).collect();
    paths.sort();
    paths
}
