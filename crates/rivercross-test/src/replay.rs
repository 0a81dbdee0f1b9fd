//! Checked replay of a crossing path.

use rivercross_core::{AccumulatedTime, BankState, Crossing, Herd, Result};

/// Every state visited while replaying a path, starting from the initial one.
#[derive(Debug, Clone)]
pub struct Replay {
    pub states: Vec<BankState>,
    pub times: Vec<AccumulatedTime>,
    pub total: u64,
}

impl Replay {
    /// Returns the final bank state.
    pub fn last_state(&self) -> Option<&BankState> {
        self.states.last()
    }

    /// Returns the final per-horse times.
    pub fn last_times(&self) -> Option<&AccumulatedTime> {
        self.times.last()
    }
}

/// Replays `path` from the initial state with checked transitions.
///
/// Fails on the first crossing that is not legal from the current state.
pub fn replay(herd: &Herd, path: &[Crossing]) -> Result<Replay> {
    let mut state = BankState::initial(herd.len());
    let mut time = AccumulatedTime::new(herd.len());
    let mut replay = Replay {
        states: vec![state],
        times: vec![time.clone()],
        total: 0,
    };

    for crossing in path {
        state.apply(crossing)?;
        time.add(crossing.mask(), crossing.duration());
        replay.total += crossing.duration();
        replay.states.push(state);
        replay.times.push(time.clone());
    }
    Ok(replay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rivercross_core::{Direction, HorseId};

    #[test]
    fn test_replay_rejects_wrong_bank() {
        let herd = Herd::from_durations(vec![1, 2]).unwrap();
        let back = Crossing::new([HorseId::new(0)], Direction::Return, &herd);
        assert!(replay(&herd, &[back]).is_err());
    }

    #[test]
    fn test_replay_accumulates() {
        let herd = Herd::from_durations(vec![1, 2]).unwrap();
        let pair = Crossing::new([HorseId::new(0), HorseId::new(1)], Direction::Forward, &herd);
        let run = replay(&herd, &[pair]).unwrap();

        assert_eq!(run.total, 2);
        assert!(run.last_state().unwrap().is_goal());
        assert_eq!(run.last_times().unwrap().as_slice(), &[2, 2]);
    }
}
