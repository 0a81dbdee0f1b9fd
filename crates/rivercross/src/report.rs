//! JSON result report.

use std::fs;
use std::io;
use std::path::Path;

use rivercross_core::Herd;
use rivercross_solver::{SearchOutcome, Solution};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while writing or reading a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The serialized result of a search.
///
/// # Example
///
/// ```
/// use rivercross::SolutionReport;
/// use rivercross_config::CrossingConfig;
///
/// let report = rivercross::solve(&CrossingConfig::new(vec![1, 2], 2)).unwrap();
/// let json = report.to_json_string().unwrap();
///
/// let back = SolutionReport::from_json_str(&json).unwrap();
/// assert_eq!(back.num_of_solutions, 1);
/// assert_eq!(back.solutions[0].path, vec![vec!["A", "B"]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub num_of_solutions: usize,
    pub solutions: Vec<SolutionEntry>,
}

/// One optimal schedule as written to the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionEntry {
    pub total_time: u64,
    /// Time spent crossing per horse, in input order.
    pub horses_time_spent: Vec<u64>,
    /// Labels of the horses on each crossing.
    pub path: Vec<Vec<String>>,
}

impl SolutionEntry {
    fn new(solution: &Solution, herd: &Herd) -> Self {
        Self {
            total_time: solution.total_time(),
            horses_time_spent: solution.horses_time_spent().to_vec(),
            path: solution.path_labels(herd),
        }
    }
}

impl SolutionReport {
    /// Builds a report from a finished search over `herd`.
    pub fn from_outcome(outcome: &SearchOutcome, herd: &Herd) -> Self {
        let solutions: Vec<_> = outcome
            .solutions
            .iter()
            .map(|s| SolutionEntry::new(s, herd))
            .collect();
        Self {
            num_of_solutions: solutions.len(),
            solutions,
        }
    }

    /// Returns the optimal total, if any solution exists.
    pub fn best_total(&self) -> Option<u64> {
        self.solutions.first().map(|s| s.total_time)
    }

    pub fn to_json_string(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Writes the report as pretty-printed JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let mut json = self.to_json_string()?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }

    pub fn read_json(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rivercross_test::{classic_bridge, exhausted_herd};

    #[test]
    fn test_report_shape() {
        let report = crate::solve(&classic_bridge()).unwrap();
        let json = report.to_json_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["num_of_solutions"], 2);
        let first = &value["solutions"][0];
        assert_eq!(first["total_time"], 17);
        assert_eq!(first["horses_time_spent"].as_array().unwrap().len(), 4);
        assert_eq!(first["path"].as_array().unwrap().len(), 5);
        assert!(first["path"][0].as_array().unwrap().iter().all(|l| l.is_string()));
    }

    #[test]
    fn test_empty_report() {
        let report = crate::solve(&exhausted_herd()).unwrap();
        assert_eq!(report.num_of_solutions, 0);
        assert!(report.solutions.is_empty());
        assert_eq!(report.best_total(), None);
        assert!(report.to_json_string().unwrap().contains("\"num_of_solutions\": 0"));
    }

    #[test]
    fn test_write_and_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solution.json");
        let report = crate::solve(&classic_bridge()).unwrap();

        report.write_json(&path).unwrap();
        assert_eq!(SolutionReport::read_json(&path).unwrap(), report);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SolutionReport::read_json(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
