//! Named scenario runs for sensitivity and what-if analysis
//!
//! Each scenario is an independent driver set over the same seed. Runs
//! share no state, so they fan out across threads with rayon.

use crate::drivers::DriverSet;
use crate::error::ModelError;
use crate::projection::{run, Projection};
use crate::statements::HistoricalActuals;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A named driver set for comparison runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub drivers: DriverSet,
}

/// Outcome of one scenario run.
#[derive(Debug)]
pub struct ScenarioResult {
    pub name: String,
    pub result: Result<Projection, ModelError>,
}

/// Run every scenario against the same seed, in parallel.
///
/// Results come back in input order regardless of completion order. A
/// failed scenario does not abort the others; its error is carried in its
/// slot.
pub fn run_scenarios(
    seed: &HistoricalActuals,
    scenarios: &[Scenario],
    horizon: u32,
) -> Vec<ScenarioResult> {
    scenarios
        .par_iter()
        .map(|scenario| {
            let result = run(seed, &scenario.drivers, horizon).map(Projection::from_records);
            ScenarioResult {
                name: scenario.name.clone(),
                result,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::run as run_single;

    fn scenarios() -> Vec<Scenario> {
        vec![
            Scenario {
                name: "base".into(),
                drivers: DriverSet::default(),
            },
            Scenario {
                name: "high growth".into(),
                drivers: DriverSet {
                    growth_rate: 0.50,
                    ..Default::default()
                },
            },
            Scenario {
                name: "loss making".into(),
                drivers: DriverSet {
                    cogs_ratio: 0.9,
                    sga_ratio: 0.3,
                    ..Default::default()
                },
            },
        ]
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let seed = HistoricalActuals::default();
        let results = run_scenarios(&seed, &scenarios(), 5);

        assert_eq!(results.len(), 3);
        for (scenario, outcome) in scenarios().iter().zip(&results) {
            assert_eq!(scenario.name, outcome.name);
            let sequential = run_single(&seed, &scenario.drivers, 5).unwrap();
            let parallel = outcome.result.as_ref().unwrap();
            assert_eq!(parallel.records(), &sequential[..]);
        }
    }

    #[test]
    fn test_failed_scenario_isolated() {
        let seed = HistoricalActuals::default();
        let mut set = scenarios();
        set[1].drivers.growth_rate = f64::NAN;

        let results = run_scenarios(&seed, &set, 5);
        assert!(results[0].result.is_ok());
        assert!(results[1].result.is_err());
        assert!(results[2].result.is_ok());
    }

    #[test]
    fn test_scenario_json_roundtrip() {
        let json = r#"[{"name": "lean", "drivers": {"sga_ratio": 0.12}}, {"name": "base"}]"#;
        let set: Vec<Scenario> = serde_json::from_str(json).unwrap();
        assert_eq!(set[0].drivers.sga_ratio, 0.12);
        assert_eq!(set[1].drivers, DriverSet::default());
    }
}
