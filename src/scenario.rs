// Copyright 2026 Citizen Ledger Contributors. All rights reserved.
// Citizen Ledger Tokenomics Simulation - Scenario Comparison

//! Side-by-side runs of independent configurations.
//!
//! Each named override produces a derived configuration atop a fresh default
//! and drives its own [`SimulationRunner`]. Runs share no mutable state, so
//! a scenario's records are identical whether it runs alone or in a batch.

use std::collections::BTreeMap;

use crate::simulation::SimulationRunner;
use crate::types::{ConfigError, ConfigOverride, EmissionPhase, SimulationConfig, SimulationRecord};

/// Result sequences keyed by scenario name, in stable name order.
pub type ScenarioResults = BTreeMap<String, Vec<SimulationRecord>>;

/// Run every named override as an independent simulation.
///
/// Overrides apply atop `SimulationConfig::default()`, never atop another
/// scenario's state. The first invalid derived configuration aborts the
/// batch; no partial result is returned.
pub fn compare(
    scenarios: &BTreeMap<String, ConfigOverride>,
    staking_rate: f64,
) -> Result<ScenarioResults, ConfigError> {
    let base = SimulationConfig::default();
    let mut results = ScenarioResults::new();
    for (name, overrides) in scenarios {
        tracing::debug!(scenario = %name, "running scenario");
        let runner = SimulationRunner::new(overrides.apply(&base))?;
        results.insert(name.clone(), runner.run(staking_rate));
    }
    Ok(results)
}

/// The stock Citizen Ledger scenario set: launch parameters plus halved and
/// doubled emission curves and a 40% treasury variant.
pub fn builtin_scenarios() -> BTreeMap<String, ConfigOverride> {
    let mut scenarios = BTreeMap::new();
    scenarios.insert("base".to_string(), ConfigOverride::default());
    scenarios.insert(
        "conservative".to_string(),
        ConfigOverride {
            phases: Some(vec![
                EmissionPhase::new("Year 1", 0, 5_256_000, 50.0),
                EmissionPhase::new("Year 2-3", 5_256_000, 15_768_000, 25.0),
                EmissionPhase::new("Year 4-5", 15_768_000, 26_280_000, 12.5),
                EmissionPhase::new("Year 6+", 26_280_000, 0, 5.0),
            ]),
            ..Default::default()
        },
    );
    scenarios.insert(
        "aggressive".to_string(),
        ConfigOverride {
            phases: Some(vec![
                EmissionPhase::new("Year 1", 0, 5_256_000, 200.0),
                EmissionPhase::new("Year 2-3", 5_256_000, 15_768_000, 100.0),
                EmissionPhase::new("Year 4-5", 15_768_000, 26_280_000, 50.0),
                EmissionPhase::new("Year 6+", 26_280_000, 0, 25.0),
            ]),
            ..Default::default()
        },
    );
    scenarios.insert(
        "treasury_heavy".to_string(),
        ConfigOverride {
            treasury_share_bps: Some(4_000),
            ..Default::default()
        },
    );
    scenarios
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::DEFAULT_STAKING_RATE;

    #[test]
    fn builtin_set_is_complete_and_valid() {
        let scenarios = builtin_scenarios();
        let names: Vec<&str> = scenarios.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            ["aggressive", "base", "conservative", "treasury_heavy"]
        );
        let base = SimulationConfig::default();
        for overrides in scenarios.values() {
            overrides
                .apply(&base)
                .validate()
                .expect("test: builtin scenario validates");
        }
    }

    #[test]
    fn base_scenario_matches_default_config_run() {
        let mut only_base = BTreeMap::new();
        only_base.insert("base".to_string(), ConfigOverride::default());
        let results =
            compare(&only_base, DEFAULT_STAKING_RATE).expect("test: base scenario runs");

        let runner =
            SimulationRunner::new(SimulationConfig::default()).expect("test: valid config");
        assert_eq!(results["base"], runner.run_default());
    }

    #[test]
    fn invalid_scenario_aborts_batch() {
        let mut scenarios = builtin_scenarios();
        scenarios.insert(
            "broken".to_string(),
            ConfigOverride {
                max_supply: Some(0),
                ..Default::default()
            },
        );
        assert!(compare(&scenarios, DEFAULT_STAKING_RATE).is_err());
    }
}
