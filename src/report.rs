// Copyright 2026 Citizen Ledger Contributors. All rights reserved.
// Citizen Ledger Tokenomics Simulation - Report Derivation

//! Milestone and summary metrics derived from a finished record sequence.
//! Pure data only; serialization to disk lives with the `simulate` binary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{SimulationConfig, SimulationRecord};

/// Milestone years reported alongside every run.
pub const MILESTONE_YEARS: [u32; 4] = [1, 3, 5, 10];

/// First record at or past `year`, if the run reached it.
pub fn milestone(records: &[SimulationRecord], year: f64) -> Option<&SimulationRecord> {
    records.iter().find(|r| r.year >= year)
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Headline metrics of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub final_supply: f64,
    pub final_supply_percent: f64,
    pub final_treasury_balance: f64,
    pub total_staker_rewards: f64,
    /// Year of the first sample at or above 80% of max supply, if any.
    pub years_to_80_percent: Option<f64>,
}

impl SimulationSummary {
    /// Summarize a record sequence. Returns `None` for an empty run.
    pub fn from_records(records: &[SimulationRecord]) -> Option<Self> {
        let last = records.last()?;
        Some(Self {
            final_supply: last.total_supply,
            final_supply_percent: last.supply_percent,
            final_treasury_balance: last.treasury_balance,
            total_staker_rewards: last.staker_rewards_total,
            years_to_80_percent: records
                .iter()
                .find(|r| r.supply_percent >= 80.0)
                .map(|r| r.year),
        })
    }
}

// ---------------------------------------------------------------------------
// Full report payload
// ---------------------------------------------------------------------------

/// Everything the `simulate` binary serializes to `report.json`: the
/// configuration that produced the run, milestone samples, and the summary.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub config: SimulationConfig,
    /// Keyed `"year_1"`, `"year_3"`, ...; `None` where the horizon is shorter.
    pub milestones: BTreeMap<String, Option<SimulationRecord>>,
    pub summary: SimulationSummary,
}

impl SimulationReport {
    /// Assemble the report for a finished run. Returns `None` for an empty
    /// record sequence.
    pub fn new(config: &SimulationConfig, records: &[SimulationRecord]) -> Option<Self> {
        let summary = SimulationSummary::from_records(records)?;
        let milestones = MILESTONE_YEARS
            .iter()
            .map(|&y| (format!("year_{y}"), milestone(records, y as f64).cloned()))
            .collect();
        Some(Self {
            config: config.clone(),
            milestones,
            summary,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
