// Copyright 2026 Citizen Ledger Contributors. All rights reserved.
// Citizen Ledger Tokenomics Simulation - Configuration & Record Types

use serde::{Deserialize, Serialize};

/// Basis points in a whole (10000 bps = 100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Precondition violations on a [`SimulationConfig`].
///
/// All variants are detected eagerly, before any sample is computed. Once a
/// run starts every step is a total function.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid supply config: initial supply {initial_supply} with max supply {max_supply}")]
    InvalidSupplyConfig { max_supply: u64, initial_supply: u64 },

    #[error("treasury share {0} bps outside [0, 10000]")]
    InvalidTreasuryShare(u32),

    #[error("invalid emission phase {label:?}: {reason}")]
    InvalidPhaseConfig { label: String, reason: &'static str },

    #[error("invalid sampling config: {0}")]
    InvalidSamplingConfig(&'static str),
}

// ---------------------------------------------------------------------------
// EmissionPhase
// ---------------------------------------------------------------------------

/// A block-range-bounded emission rule.
///
/// Phases are matched in list order and the first phase covering a block
/// wins, so overlapping ranges are a documented policy rather than an error
/// (see [`crate::emission::rate_at`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionPhase {
    /// Display name ("Year 1", "Year 6+", ...).
    pub label: String,
    /// Inclusive lower bound.
    pub start_block: u64,
    /// Exclusive upper bound; 0 is a sentinel for "open-ended".
    pub end_block: u64,
    /// Nominal mint rate while this phase is active.
    pub tokens_per_block: f64,
}

impl EmissionPhase {
    pub fn new(label: &str, start_block: u64, end_block: u64, tokens_per_block: f64) -> Self {
        Self {
            label: label.to_string(),
            start_block,
            end_block,
            tokens_per_block,
        }
    }

    /// Whether this phase covers `block`.
    pub fn contains(&self, block: u64) -> bool {
        block >= self.start_block && (self.end_block == 0 || block < self.end_block)
    }
}

// ---------------------------------------------------------------------------
// SimulationConfig
// ---------------------------------------------------------------------------

/// Immutable simulation configuration.
///
/// Constructed once and read-only for the duration of a run. The default
/// reproduces the Citizen Ledger launch parameters: 10B max supply, 100M
/// genesis, four emission phases stepping 100 -> 10 tokens per block, 20%
/// treasury share, supply-ratio difficulty scaling on, 6-second blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Hard cap on circulating supply.
    pub max_supply: u64,
    /// Genesis supply, must be <= `max_supply`.
    pub initial_supply: u64,
    /// Ordered emission phases (ascending `start_block`).
    pub phases: Vec<EmissionPhase>,
    /// Basis points of each emission routed to the treasury.
    pub treasury_share_bps: u32,
    /// Supply-ratio difficulty scaling toggle.
    pub difficulty_enabled: bool,
    /// Block time, informational.
    pub block_time_seconds: u64,
    /// Annualization and sampling constant.
    pub blocks_per_year: u64,
    /// Horizon length in years.
    pub simulation_years: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        // ~5.2M blocks/year at 6s
        Self {
            max_supply: 10_000_000_000,
            initial_supply: 100_000_000,
            phases: vec![
                EmissionPhase::new("Year 1", 0, 5_256_000, 100.0),
                EmissionPhase::new("Year 2-3", 5_256_000, 15_768_000, 50.0),
                EmissionPhase::new("Year 4-5", 15_768_000, 26_280_000, 25.0),
                EmissionPhase::new("Year 6+", 26_280_000, 0, 10.0),
            ],
            treasury_share_bps: 2_000,
            difficulty_enabled: true,
            block_time_seconds: 6,
            blocks_per_year: 5_256_000,
            simulation_years: 10,
        }
    }
}

impl SimulationConfig {
    /// Treasury share as a fraction in [0, 1].
    pub fn treasury_share(&self) -> f64 {
        self.treasury_share_bps as f64 / BPS_DENOMINATOR as f64
    }

    /// Total block horizon covered by a run.
    pub fn total_blocks(&self) -> u64 {
        self.blocks_per_year * self.simulation_years as u64
    }

    /// Sampling interval in blocks (monthly resolution, never zero).
    pub fn sample_interval(&self) -> u64 {
        (self.blocks_per_year / 12).max(1)
    }

    /// Fail-fast precondition check. Called by the runner before the first
    /// sample; invalid configuration never surfaces mid-run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_supply == 0 || self.initial_supply > self.max_supply {
            return Err(ConfigError::InvalidSupplyConfig {
                max_supply: self.max_supply,
                initial_supply: self.initial_supply,
            });
        }
        if self.treasury_share_bps > BPS_DENOMINATOR {
            return Err(ConfigError::InvalidTreasuryShare(self.treasury_share_bps));
        }
        for phase in &self.phases {
            if phase.end_block != 0 && phase.end_block <= phase.start_block {
                return Err(ConfigError::InvalidPhaseConfig {
                    label: phase.label.clone(),
                    reason: "end_block not past start_block",
                });
            }
            // `!(x >= 0)` also rejects NaN rates
            if !(phase.tokens_per_block >= 0.0) {
                return Err(ConfigError::InvalidPhaseConfig {
                    label: phase.label.clone(),
                    reason: "negative tokens_per_block",
                });
            }
        }
        if self.blocks_per_year == 0 {
            return Err(ConfigError::InvalidSamplingConfig("blocks_per_year is zero"));
        }
        if self.simulation_years == 0 {
            return Err(ConfigError::InvalidSamplingConfig("simulation_years is zero"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ConfigOverride
// ---------------------------------------------------------------------------

/// Structured diff applied atop a fresh default configuration.
///
/// Scenario definitions set only the fields they change; everything else
/// keeps its default. Applying an override never mutates the base.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigOverride {
    pub max_supply: Option<u64>,
    pub initial_supply: Option<u64>,
    pub phases: Option<Vec<EmissionPhase>>,
    pub treasury_share_bps: Option<u32>,
    pub difficulty_enabled: Option<bool>,
    pub blocks_per_year: Option<u64>,
    pub simulation_years: Option<u32>,
}

impl ConfigOverride {
    /// Produce a derived configuration with the set fields replaced.
    pub fn apply(&self, base: &SimulationConfig) -> SimulationConfig {
        let mut config = base.clone();
        if let Some(v) = self.max_supply {
            config.max_supply = v;
        }
        if let Some(v) = self.initial_supply {
            config.initial_supply = v;
        }
        if let Some(v) = &self.phases {
            config.phases = v.clone();
        }
        if let Some(v) = self.treasury_share_bps {
            config.treasury_share_bps = v;
        }
        if let Some(v) = self.difficulty_enabled {
            config.difficulty_enabled = v;
        }
        if let Some(v) = self.blocks_per_year {
            config.blocks_per_year = v;
        }
        if let Some(v) = self.simulation_years {
            config.simulation_years = v;
        }
        config
    }
}

// ---------------------------------------------------------------------------
// SimulationRecord
// ---------------------------------------------------------------------------

/// One sampled observation of simulation state at a block height.
///
/// A run produces an ordered sequence of these, one per sample point,
/// ordered by increasing block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub block: u64,
    /// `block / blocks_per_year`.
    pub year: f64,
    /// Nominal per-block rate from the phase schedule.
    pub emission_rate: f64,
    /// Supply-ratio scaling applied this interval, in [0, 1].
    pub difficulty_factor: f64,
    /// `emission_rate * difficulty_factor`.
    pub effective_emission_rate: f64,
    pub total_supply: f64,
    /// `total_supply / max_supply * 100`.
    pub supply_percent: f64,
    pub treasury_balance: f64,
    pub staker_rewards_total: f64,
    /// Annualized staking yield estimate, percent.
    pub staking_apy: f64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
