// Copyright 2026 Citizen Ledger Contributors. All rights reserved.
// Citizen Ledger Tokenomics Simulation Suite

//! Discrete-time simulation of CITIZEN token economics: multi-phase emission
//! schedules, supply-ratio difficulty scaling, treasury/staker reward
//! splitting, and the resulting staking yield over a multi-year horizon.
//!
//! The core is a pure function of its configuration and sampling parameters.
//! It performs no I/O and the same input always produces the same record
//! sequence; presentation (tables, JSON reports, time series files) lives in
//! the `simulate` binary.

pub mod distribution;
pub mod emission;
pub mod report;
pub mod scenario;
pub mod simulation;
pub mod types;

pub use report::{SimulationReport, SimulationSummary};
pub use scenario::{builtin_scenarios, compare, ScenarioResults};
pub use simulation::{SimulationRunner, SimulationState, DEFAULT_STAKING_RATE};
pub use types::*;
