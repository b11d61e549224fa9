// Copyright 2026 Citizen Ledger Contributors. All rights reserved.
// Citizen Ledger Tokenomics Simulation - Emission Schedule & Supply Cap

//! Per-block emission resolution, supply-ratio difficulty scaling, and hard
//! cap enforcement. All functions here are pure and total: uncovered blocks
//! emit zero, factors clamp into [0, 1], and the cap clamp never fails.

use crate::types::EmissionPhase;

// ---------------------------------------------------------------------------
// Schedule resolution
// ---------------------------------------------------------------------------

/// Nominal per-block emission rate at `block`.
///
/// Phases are scanned in list order and the first match wins; if phase
/// ranges overlap, the earlier-listed phase takes precedence. Any block
/// covered by no phase emits 0 (emission has ended or not yet begun).
pub fn rate_at(phases: &[EmissionPhase], block: u64) -> f64 {
    for phase in phases {
        if phase.contains(block) {
            return phase.tokens_per_block;
        }
    }
    0.0
}

// ---------------------------------------------------------------------------
// Difficulty scaling
// ---------------------------------------------------------------------------

/// Supply-ratio difficulty factor in [0, 1].
///
/// Emission throttles smoothly as circulating supply approaches the cap
/// instead of cutting off abruptly: the factor is the remaining fraction of
/// mintable headroom. Supply may transiently be reported at or above the cap
/// from float accumulation, so the ratio clamps at zero.
pub fn difficulty_factor(total_supply: f64, max_supply: f64, enabled: bool) -> f64 {
    if !enabled || max_supply <= 0.0 {
        return 1.0;
    }
    ((max_supply - total_supply) / max_supply).max(0.0)
}

// ---------------------------------------------------------------------------
// Cap enforcement
// ---------------------------------------------------------------------------

/// Clamp a proposed emission to the remaining mintable capacity.
///
/// Postcondition for a caller that immediately adds the result to
/// `total_supply`: the sum never exceeds `max_supply`. Callers must not pass
/// negative proposed emission; upstream rates are nonnegative.
pub fn clamp_to_cap(proposed_emission: f64, total_supply: f64, max_supply: f64) -> f64 {
    proposed_emission.min((max_supply - total_supply).max(0.0))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
