// Copyright 2026 Citizen Ledger Contributors. All rights reserved.
// Citizen Ledger Tokenomics Simulation - Reward Distribution

//! Treasury/staker splitting of minted emissions and the staking yield
//! estimate derived from the current effective emission rate.
//!
//! No value creation occurs here: every emission batch is partitioned, and
//! the two parts always sum back exactly to the input.

// ---------------------------------------------------------------------------
// Treasury split
// ---------------------------------------------------------------------------

/// Split an emission amount into `(treasury_part, staker_part)`.
///
/// The staker part is computed by subtraction, not by multiplying
/// `1 - treasury_share`, so `treasury_part + staker_part == emission_amount`
/// holds exactly and no drift accumulates across many additions.
pub fn split_emission(emission_amount: f64, treasury_share: f64) -> (f64, f64) {
    let treasury_part = emission_amount * treasury_share;
    let staker_part = emission_amount - treasury_part;
    (treasury_part, staker_part)
}

// ---------------------------------------------------------------------------
// Staking yield
// ---------------------------------------------------------------------------

/// Annualized staking yield estimate, in percent.
///
/// This is a simplifying approximation, not a forecast: it assumes the
/// current effective emission rate and the given staked amount hold constant
/// over the coming year rather than simulating forward. Returns 0 when
/// nothing is staked (defined fallback, never a division by zero).
pub fn estimate_apy(
    emission_rate: f64,
    difficulty_factor: f64,
    treasury_share: f64,
    blocks_per_year: u64,
    staked_amount: f64,
) -> f64 {
    if staked_amount <= 0.0 {
        return 0.0;
    }
    let annual_staker_rewards =
        emission_rate * blocks_per_year as f64 * (1.0 - treasury_share) * difficulty_factor;
    annual_staker_rewards / staked_amount * 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
