//! The first interface: neuron attributes are passed in by the caller, and account
//! and statistics are read through two separate methods.

use crate::{AchievementLevel, NeuronId};
use candid::{CandidType, Deserialize, Nat, Principal};
use serde::Serialize;

pub const CANDID_INTERFACE: &str = include_str!("../../legacy/rakeoff_achievements_v1.did");

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NeuronCheckResults {
    pub is_staking: bool,
    pub is_locked_for_6_months: bool,
    pub two_weeks_old: bool,
    pub new_achievement_reward_due: bool,
}

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NeuronAchievementDetails {
    pub neuron_passes_checks: bool,
    pub current_level: AchievementLevel,
    pub cached_level: Option<AchievementLevel>,
    pub neuron_checks: NeuronCheckResults,
    pub reward_amount_due: u64,
    pub neuron_id: NeuronId,
}

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CanisterAccount {
    pub icp_address: String,
    pub icp_balance: u64,
}

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CanisterStats {
    pub ongoing_transfers: Vec<(Principal, u64)>,
    pub icp_claimed: u64,
    pub total_neurons_added: Nat,
}
