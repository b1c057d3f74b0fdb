//! The transitional interface: still takes neuron attributes, but reads account and
//! statistics in one call.

use crate::{AchievementLevel, NeuronId};
use candid::{CandidType, Deserialize, Nat, Principal};
use serde::Serialize;

pub const CANDID_INTERFACE: &str = include_str!("../../legacy/rakeoff_achievements_v2.did");

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NeuronAchievementDetails {
    pub neuron_passes_checks: bool,
    pub current_level: AchievementLevel,
    pub cached_level: Option<AchievementLevel>,
    pub reward_amount_due: u64,
    pub neuron_id: NeuronId,
}

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CanisterAccount {
    pub icp_address: String,
    pub icp_balance: u64,
    pub icp_claimed: u64,
    pub ongoing_transfers: Vec<(Principal, u64)>,
    pub total_neurons_added: Nat,
}
