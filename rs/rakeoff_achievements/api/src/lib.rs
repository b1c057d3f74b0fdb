//! Candid types of the `RakeoffAchievements` canister.
//!
//! The types at the crate root describe the interface currently deployed. Earlier
//! interface versions are kept in [`legacy`] so that a caller talking to an older
//! deployment can still decode its replies.

use candid::{CandidType, Deserialize, Nat, Principal};
use serde::Serialize;

pub mod legacy;
mod units;

pub use units::{format_e8s, E8S_PER_ICP};


/// The Candid interface of the deployed canister.
pub const CANDID_INTERFACE: &str = include_str!("../rakeoff_achievements.did");

/// Identifier of an NNS neuron.
pub type NeuronId = u64;

/// One reward tier.
#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AchievementLevel {
    pub level_id: Nat,
    pub icp_amount_needed: u64,
    pub icp_reward: u64,
}

/// Reward eligibility of a single neuron, as evaluated by the canister.
#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NeuronAchievementDetails {
    pub neuron_passes_checks: bool,
    pub current_level: AchievementLevel,
    /// The level the neuron was last rewarded for, if any.
    pub cached_level: Option<AchievementLevel>,
    pub canister_rewards_available: bool,
    pub reward_amount_due: u64,
    pub neuron_id: NeuronId,
}

/// Ledger account of the canister together with its payout counters.
#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CanisterAccount {
    pub icp_address: String,
    pub icp_balance: u64,
    pub icp_claimed: u64,
    pub ongoing_transfers: Vec<(Principal, u64)>,
}

/// The result variant of a Motoko canister, `variant { ok : T; err : text }`.
///
/// Candid's own encoding of [`Result`] uses the labels `Ok` and `Err`, which do not
/// match what the canister sends, hence this type. Convert it with `.into()`.
#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CanisterResult<T> {
    #[serde(rename = "ok")]
    Ok(T),
    #[serde(rename = "err")]
    Err(String),
}

impl<T> CanisterResult<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn into_result(self) -> Result<T, String> {
        self.into()
    }
}

impl<T> From<CanisterResult<T>> for Result<T, String> {
    fn from(result: CanisterResult<T>) -> Self {
        match result {
            CanisterResult::Ok(value) => Ok(value),
            CanisterResult::Err(message) => Err(message),
        }
    }
}

impl<T> From<Result<T, String>> for CanisterResult<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(message) => Self::Err(message),
        }
    }
}
