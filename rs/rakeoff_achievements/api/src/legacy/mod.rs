//! Superseded versions of the canister interface.
//!
//! The canister carries no version marker, so nothing here is selected
//! automatically. Talking to a deployment with the wrong types fails with a Candid
//! decoding error instead of coercing values.

use candid::{CandidType, Deserialize};
use serde::Serialize;

pub mod v1;
pub mod v2;

/// Attributes of a neuron sent to `check_achievement_level_reward` by the v1 and v2
/// interfaces.
#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NeuronCheckArgs {
    pub dissolve_delay_seconds: u64,
    /// Neuron state as reported by NNS governance (1 = locked, 2 = dissolving,
    /// 3 = dissolved, 4 = spawning).
    pub state: i32,
    pub stake_e8s: u64,
    #[serde(rename = "neuronId")]
    pub neuron_id: u64,
    pub age_seconds: u64,
}
