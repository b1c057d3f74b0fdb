use crate::Request;
use rakeoff_achievements_api::{
    AchievementLevel, CanisterAccount, CanisterResult, NeuronAchievementDetails, NeuronId,
};

pub mod legacy;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShowAvailableLevelsRequest;

impl Request for ShowAvailableLevelsRequest {
    fn method(&self) -> &'static str {
        "show_available_levels"
    }

    fn update(&self) -> bool {
        false
    }

    fn payload(&self) -> Result<Vec<u8>, candid::Error> {
        candid::encode_args(())
    }

    type Response = Vec<AchievementLevel>;
}

/// Evaluates a neuron against the reward tiers. The deployed interface declares
/// this method without the `query` annotation, so it goes through consensus even
/// though it does not change any state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CheckAchievementLevelRewardRequest {
    pub neuron_id: NeuronId,
}

impl Request for CheckAchievementLevelRewardRequest {
    fn method(&self) -> &'static str {
        "check_achievement_level_reward"
    }

    fn update(&self) -> bool {
        true
    }

    fn payload(&self) -> Result<Vec<u8>, candid::Error> {
        candid::encode_one(self.neuron_id)
    }

    type Response = CanisterResult<NeuronAchievementDetails>;
}

/// Pays out the reward the neuron is due. On success the canister answers with a
/// confirmation text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClaimAchievementLevelRewardRequest {
    pub neuron_id: NeuronId,
}

impl Request for ClaimAchievementLevelRewardRequest {
    fn method(&self) -> &'static str {
        "claim_achievement_level_reward"
    }

    fn update(&self) -> bool {
        true
    }

    fn payload(&self) -> Result<Vec<u8>, candid::Error> {
        candid::encode_one(self.neuron_id)
    }

    type Response = CanisterResult<String>;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GetCanisterAccountAndStatsRequest;

impl Request for GetCanisterAccountAndStatsRequest {
    fn method(&self) -> &'static str {
        "get_canister_account_and_stats"
    }

    fn update(&self) -> bool {
        true
    }

    fn payload(&self) -> Result<Vec<u8>, candid::Error> {
        candid::encode_args(())
    }

    type Response = CanisterResult<CanisterAccount>;
}
