//! Requests for the superseded interface versions. `show_available_levels` and
//! `claim_achievement_level_reward` did not change and are shared with the current
//! interface.

use crate::Request;
use rakeoff_achievements_api::{
    legacy::{v1, v2, NeuronCheckArgs},
    CanisterResult,
};

/// `check_achievement_level_reward` of the first interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckNeuronRequestV1 {
    pub args: NeuronCheckArgs,
}

impl Request for CheckNeuronRequestV1 {
    fn method(&self) -> &'static str {
        "check_achievement_level_reward"
    }

    fn update(&self) -> bool {
        false
    }

    fn payload(&self) -> Result<Vec<u8>, candid::Error> {
        candid::encode_one(&self.args)
    }

    type Response = CanisterResult<v1::NeuronAchievementDetails>;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GetCanisterAccountRequest;

impl Request for GetCanisterAccountRequest {
    fn method(&self) -> &'static str {
        "get_canister_account"
    }

    fn update(&self) -> bool {
        true
    }

    fn payload(&self) -> Result<Vec<u8>, candid::Error> {
        candid::encode_args(())
    }

    type Response = CanisterResult<v1::CanisterAccount>;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GetCanisterStatsRequest;

impl Request for GetCanisterStatsRequest {
    fn method(&self) -> &'static str {
        "get_canister_stats"
    }

    fn update(&self) -> bool {
        true
    }

    fn payload(&self) -> Result<Vec<u8>, candid::Error> {
        candid::encode_args(())
    }

    type Response = CanisterResult<v1::CanisterStats>;
}

/// `check_achievement_level_reward` of the transitional interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckNeuronRequestV2 {
    pub args: NeuronCheckArgs,
}

impl Request for CheckNeuronRequestV2 {
    fn method(&self) -> &'static str {
        "check_achievement_level_reward"
    }

    fn update(&self) -> bool {
        false
    }

    fn payload(&self) -> Result<Vec<u8>, candid::Error> {
        candid::encode_one(&self.args)
    }

    type Response = CanisterResult<v2::NeuronAchievementDetails>;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GetCanisterAccountAndStatsRequestV2;

impl Request for GetCanisterAccountAndStatsRequestV2 {
    fn method(&self) -> &'static str {
        "get_canister_account_and_stats"
    }

    fn update(&self) -> bool {
        true
    }

    fn payload(&self) -> Result<Vec<u8>, candid::Error> {
        candid::encode_args(())
    }

    type Response = CanisterResult<v2::CanisterAccount>;
}
