//! Client for the `RakeoffAchievements` canister.
//!
//! Every canister method is described by a [`Request`] that knows its method name,
//! whether it is an update or a query call, and how to encode its argument. The
//! [`RakeoffAchievementsClient`] sends requests through a [`Runtime`] and keeps the
//! three ways a call can go wrong apart:
//! * the call never produced a reply: `Err(CallError::Runtime(_))`,
//! * the reply is not exactly of the compiled type: `Err(CallError::CandidDecode(_))`,
//! * the canister answered with its own error: `Ok(Err(message))`.
//!
//! Nothing is retried. In particular a `claim_achievement_level_reward` that timed
//! out may still have been executed by the canister.

use candid::{CandidType, Principal};
use futures::future::join_all;
use rakeoff_achievements_api::{
    AchievementLevel, CanisterAccount, NeuronAchievementDetails, NeuronId,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(feature = "agent")]
pub use agent::{make_agent, AgentConfig, AgentRuntime, MakeAgentError, RootKey};
pub use rakeoff_achievements_api as api;
pub use runtime::{IcError, Runtime};
pub use stub::{StubCall, StubRuntime};

#[cfg(feature = "agent")]
mod agent;
mod reply;
pub mod requests;
mod runtime;
mod stub;


/// A call to one method of the canister.
pub trait Request: Send {
    fn method(&self) -> &'static str;
    fn update(&self) -> bool;
    fn payload(&self) -> Result<Vec<u8>, candid::Error>;

    type Response: CandidType + DeserializeOwned + Send;
}

#[derive(Debug, Error)]
pub enum CallError {
    #[error("canister request could not be encoded: {0}")]
    CandidEncode(candid::Error),
    #[error("canister did not respond with the expected response type: {0}")]
    CandidDecode(candid::Error),
    #[error(transparent)]
    Runtime(#[from] IcError),
}

#[derive(Clone, Debug)]
pub struct RakeoffAchievementsClient<R> {
    runtime: R,
    canister_id: Principal,
}

impl<R: Runtime> RakeoffAchievementsClient<R> {
    pub fn new(runtime: R, canister_id: Principal) -> Self {
        Self {
            runtime,
            canister_id,
        }
    }

    pub fn canister_id(&self) -> Principal {
        self.canister_id
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Sends `request` as a query or update call, as the request dictates, and
    /// decodes the reply. A reply that is not exactly a `Q::Response` is rejected
    /// rather than coerced.
    pub async fn call<Q: Request>(&self, request: Q) -> Result<Q::Response, CallError> {
        let method = request.method();
        let update = request.update();
        let arg = request.payload().map_err(CallError::CandidEncode)?;

        debug!(canister_id = %self.canister_id, method, update, "Calling canister");
        let reply = if update {
            self.runtime.update_call(self.canister_id, method, arg).await
        } else {
            self.runtime.query_call(self.canister_id, method, arg).await
        }
        .map_err(|err| {
            warn!(canister_id = %self.canister_id, method, %err, "Canister call failed");
            CallError::Runtime(err)
        })?;

        reply::check_exact_type::<Q::Response>(&reply)
            .and_then(|()| candid::decode_one(&reply))
            .map_err(|err| {
                warn!(canister_id = %self.canister_id, method, %err, "Unexpected reply");
                CallError::CandidDecode(err)
            })
    }

    pub async fn show_available_levels(&self) -> Result<Vec<AchievementLevel>, CallError> {
        self.call(requests::ShowAvailableLevelsRequest).await
    }

    pub async fn check_achievement_level_reward(
        &self,
        neuron_id: NeuronId,
    ) -> Result<Result<NeuronAchievementDetails, String>, CallError> {
        let request = requests::CheckAchievementLevelRewardRequest { neuron_id };
        self.call(request).await.map(Into::into)
    }

    /// Checks several neurons concurrently. Results are returned in the order of
    /// `neuron_ids`, whatever order the canister executes the calls in.
    pub async fn check_achievement_level_rewards(
        &self,
        neuron_ids: &[NeuronId],
    ) -> Vec<(
        NeuronId,
        Result<Result<NeuronAchievementDetails, String>, CallError>,
    )> {
        let checks = neuron_ids.iter().map(|&neuron_id| async move {
            (
                neuron_id,
                self.check_achievement_level_reward(neuron_id).await,
            )
        });
        join_all(checks).await
    }

    pub async fn claim_achievement_level_reward(
        &self,
        neuron_id: NeuronId,
    ) -> Result<Result<String, String>, CallError> {
        let request = requests::ClaimAchievementLevelRewardRequest { neuron_id };
        self.call(request).await.map(Into::into)
    }

    pub async fn get_canister_account_and_stats(
        &self,
    ) -> Result<Result<CanisterAccount, String>, CallError> {
        self.call(requests::GetCanisterAccountAndStatsRequest)
            .await
            .map(Into::into)
    }
}
