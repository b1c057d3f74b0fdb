use async_trait::async_trait;
use candid::Principal;
use ic_error_types::RejectCode;
use thiserror::Error;

/// Abstracts how calls reach the canister so that the same client code runs:
/// * against the Internet Computer through [`ic_agent`] (see `AgentRuntime`),
/// * in unit tests through a [`StubRuntime`](crate::StubRuntime).
///
/// Arguments and replies are Candid-encoded bytes. Encoding and decoding happen in
/// the client, so every runtime reports schema mismatches the same way.
#[async_trait]
pub trait Runtime: Send + Sync {
    /// Sends a query call. The reply may come from a single replica without consensus.
    async fn query_call(
        &self,
        canister_id: Principal,
        method: &str,
        arg: Vec<u8>,
    ) -> Result<Vec<u8>, IcError>;

    /// Sends an update call and waits until the subnet has agreed on its reply.
    async fn update_call(
        &self,
        canister_id: Principal,
        method: &str,
        arg: Vec<u8>,
    ) -> Result<Vec<u8>, IcError>;
}

/// Failure to obtain a reply from the canister.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum IcError {
    /// The call was rejected by the system or by the canister (e.g. a trap).
    #[error("Canister call rejected: {code:?} - {message}")]
    CallRejected {
        /// Rejection code as specified [here](https://internetcomputer.org/docs/current/references/ic-interface-spec#reject-codes)
        code: RejectCode,
        message: String,
    },

    /// The request never produced a reply: network failure, timeout, invalid
    /// certificate and similar.
    #[error("Transport failure: {message}")]
    Transport { message: String },
}
