use crate::{IcError, Runtime};
use async_trait::async_trait;
use candid::Principal;
use ic_error_types::RejectCode;
use ic_agent::{Agent, AgentError, Identity};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// [`Runtime`] making calls from outside the Internet Computer through an [`Agent`].
///
/// Calls are signed with the agent's identity.
#[derive(Clone)]
pub struct AgentRuntime {
    agent: Agent,
}

impl AgentRuntime {
    pub fn new(agent: Agent) -> Self {
        Self { agent }
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }
}

/// Rejects become [`IcError::CallRejected`], anything else failed before the
/// canister answered and becomes [`IcError::Transport`].
impl From<AgentError> for IcError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::CertifiedReject { reject, .. }
            | AgentError::UncertifiedReject { reject, .. } => {
                let raw_code = reject.reject_code as u64;
                match RejectCode::try_from(raw_code) {
                    Ok(code) => IcError::CallRejected {
                        code,
                        message: reject.reject_message,
                    },
                    Err(_) => IcError::Transport {
                        message: format!(
                            "unknown reject code {raw_code}: {}",
                            reject.reject_message
                        ),
                    },
                }
            }
            err => IcError::Transport {
                message: err.to_string(),
            },
        }
    }
}

#[async_trait]
impl Runtime for AgentRuntime {
    async fn query_call(
        &self,
        canister_id: Principal,
        method: &str,
        arg: Vec<u8>,
    ) -> Result<Vec<u8>, IcError> {
        self.agent
            .query(&canister_id, method)
            .with_arg(arg)
            .call()
            .await
            .map_err(IcError::from)
    }

    async fn update_call(
        &self,
        canister_id: Principal,
        method: &str,
        arg: Vec<u8>,
    ) -> Result<Vec<u8>, IcError> {
        self.agent
            .update(&canister_id, method)
            .with_arg(arg)
            .call_and_wait()
            .await
            .map_err(IcError::from)
    }
}

/// Where the agent gets the root key used to verify certificates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RootKey {
    /// The mainnet root key built into [`ic_agent`].
    #[default]
    Embedded,
    /// Ask the replica for its key. Only safe against a local replica.
    Fetch,
    Provided(Vec<u8>),
}

pub struct AgentConfig {
    pub url: Url,
    pub identity: Box<dyn Identity>,
    pub timeout: Option<Duration>,
    pub root_key: RootKey,
}

#[derive(Debug, Error)]
pub enum MakeAgentError {
    #[error("failed to build the HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error(transparent)]
    Agent(#[from] AgentError),
}

pub async fn make_agent(config: AgentConfig) -> Result<Agent, MakeAgentError> {
    let AgentConfig {
        url,
        identity,
        timeout,
        root_key,
    } = config;

    let http_client = match timeout {
        Some(timeout) => reqwest::Client::builder()
            .timeout(timeout)
            .build()?,
        None => reqwest::Client::new(),
    };

    debug!(%url, "Building agent");
    let agent = Agent::builder()
        .with_url(url)
        .with_boxed_identity(identity)
        .with_http_client(http_client)
        .build()?;

    match root_key {
        RootKey::Embedded => {}
        RootKey::Provided(root_key) => agent.set_root_key(root_key),
        RootKey::Fetch => {
            warn!("Fetching the root key from the replica, certificates are not verified against the mainnet key");
            agent.fetch_root_key().await?;
        }
    };

    Ok(agent)
}
