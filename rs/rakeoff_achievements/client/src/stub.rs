use crate::{IcError, Runtime};
use async_trait::async_trait;
use candid::{CandidType, Principal};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// [`Runtime`] replying with scripted responses, in the order they were added.
///
/// Clones share the same responses and the same call log, so a clone can be handed
/// to the code under test while the original is used for assertions.
///
/// # Panics
///
/// A call panics when no response is left.
#[derive(Clone, Debug, Default)]
pub struct StubRuntime {
    responses: Arc<Mutex<VecDeque<Result<Vec<u8>, IcError>>>>,
    calls: Arc<Mutex<Vec<StubCall>>>,
}

/// A call received by a [`StubRuntime`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StubCall {
    pub canister_id: Principal,
    pub method: String,
    pub arg: Vec<u8>,
    pub update: bool,
}

impl StubRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply, Candid-encoded as a single value.
    pub fn add_stub_response<T: CandidType>(self, response: T) -> Self {
        let bytes = candid::encode_one(response).expect("Failed to encode Candid stub response");
        self.add_raw_response(bytes)
    }

    /// Queues a reply that is passed on without encoding, e.g. to simulate a
    /// canister speaking another interface version.
    pub fn add_raw_response(self, bytes: Vec<u8>) -> Self {
        self.push(Ok(bytes));
        self
    }

    pub fn add_stub_error(self, error: IcError) -> Self {
        self.push(Err(error));
        self
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<StubCall> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, response: Result<Vec<u8>, IcError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn next_response(&self, call: StubCall) -> Result<Vec<u8>, IcError> {
        self.calls.lock().unwrap().push(call);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("No available call response")
    }
}

#[async_trait]
impl Runtime for StubRuntime {
    async fn query_call(
        &self,
        canister_id: Principal,
        method: &str,
        arg: Vec<u8>,
    ) -> Result<Vec<u8>, IcError> {
        self.next_response(StubCall {
            canister_id,
            method: method.to_string(),
            arg,
            update: false,
        })
    }

    async fn update_call(
        &self,
        canister_id: Principal,
        method: &str,
        arg: Vec<u8>,
    ) -> Result<Vec<u8>, IcError> {
        self.next_response(StubCall {
            canister_id,
            method: method.to_string(),
            arg,
            update: true,
        })
    }
}
