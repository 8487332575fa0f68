use std::future::Future;

use futures_util::future::{FutureExt, LocalBoxFuture, Shared};

use crate::error::ReplayError;


// Error is a human-readable reason, e.g. "WebAssembly is not supported".
pub type InitOutcome = Result<(), String>;

// One-shot initialization shared by everybody who needs the decoding service.
//
// The initialization future is started by the first waiter and never re-run: all later waiters,
// including those that come after it finished, observe the same outcome.
#[derive(Clone)]
pub struct InitGate {
    outcome: Shared<LocalBoxFuture<'static, InitOutcome>>,
}

impl InitGate {
    pub fn new(init: impl Future<Output = InitOutcome> + 'static) -> Self {
        InitGate { outcome: init.boxed_local().shared() }
    }

    pub async fn wait(&self) -> Result<(), ReplayError> {
        self.outcome.clone().await.map_err(ReplayError::ServiceUnavailable)
    }
}
