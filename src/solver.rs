//! Background question requests.
//!
//! The event loop never awaits the remote call directly. A submitted
//! question is handed to [`spawn_request`], which runs the call on its own
//! task and reports exactly one [`Outcome`] back over a channel.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::error::Result;

/// Anything that can turn a question into an answer
#[async_trait]
pub trait Solver: Send + Sync {
    async fn solve(&self, question: &str) -> Result<String>;
}

/// Why a request produced no answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// The solver returned an error; the message is kept verbatim
    Service(String),
    /// The request task died without producing a result
    Unknown,
}

pub type Outcome = std::result::Result<String, RequestFailure>;

/// Run one request in the background and send its outcome to `tx`
pub fn spawn_request(
    solver: Arc<dyn Solver>,
    question: String,
    tx: UnboundedSender<Outcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let call = tokio::spawn(async move { solver.solve(&question).await });

        let outcome = match call.await {
            Ok(Ok(answer)) => Ok(answer),
            Ok(Err(e)) => Err(RequestFailure::Service(e.to_string())),
            Err(e) => {
                tracing::error!("Question request task failed: {}", e);
                Err(RequestFailure::Unknown)
            }
        };

        if tx.send(outcome).is_err() {
            tracing::debug!("Dropping request outcome, receiver is gone");
        }
    })
}
