//! Network actor - runs HTTP exchanges in the Tokio async runtime

use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute};

/// Network actor that processes exchange commands.
///
/// Every command gets its own task. Nothing orders or cancels them, so
/// responses go back in completion order.
pub struct NetworkActor {
    client: reqwest::Client,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        Self::with_client(create_client(), response_tx)
    }

    pub fn with_client(
        client: reqwest::Client,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Execute { id, action, request }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(
                                    id,
                                    action = action.label(),
                                    method = request.method().as_str(),
                                    url = %request.url(),
                                    "Executing request"
                                );
                                let start = Instant::now();
                                let outcome = execute(&client, &request).await;
                                let time_ms = start.elapsed().as_millis() as u64;
                                tracing::info!(
                                    id,
                                    time_ms,
                                    success = outcome.is_success(),
                                    category = outcome.category().map(|c| c.as_str()),
                                    "Request completed"
                                );
                                let _ = response_tx.send(NetworkResponse::Completed {
                                    id,
                                    action,
                                    request,
                                    outcome,
                                    time_ms,
                                });
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            // In-flight exchanges are dropped with the JoinSet
                            break;
                        }
                    }
                }

                // Reap finished tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
