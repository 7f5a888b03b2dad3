//! Network messages - communication between App and Network layers

use crate::models::{Action, Outcome, Request};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Run one exchange on its own task
    Execute {
        id: u64,
        action: Action,
        request: Request,
    },

    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// An exchange resolved, successfully or not
    Completed {
        id: u64,
        action: Action,
        request: Request,
        outcome: Outcome,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Completed { id, .. } => *id,
        }
    }
}
