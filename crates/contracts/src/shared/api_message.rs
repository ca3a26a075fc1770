use serde::{Deserialize, Serialize};

/// Envelope returned by the backend for every create/update/delete call.
///
/// `status` is true when the mutation was applied, false when the backend
/// rejected it (validation, missing row, and so on). Transport failures are
/// folded into the same shape on the client so the UI has exactly one
/// result-message path.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MutationOutcome {
    pub message: String,
    pub status: bool,
}

impl MutationOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: false,
        }
    }
}
