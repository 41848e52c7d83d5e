//! Commands for the works context.

use feciaq_core::command::Command;
use uuid::Uuid;

use super::submission::WorkSubmission;

/// Command to submit a new work for registration.
#[derive(Debug, Clone)]
pub struct SubmitWork {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The submission as received at the boundary.
    pub submission: WorkSubmission,
}

impl Command for SubmitWork {
    fn command_type(&self) -> &'static str {
        "works.submit_work"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
