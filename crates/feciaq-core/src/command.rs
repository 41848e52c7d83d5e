//! Requests that change the registry.

use uuid::Uuid;

/// A write request against the registry, such as submitting a work.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted name logged with the command, e.g. `works.submit_work`.
    fn command_type(&self) -> &'static str;

    /// Id carried through the handler and repository logs for one request.
    fn correlation_id(&self) -> Uuid;
}
