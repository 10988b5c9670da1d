//! Trait abstraction for the submission sink to enable mocking in tests

use crate::state::SupportRequest;
use async_trait::async_trait;

/// Destination for submitted support requests.
///
/// Delivery is fire-and-forget: the form never observes an outcome, so
/// implementations must not fail from the caller's point of view.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SupportSink: Send + Sync {
    /// Deliver one submitted request
    async fn submit(&self, request: &SupportRequest);
}
