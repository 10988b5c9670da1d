//! Log-backed submission sink

use super::traits::SupportSink;
use crate::state::SupportRequest;
use async_trait::async_trait;

/// Emits each submission as a structured log event. Stands in for a
/// ticketing backend; nothing downstream consumes the entries.
#[derive(Debug, Default)]
pub struct LogSink;

#[async_trait]
impl SupportSink for LogSink {
    async fn submit(&self, request: &SupportRequest) {
        tracing::info!(
            name = %request.name,
            email = %request.email,
            problem = %request.problem,
            "support request submitted"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_accepts_any_request() {
        let sink = LogSink;
        sink.submit(&SupportRequest {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            problem: "help".to_string(),
        })
        .await;

        // Empty snapshots are valid submissions too
        sink.submit(&SupportRequest {
            name: String::new(),
            email: String::new(),
            problem: String::new(),
        })
        .await;
    }
}
