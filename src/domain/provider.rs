use async_trait::async_trait;
use std::fmt;

// Provider records are forwarded verbatim, so the domain keeps them as raw JSON.
pub type ProviderPayload = serde_json::Value;

// Failure reported by a timing provider. Handlers collapse every variant into one
// upstream error, the detail only ends up in logs.
#[derive(Debug)]
pub enum ProviderError {
    // The request never produced a response (DNS, connect, TLS, timeout).
    Transport(String),
    // The provider answered with a non-success status.
    Upstream { status: u16 },
    // The provider answered 2xx but the body was not JSON.
    Decode(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Transport(detail) => write!(f, "provider transport error: {detail}"),
            ProviderError::Upstream { status } => write!(f, "provider upstream error {status}"),
            ProviderError::Decode(detail) => write!(f, "provider response decode error: {detail}"),
        }
    }
}

impl std::error::Error for ProviderError {}

// Handlers depend on this trait, not on a concrete client.
// Live and stub implementations are picked once at startup.
#[async_trait]
pub trait TimingProvider: Send + Sync {
    async fn list_events(&self) -> Result<ProviderPayload, ProviderError>;

    async fn list_practice_locations(&self) -> Result<ProviderPayload, ProviderError>;
}
