mod provider;

// Re-export the domain boundary types and ports.
pub use provider::{ProviderError, ProviderPayload, TimingProvider};
