use crate::domain::{ProviderError, ProviderPayload, TimingProvider};
use async_trait::async_trait;

// Provider used while the live Speedhive dependency is switched off.
// Every listing is an empty array and nothing leaves the process.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyProvider;

#[async_trait]
impl TimingProvider for EmptyProvider {
    async fn list_events(&self) -> Result<ProviderPayload, ProviderError> {
        Ok(ProviderPayload::Array(Vec::new()))
    }

    async fn list_practice_locations(&self) -> Result<ProviderPayload, ProviderError> {
        Ok(ProviderPayload::Array(Vec::new()))
    }
}
