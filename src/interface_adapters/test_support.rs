use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;

use crate::domain::{ProviderError, ProviderPayload, TimingProvider};

// Canned provider for router contract tests. `None` simulates a failed call.
pub(crate) struct FixedProvider {
    events: Option<ProviderPayload>,
    locations: Option<ProviderPayload>,
    calls: Arc<AtomicUsize>,
}

impl FixedProvider {
    pub(crate) fn new(events: Option<ProviderPayload>, locations: Option<ProviderPayload>) -> Self {
        Self {
            events,
            locations,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn failing() -> Self {
        Self::new(None, None)
    }

    // Shared counter so tests can assert on calls after the provider moved into state.
    pub(crate) fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    fn answer(&self, payload: &Option<ProviderPayload>) -> Result<ProviderPayload, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        payload
            .clone()
            .ok_or(ProviderError::Upstream { status: 503 })
    }
}

#[async_trait]
impl TimingProvider for FixedProvider {
    async fn list_events(&self) -> Result<ProviderPayload, ProviderError> {
        self.answer(&self.events)
    }

    async fn list_practice_locations(&self) -> Result<ProviderPayload, ProviderError> {
        self.answer(&self.locations)
    }
}

// Serve a fake upstream on an ephemeral port and return its base URL.
pub(crate) async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral upstream port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}
