use crate::domain::{ProviderError, ProviderPayload, TimingProvider};
use async_trait::async_trait;
use reqwest::{Client, header};

pub const DEFAULT_EVENT_RESULTS_URL: &str =
    "https://eventresults-api.speedhive.com/api/v0.2.3/eventresults";
pub const DEFAULT_PRACTICE_URL: &str = "https://practice-api.speedhive.com/api/v1";

// Thin wrapper around reqwest for the two Speedhive APIs.
#[derive(Clone)]
pub struct SpeedhiveClient {
    http: Client,
    pub event_results_url: String,
    pub practice_url: String,
}

impl SpeedhiveClient {
    pub fn new(
        event_results_url: impl Into<String>,
        practice_url: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            event_results_url: trim_base(event_results_url.into()),
            practice_url: trim_base(practice_url.into()),
        })
    }

    async fn get_json(&self, url: String) -> Result<ProviderPayload, ProviderError> {
        let res = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;
        let status = res.status();

        if !status.is_success() {
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
            });
        }

        res.json::<ProviderPayload>()
            .await
            .map_err(|err| ProviderError::Decode(err.to_string()))
    }
}

// Base URLs are joined with "/<resource>", so drop any trailing slash.
fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[async_trait]
impl TimingProvider for SpeedhiveClient {
    async fn list_events(&self) -> Result<ProviderPayload, ProviderError> {
        self.get_json(format!("{}/events", self.event_results_url))
            .await
    }

    async fn list_practice_locations(&self) -> Result<ProviderPayload, ProviderError> {
        self.get_json(format!("{}/locations", self.practice_url))
            .await
    }
}
