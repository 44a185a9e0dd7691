use crate::domain::TimingProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // Arc<dyn Trait> lets startup pick the live client or the stub.
    pub provider: Arc<dyn TimingProvider>,
}
