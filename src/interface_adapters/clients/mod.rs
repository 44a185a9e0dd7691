// Provider adapters: the live Speedhive client and the empty stub.
mod speedhive;
mod stub;

pub use speedhive::{DEFAULT_EVENT_RESULTS_URL, DEFAULT_PRACTICE_URL, SpeedhiveClient};
pub use stub::EmptyProvider;
