// Framework bootstrap for the gateway runtime.

use crate::domain::TimingProvider;
use crate::frameworks::config::{ProviderMode, Settings};
use crate::interface_adapters::clients::{EmptyProvider, SpeedhiveClient};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::io::Result;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;

fn init_runtime() {
    // PORT and the SPEEDHIVE_* settings may come from a local .env file.
    let _ = dotenvy::dotenv();

    // RUST_LOG wins; otherwise log gateway traffic at info.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, settings: Settings) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(&settings)?;

    // Start the web server with the HTTP routes wired up.
    let app = routes::app(state);

    tracing::info!(%address, mode = %settings.mode, "Speedhive gateway listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let settings = Settings::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let listener = bind_listener(&settings).await?;

    run(listener, settings).await
}

// Dual-stack wildcard first, then IPv4 only for hosts without IPv6.
pub fn listen_addresses(port: u16) -> [SocketAddr; 2] {
    [
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, port)),
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
    ]
}

// Bind the configured port on all interfaces; the last bind error aborts startup.
pub async fn bind_listener(settings: &Settings) -> Result<tokio::net::TcpListener> {
    let [dual_stack, ipv4] = listen_addresses(settings.port);

    match tokio::net::TcpListener::bind(dual_stack).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            tracing::debug!(
                address = %dual_stack,
                error = %e,
                "dual-stack bind failed, trying IPv4"
            );
            tokio::net::TcpListener::bind(ipv4).await.inspect_err(|e| {
                tracing::error!(address = %ipv4, error = %e, "failed to bind");
            })
        }
    }
}

fn build_state(settings: &Settings) -> Result<Arc<AppState>> {
    let provider: Arc<dyn TimingProvider> = match settings.mode {
        ProviderMode::Live => {
            let client = SpeedhiveClient::new(
                settings.event_results_url.clone(),
                settings.practice_url.clone(),
            )
            .map_err(|e| {
                tracing::error!(error = %e, "failed to initialize Speedhive client");
                std::io::Error::other(format!("failed to initialize Speedhive client: {e}"))
            })?;
            tracing::debug!(
                event_results_url = %client.event_results_url,
                practice_url = %client.practice_url,
                "Speedhive client configured"
            );
            Arc::new(client)
        }
        ProviderMode::Stub => {
            tracing::debug!("stub provider configured, listings will be empty");
            Arc::new(EmptyProvider)
        }
    };

    Ok(Arc::new(AppState { provider }))
}
