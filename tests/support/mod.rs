// Shared bootstrapping for gateway integration tests.
use axum::Router;
use speedhive_gateway::{ProviderMode, Settings};

// Bind an ephemeral port on loopback so tests never collide with local services.
async fn bind_ephemeral() -> (tokio::net::TcpListener, String) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    (listener, format!("http://{addr}"))
}

// Serve a fake Speedhive upstream for the lifetime of the test runtime.
pub async fn spawn_upstream(router: Router) -> String {
    let (listener, base_url) = bind_ephemeral().await;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    base_url
}

// Start the gateway in the given mode and return its base URL.
// The listener is bound before spawning, so requests queue until serve starts.
pub async fn spawn_gateway(mode: ProviderMode, upstream_url: &str) -> String {
    let (listener, base_url) = bind_ephemeral().await;
    let settings = Settings {
        port: 0,
        mode,
        event_results_url: format!("{upstream_url}/eventresults"),
        practice_url: format!("{upstream_url}/practice"),
    };
    tokio::spawn(async move {
        speedhive_gateway::run(listener, settings)
            .await
            .expect("server failed");
    });
    base_url
}
