use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Errors are already logged by the server bootstrap.
    match speedhive_gateway::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
