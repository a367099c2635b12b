#![recursion_limit = "256"]

mod config;
mod routes;

#[tokio::main]
async fn main() {
    // Missing `.env` is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let app = routes::app().expect("leptos configuration failed");

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.expect("failed to bind");

    tracing::info!(%addr, "admin console listening");
    axum::serve(listener, app).await.expect("server failed");
}
