use loginbox::{app, config::AppConfig, state::AppState, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing("loginbox=debug,axum=info,tower_http=info");

    let config = AppConfig::from_env()?;
    let state = AppState::init(config).await?;

    let addr = app::bind_addr(&state)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    app::serve(listener, app::build_app(state)).await
}
