mod app;
mod auth;
mod bootstrap;
mod helper;
mod router;


fn enable_tracing() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // extractor rejections are only logged by axum at trace level
            "myapp=debug,tower_http=debug,axum::rejection=trace".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    enable_tracing();

    let config = app::Config::from_env()?;
    let app = config.build()?;
    app.run().await?;

    Ok(())
}
