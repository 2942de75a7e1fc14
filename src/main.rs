use staticd::config::Config;
use staticd::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::from_args(std::env::args().skip(1))?;

    // Binding is fatal on failure; accept errors later are not.
    let listener = server::listener::bind(&cfg.host, cfg.port).await?;

    tokio::select! {
        res = server::listener::run(listener, cfg.root) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
