use color_eyre::eyre::Result;
use formguard_adapters::config::FormGuardSettings;
use formguard_service::{build_service, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = FormGuardSettings::load()?;
    let service = build_service(&settings).await?;

    let listener = TcpListener::bind(&settings.server.address).await?;
    tracing::info!("Starting formguard login service...");

    service.run_standalone(listener).await?;

    Ok(())
}
