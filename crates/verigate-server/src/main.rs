//! VERIGATE Server — application entry point.

use tracing_subscriber::EnvFilter;
use verigate_auth::AccountService;
use verigate_db::{DbManager, repository::SurrealAccountRepository};
use verigate_mail::SmtpNotifier;
use verigate_server::{AppState, ServerConfig, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("verigate=info".parse()?),
        )
        .json()
        .init();

    tracing::info!("Starting VERIGATE server...");

    let config = ServerConfig::load()?;

    let db = DbManager::connect(&config.db).await?;
    verigate_db::run_migrations(db.client()).await?;

    let repo = SurrealAccountRepository::new(db.client().clone());
    let notifier = SmtpNotifier::new(&config.mail)?;
    let service = AccountService::new(repo, notifier, config.auth.clone());

    let app = router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app).await?;

    tracing::info!("VERIGATE server stopped.");
    Ok(())
}
