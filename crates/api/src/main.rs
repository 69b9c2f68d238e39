use std::sync::Arc;

use anyhow::Context;

use portero_api::app::{self, AppServices};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    portero_observability::init();

    let secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
    let lifetime_secs = match std::env::var("TOKEN_LIFETIME_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .context("TOKEN_LIFETIME_SECS must be an integer number of seconds")?,
        Err(_) => 3600,
    };

    // A bad signing key aborts startup here, never per-request.
    let services = Arc::new(
        AppServices::build(secret.as_bytes(), lifetime_secs)
            .context("signing key misconfigured")?,
    );

    // Signup only grants the default role, so the first administrator is
    // seeded from the environment.
    if let (Ok(username), Ok(password)) = (
        std::env::var("ADMIN_USERNAME"),
        std::env::var("ADMIN_PASSWORD"),
    ) {
        services
            .seed_admin(&username, &password)
            .context("failed to seed administrator account")?;
    }

    let app = app::build_app(services);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
