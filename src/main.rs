use std::sync::Arc;

use anyhow::Result;
use habitd::{rest, AppContext};

#[tokio::main]
async fn main() -> Result<()> {
    // Init once — must happen before any tracing calls.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .compact()
        .init();

    let ctx = Arc::new(AppContext::new());
    // Fresh fixture on every boot — state never survives a restart.
    ctx.store.seed_samples().await;

    rest::start_rest_server(ctx).await
}
