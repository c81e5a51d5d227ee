//! Minimal walkthrough against a running service: check the session, log in
//! if needed, then print the open shortages.
//!
//! ```sh
//! SOUQ_API_BASE_URL=http://localhost:3000/api \
//! SOUQ_USERNAME=baraka SOUQ_PASSWORD=secret \
//! cargo run -p souq-client --example list_shortages
//! ```

use souq_client::ClientConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let base_url = std::env::var("SOUQ_API_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:3000/api".to_string());
    let client = ClientConfig::new(base_url).build_client();

    let session = client.check_session().await?;
    let store = match session.store {
        Some(store) if session.logged_in => store,
        _ => {
            let username = std::env::var("SOUQ_USERNAME")?;
            let password = std::env::var("SOUQ_PASSWORD")?;
            client.login(&username, &password).await?
        }
    };
    tracing::info!(store = %store.username, "Logged in");

    for shortage in client.shortages(None).await? {
        tracing::info!(
            id = shortage.id,
            product = %shortage.product_name,
            quantity = shortage.quantity,
            unit = %shortage.unit,
            store = %shortage.store_name,
            responses = shortage.responses.len(),
            fulfilled = shortage.is_fulfilled,
            "shortage"
        );
    }

    Ok(())
}
