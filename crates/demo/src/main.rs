use anyhow::Context;
use clap::Parser;
use demo::ProviderClient;
use service_runtime::{normalize_base_url, ServerConfig};

#[derive(Parser)]
#[command(name = "demo")]
#[command(about = "CRUD demo endpoints plus a forwarding call to localhostprovider", long_about = None)]
struct Args {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
    /// Base URL of the localhostprovider service
    #[arg(
        long,
        env = "LOCALHOSTPROVIDER_URL",
        default_value = "http://localhostprovider:8081"
    )]
    provider_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    service_runtime::load_dotenv();
    service_runtime::init_tracing("demo=info,tower_http=info");

    let args = Args::parse();
    let config = ServerConfig::new(args.host, args.port);

    let provider_url = normalize_base_url(&args.provider_url)
        .with_context(|| format!("invalid provider url: {}", args.provider_url))?;
    tracing::info!(
        "Resolved {} at {}",
        demo::client::PROVIDER_SERVICE_NAME,
        provider_url
    );

    let app = demo::router(ProviderClient::new(provider_url));

    service_runtime::serve(app, &config)
        .await
        .context("demo server failed")?;

    Ok(())
}
