use anyhow::Context;
use clap::Parser;
use service_runtime::ServerConfig;

#[derive(Parser)]
#[command(name = "localhostprovider")]
#[command(about = "Echoes myValue back from /myfeignreceiver", long_about = None)]
struct Args {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8081)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    service_runtime::load_dotenv();
    service_runtime::init_tracing("localhostprovider=info,tower_http=info");

    let args = Args::parse();
    let config = ServerConfig::new(args.host, args.port);

    tracing::info!("localhostprovider starting on {}", config.bind_address());

    service_runtime::serve(localhostprovider::router(), &config)
        .await
        .context("localhostprovider server failed")?;

    Ok(())
}
