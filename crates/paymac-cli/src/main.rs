use clap::Parser;

use paymac_core::Secret;
use paymac_serve::ServeConfig;

/// Env var consulted when --secret is not given.
const SECRET_ENV: &str = "PAYMAC_SECRET";

#[derive(Parser)]
#[command(name = "paymac", version, about = "HMAC-SHA256 salary attestation service")]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,
    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Shared MAC secret (falls back to the PAYMAC_SECRET env var)
    #[arg(long)]
    secret: Option<String>,
}

/// Resolve the shared secret from the flag or the environment. There is
/// no built-in default: a digest computed under an accidental key would
/// verify nowhere else.
fn resolve_secret(flag: Option<String>) -> anyhow::Result<Secret> {
    let raw = match flag {
        Some(s) => s,
        None => match std::env::var(SECRET_ENV) {
            Ok(s) => s,
            Err(_) => anyhow::bail!("no secret configured (pass --secret or set {SECRET_ENV})"),
        },
    };
    let secret = Secret::new(raw);
    if secret.is_empty() {
        anyhow::bail!("secret must not be empty");
    }
    Ok(secret)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ServeConfig {
        bind: cli.bind,
        port: cli.port,
        secret: resolve_secret(cli.secret)?,
    };

    tokio::runtime::Runtime::new()?.block_on(paymac_serve::serve(config))
}
