use clap::Parser;
use logwizzy::{app, cli::Cli};
use logwizzy_core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/logwizzy-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("logwizzy debug log started, tail -f /tmp/logwizzy-debug.log");
    }

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to built-in config");
        Config::defaults()
    });

    app::run(app::Options::resolve(&cli, &config)).await
}
