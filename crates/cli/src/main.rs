use brandwatch_domain::CliOverrides;
use brandwatch_jobs::{CheckerFeedJob, JobRunner};
use clap::Parser;
use mimalloc::MiMalloc;
use std::net::SocketAddr;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "brandwatch")]
#[command(version)]
#[command(about = "Brandwatch - domain inventory dashboard with live block-status sync")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// WebSocket URL of the checker's blocked-domain feed
    #[arg(long)]
    checker_feed_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        database_path: cli.database,
        log_level: cli.log_level,
        checker_feed_url: cli.checker_feed_url,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Brandwatch v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool);
    let services = di::Services::new(&config)?;
    let use_cases = di::UseCases::new(&config, &repos, &services);

    let shutdown = CancellationToken::new();

    let mut runner = JobRunner::new().with_shutdown_token(shutdown.clone());
    if let Some(transport) = services.feed_transport.clone() {
        runner = runner.with_checker_feed(CheckerFeedJob::new(
            transport,
            use_cases.apply_feed_event.clone(),
            Duration::from_millis(config.checker.reconnect_delay_ms),
        ));
    } else {
        info!("No checker feed configured, live block-status sync disabled");
    }
    runner.start().await;

    let app_state = use_cases.app_state(&services);

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    server::start_web_server(web_addr, app_state, &config.server, shutdown.clone()).await?;

    shutdown.cancel();
    services.coalescer.flush();

    info!("Server shutdown complete");
    Ok(())
}
