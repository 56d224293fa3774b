use anyhow::Context;
use zoo::domain::config::{ApiConfig, LogConfig};
use zoo::kernel::config::load_config;
use zoo_logger::{LevelFilter, Logger};
use zoo_server::Server;

fn init_logger(log: &LogConfig) -> anyhow::Result<Logger> {
    let level: LevelFilter =
        log.level.parse().with_context(|| format!("Invalid log level '{}'", log.level))?;

    let mut builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    if let Some(filter) = &log.filter {
        builder = builder.env_filter(filter);
    }

    let logger = match &log.directory {
        Some(dir) if log.json => builder.path(dir).json().init()?,
        Some(dir) => builder.path(dir).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}

/// Usage: `zoo-server [CONFIG_FILE]`. Without an argument an optional `server.toml` is read.
#[zoo_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig = load_config(std::env::args_os().nth(1))
        .context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg.log)?;

    Server::builder().config(cfg).build()?.run().await
}
