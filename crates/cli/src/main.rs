use clap::Parser;
use ferrous_lookup_domain::{CliOverrides, LookupRequest};
use tracing::{debug, warn};

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous Lookup - iterative DNS resolution starting at a root server")]
struct Cli {
    /// Root name server to start from (IP address or host name)
    root_server: String,

    /// Fully qualified domain name to look up
    fqdn: String,

    /// Ask for AAAA instead of A records
    #[arg(short = '6')]
    ipv6: bool,

    /// Trace every query sent and every response received (combine as -t6)
    #[arg(short = 't')]
    trace: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Per-receive timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Port used for every server below the root
    #[arg(long)]
    dns_port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        timeout_ms: cli.timeout_ms,
        dns_port: cli.dns_port,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        timeout_ms = config.resolver.timeout_ms,
        max_queries = config.resolver.max_queries,
        "Starting Ferrous Lookup"
    );

    let root_server =
        match bootstrap::resolve_root_server(&cli.root_server, config.resolver.dns_port).await {
            Ok(addr) => addr,
            Err(e) => {
                warn!(host = %cli.root_server, error = %e, "Root server unusable");
                let sentinel: Vec<_> = e.sentinel_record(&cli.fqdn).into_iter().collect();
                output::print_answers(&cli.fqdn, &sentinel);
                return Ok(());
            }
        };

    let services = di::LookupServices::new(&config, cli.trace);

    let request = LookupRequest::new(root_server, cli.fqdn.as_str(), cli.ipv6);
    let records = services.lookup.execute(&request).await;

    output::print_answers(&cli.fqdn, &records);

    Ok(())
}
