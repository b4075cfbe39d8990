use clap::Parser;
use std::net::Ipv4Addr;
use tracing::info;
use walkdns_domain::{CliOverrides, RecordType};

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "walkdns")]
#[command(version)]
#[command(about = "Iterative DNS resolver that walks delegations from the root")]
struct Cli {
    /// Domain name to resolve
    domain: String,

    /// Record type to ask for (A, NS, CNAME, SOA, MX, TXT, AAAA)
    #[arg(default_value = "A")]
    record_type: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Root nameserver to start from
    #[arg(long, value_name = "IP")]
    root_server: Option<Ipv4Addr>,

    /// Maximum queries for one resolution, nested lookups included
    #[arg(long, value_name = "N")]
    max_queries: Option<u32>,

    /// Per-query timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Seed for query ids
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Send one query to this server and print the whole response
    #[arg(short = 's', long, value_name = "IP")]
    server: Option<Ipv4Addr>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        root_server: cli.root_server,
        max_queries: cli.max_queries,
        query_timeout: cli.timeout,
        query_id_seed: cli.seed,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let record_type: RecordType = cli.record_type.parse()?;
    let services = di::DnsServices::new(&config);

    match cli.server {
        Some(server) => {
            info!(server = %server, domain = %cli.domain, record_type = %record_type, "Single query");
            let packet = services.resolver.query(server, &cli.domain, record_type).await?;
            output::print_packet(&packet);
        }
        None => {
            let resolution = services
                .resolve_domain
                .execute(&cli.domain, record_type)
                .await?;
            output::print_resolution(&resolution);
        }
    }

    Ok(())
}
