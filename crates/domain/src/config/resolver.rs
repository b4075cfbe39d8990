use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// a.root-servers.net
pub const DEFAULT_ROOT_SERVER: Ipv4Addr = Ipv4Addr::new(198, 41, 0, 4);

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Where every resolution starts its delegation walk.
    #[serde(default = "default_root_server")]
    pub root_server: Ipv4Addr,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on queries sent for one top-level resolution,
    /// nested nameserver lookups included.
    #[serde(default = "default_max_queries")]
    pub max_queries: u32,

    /// Per-query timeout in seconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Seed for query ids. Unset means seeded from entropy.
    #[serde(default)]
    pub query_id_seed: Option<u64>,
}

impl ResolverConfig {
    pub fn root_addr(&self) -> SocketAddr {
        SocketAddr::from((self.root_server, self.port))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            port: default_port(),
            max_queries: default_max_queries(),
            query_timeout: default_query_timeout(),
            query_id_seed: None,
        }
    }
}

fn default_root_server() -> Ipv4Addr {
    DEFAULT_ROOT_SERVER
}
fn default_port() -> u16 {
    53
}
fn default_max_queries() -> u32 {
    32
}
fn default_query_timeout() -> u64 {
    5
}
