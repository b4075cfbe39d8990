use std::sync::Arc;
use tracing::debug;
use walkdns_application::use_cases::ResolveDomainUseCase;
use walkdns_domain::Config;
use walkdns_infrastructure::dns::{IterativeResolver, UdpTransport};

pub struct DnsServices {
    pub resolver: Arc<IterativeResolver<UdpTransport>>,
    pub resolve_domain: Arc<ResolveDomainUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let transport = UdpTransport::new(config.resolver.timeout());
        let resolver = Arc::new(IterativeResolver::new(transport, &config.resolver));
        let resolve_domain = Arc::new(ResolveDomainUseCase::new(resolver.clone()));

        debug!(
            root = %config.resolver.root_addr(),
            timeout_secs = config.resolver.query_timeout,
            "DNS services initialized"
        );

        Self {
            resolver,
            resolve_domain,
        }
    }
}
