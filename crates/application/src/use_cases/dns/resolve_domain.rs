use crate::ports::{DnsResolution, DnsResolver};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use walkdns_domain::{DnsQuery, DomainError, RecordType};

pub struct ResolveDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<DnsResolution, DomainError> {
        let domain = normalize_domain(domain)?;
        let query = DnsQuery::new(domain, record_type);
        let start = Instant::now();

        match self.resolver.resolve(&query).await {
            Ok(resolution) => {
                info!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    data = %resolution.data,
                    nameserver = %resolution.nameserver,
                    queries = resolution.queries_sent,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Resolution complete"
                );
                Ok(resolution)
            }
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    error = %e,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Resolution failed"
                );
                Err(e)
            }
        }
    }
}

/// Trims whitespace and one trailing root dot.
fn normalize_domain(domain: &str) -> Result<String, DomainError> {
    let trimmed = domain.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(DomainError::Encoding(
            "domain name must not be empty".to_string(),
        ));
    }

    Ok(trimmed.to_string())
}
