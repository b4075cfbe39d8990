use walkdns_domain::DomainError;

/// Queries one top-level resolution may still send, shared by every nested
/// nameserver lookup it triggers.
#[derive(Debug)]
pub struct QueryBudget {
    limit: u32,
    used: u32,
}

impl QueryBudget {
    pub fn new(limit: u32) -> Self {
        Self { limit, used: 0 }
    }

    /// Takes one query from the budget, failing once it is spent.
    pub fn charge(&mut self, domain: &str) -> Result<(), DomainError> {
        if self.used >= self.limit {
            return Err(DomainError::Resolution(format!(
                "referral limit exceeded: {} queries sent while resolving {}",
                self.used, domain
            )));
        }
        self.used += 1;
        Ok(())
    }

    pub fn used(&self) -> u32 {
        self.used
    }

    pub fn remaining(&self) -> u32 {
        self.limit - self.used
    }
}
