
pub use mock_resolver::MockDnsResolver;
