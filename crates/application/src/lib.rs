//! walkdns application layer: the resolver port and the use cases driving it.
pub mod ports;
pub mod use_cases;
