//! walkdns infrastructure: DNS wire codec, transports and the iterative resolver.
pub mod dns;
