pub mod dns;

pub use dns::ResolveDomainUseCase;
