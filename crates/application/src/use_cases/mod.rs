pub mod dns;

pub use dns::LookupUseCase;
