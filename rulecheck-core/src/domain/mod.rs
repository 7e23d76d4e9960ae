pub mod error;
pub mod ports;
pub mod review;
pub mod rules;

pub use error::DomainError;
