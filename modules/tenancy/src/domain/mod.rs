pub mod enrich;
pub mod error;
pub mod events;
pub mod ports;
pub mod repo;
pub mod service;
pub mod stats;
pub(crate) mod validate;
