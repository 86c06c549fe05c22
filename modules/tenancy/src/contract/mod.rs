pub mod client;
pub mod error;
pub mod model;

pub use client::TenancyApi;
pub use error::TenancyError;
