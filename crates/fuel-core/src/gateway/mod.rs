mod client;
mod error;

pub use client::{build_url, ApiClient, SimpleOk};
pub use error::ApiError;
