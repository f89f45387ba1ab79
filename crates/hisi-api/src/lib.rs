// hisi-api: Async Rust client for the Hisi storefront and admin REST API

pub mod auth;
pub mod client;
pub mod error;
pub mod transport;
pub mod types;

mod admin;
mod storefront;

pub use auth::AuthToken;
pub use client::StoreClient;
pub use error::Error;
pub use transport::TransportConfig;
pub use types::{Envelope, Page};
