//! Synchronous client for the Riot API.
//!
//! Everything goes through a [`RiotSession`], which carries the API key and a
//! default region for a sequence of calls:
//!
//! ```no_run
//! use league_client::{ApiError, RiotSession};
//!
//! fn main() -> Result<(), ApiError> {
//!     let session = RiotSession::new("my-api-key");
//!     let featured = session.get_featured()?;
//!     println!("{} featured games", featured.len());
//!     Ok(())
//! }
//! ```
//!
//! Responses come back as raw [`serde_json::Value`]s; list-shaped operations
//! return an empty vector when the upstream reports no data.

pub mod api;
pub mod config;
pub mod error;

pub use api::client::RiotSession;
pub use config::Config;
pub use error::ApiError;
