//! # Closed Group Calendar Rust SDK
//!
//! A pre-configured HTTP client for the Closed Group Calendar API.
//!
//! ## Modules
//!
//! - [`api`]: the shared REST client, its configuration and typed endpoints
//! - [`network`]: fixed endpoint constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use closed_group_calendar_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Same instance on every call
//!     let api = shared()?;
//!
//!     // GET https://closed-group-calendar.onrender.com/api/events/
//!     let events: serde_json::Value = api.get("events/").await?;
//!     println!("{events}");
//!
//!     Ok(())
//! }
//! ```

/// REST API client.
pub mod api;

/// Network URL constants.
pub mod network;

pub mod prelude {
    pub use crate::api::{
        shared, ApiError, ApiRequest, ApiResult, CalendarApiClient, ClientConfig,
        ClientConfigBuilder, LanguageData, SaveResponse,
    };
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_CONTENT_TYPE};
}
