//! REST API client module for the Closed Group Calendar.
//!
//! One pre-configured client targets one fixed backend. Every request issued
//! through it is resolved against the base URL and carries
//! `Content-Type: application/json` unless the caller overrides it.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use closed_group_calendar_sdk::api::CalendarApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CalendarApiClient::new()?;
//!
//!     let events: serde_json::Value = client.get("events/").await?;
//!     let created: serde_json::Value = client
//!         .post("events/", &serde_json::json!({"title": "Standup"}))
//!         .await?;
//!
//!     let en = client.languages().get("en").await?;
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use closed_group_calendar_sdk::api::{CalendarApiClient, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .base_url("http://localhost:8000/api/")
//!     .timeout_secs(10)
//!     .build()?;
//! let client = CalendarApiClient::from_config(config)?;
//! ```
//!
//! # Error Handling
//!
//! Transport errors and non-2xx responses reach the caller unchanged:
//!
//! ```rust,ignore
//! match client.languages().get("xx").await {
//!     Ok(data) => println!("{data}"),
//!     Err(ApiError::Status { status, body }) => println!("{status}: {body}"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod languages;
pub mod shared;
pub mod types;

// Re-export main types for convenience
pub use client::{ApiRequest, CalendarApiClient};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use languages::Languages;
pub use shared::shared;
pub use types::*;
