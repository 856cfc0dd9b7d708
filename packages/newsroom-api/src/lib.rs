//! REST API client for the Newsroom publishing platform.
//!
//! The backend's response envelopes are inconsistent across endpoints; the
//! [`envelope`] module reconciles them into the canonical
//! [`Paginated`](types::Paginated) shape so page code never sees the
//! variance. Authorization is role-based — see [`types::Role`].

pub mod client;
pub mod envelope;
pub mod error;
pub mod services;
pub mod tags;
pub mod types;

pub use client::{get_api_url, init_api_url, ApiClient};
pub use error::ApiError;
