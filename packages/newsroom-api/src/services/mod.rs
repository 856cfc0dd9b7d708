//! One module per backend resource.
//!
//! Every function takes an [`ApiClient`](crate::client::ApiClient), issues a
//! single request, and returns canonical records — the envelope variance and
//! any field-name translation stays inside this layer.

pub mod ads;
pub mod aiml;
pub mod analytics;
pub mod articles;
pub mod auth;
pub mod categories;
pub mod notifications;
pub mod time_saver;
pub mod users;
